use anketa_core::model::ScanResult;
use anketa_core::template::schema::Template;

pub fn print(results: &[(String, ScanResult)], template: &Template) {
    print!("{}", format_results(results, template));
}

/// Format scan results as aligned key/value blocks, one per form.
pub fn format_results(results: &[(String, ScanResult)], template: &Template) -> String {
    let mut out = String::new();
    let multi = results.len() > 1;

    for (i, (source, result)) in results.iter().enumerate() {
        if multi {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&format!("--- {} ---\n\n", source));
        }

        if !result.success {
            out.push_str(&format!("  FAILED: {}\n", result.error_message));
            continue;
        }

        let width = template.keys().map(|k| k.chars().count()).max().unwrap_or(10);

        for answer in result.answers() {
            let value = if answer.value.is_empty() {
                "-"
            } else {
                answer.value.as_str()
            };
            out.push_str(&format!("  {:<width$}  {}\n", answer.key, value, width = width));
        }

        out.push_str(&format!(
            "\n  {} of {} question(s) found, {:.0} ms\n",
            result.fields.len(),
            template.len(),
            result.processing_time_ms
        ));
    }

    out
}
