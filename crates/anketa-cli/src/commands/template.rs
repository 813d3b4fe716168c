use anketa_core::template::builtin;
use anketa_core::template::schema::FieldKind;
use std::path::Path;

pub fn list() -> Result<(), anketa_core::error::AnketaError> {
    println!("Available predefined templates:\n");
    for name in builtin::PRESETS {
        let t = builtin::load_preset(name)?;
        let default_marker = if *name == builtin::DEFAULT_PRESET {
            " [default]"
        } else {
            ""
        };
        println!(
            "  {:<12} {} (v{}, {} questions){}",
            name,
            t.name,
            t.version,
            t.len(),
            default_marker
        );
        if let Some(ref desc) = t.description {
            println!("               {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), anketa_core::error::AnketaError> {
    let t = builtin::load_preset(preset)?;

    println!("{} (version {})\n", t.name, t.version);

    if let Some(ref desc) = t.description {
        println!("{}\n", desc);
    }

    let max_key_len = t.keys().map(|k| k.len()).max().unwrap_or(10);

    println!(
        "  {:<3}  {:<width$}  {:<12}  Question",
        "#",
        "Key",
        "Kind",
        width = max_key_len
    );
    println!("  {}", "-".repeat(max_key_len + 60));

    for (i, entry) in t.entries.iter().enumerate() {
        let required = if entry.required { " *" } else { "" };
        println!(
            "  {:<3}  {:<width$}  {:<12}  {}{}",
            i + 1,
            entry.key,
            entry.kind.to_string(),
            entry.phrase,
            required,
            width = max_key_len
        );
    }

    println!("\n  * required: reported as a warning when left empty\n");

    let kinds = [
        (FieldKind::Rating, "first score from 1 to 10 in the answer"),
        (FieldKind::TicketPrice, "one of the three printed price options"),
        (FieldKind::YesNo, "\"Да\" or \"Нет\" from marks and words"),
        (FieldKind::Phone, "+7XXXXXXXXXX"),
    ];
    println!("Normalization:");
    for (kind, what) in kinds {
        if t.entries.iter().any(|e| e.kind == kind) {
            println!("  {:<12}  {}", kind.to_string(), what);
        }
    }
    println!();

    Ok(())
}

pub fn schema() -> Result<(), anketa_core::error::AnketaError> {
    print!(
        r#"JSON Template Schema
====================

A template lists the questions printed on one version of a paper form.
When you run `anketa parse` or `anketa scan`, each line of recognized text
is checked for these phrases, and the next line that is not itself a
question is taken as the answer.

Top-level fields:
  name          (string, required)  Human-readable name of the form
  description   (string, optional)  What this form is for
  version       (string, required)  Version identifier of the printed form
  entries       (array, required)   Ordered list of questions (see below).
                                    When a line contains several phrases,
                                    the earliest entry wins.

Each entry in the "entries" array:
  phrase        (string, required)  Question text exactly as printed.
                                    Matched as a case-sensitive substring
                                    of a recognized line.
  key           (string, required)  Output field name. Must be unique and
                                    must not be one of: success,
                                    error_message, processing_time_ms,
                                    raw_text, fields.
  kind          (string, optional)  How to normalize the answer:
                                    "text" (default, kept as is),
                                    "rating" (1-10), "ticket_price",
                                    "yes_no", "phone".
  required      (bool, optional)    Warn when the answer comes back empty.
                                    Default: false.

No phrase may contain another phrase of the same template.

Example:
{{
  "name": "Cafe feedback",
  "version": "2",
  "entries": [
    {{ "phrase": "Дата:", "key": "date", "required": true }},
    {{ "phrase": "Как вам кофе?", "key": "coffee_rating", "kind": "rating" }},
    {{ "phrase": "Придёте ещё?", "key": "will_return", "kind": "yes_no" }},
    {{ "phrase": "Ваш телефон", "key": "phone", "kind": "phone" }}
  ]
}}
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), anketa_core::error::AnketaError> {
    let t = anketa_core::template::load_template(file)?;

    println!("Template '{}' (v{}) is valid.", t.name, t.version);
    println!("  Questions: {}", t.len());
    println!("  Keys: {}", t.keys().collect::<Vec<_>>().join(", "));

    // Check for potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    for entry in &t.entries {
        if entry.phrase != entry.phrase.trim() {
            warnings.push(format!(
                "phrase of '{}' has leading or trailing whitespace and cannot match at a line edge",
                entry.key
            ));
        }
    }
    if !t.entries.iter().any(|e| e.required) {
        warnings.push("no entry is marked required".to_string());
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
