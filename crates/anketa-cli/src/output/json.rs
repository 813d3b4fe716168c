use anketa_core::error::AnketaError;
use anketa_core::model::ScanResult;
use serde_json::Value;

/// Render one result as a JSON object, several as an array of objects
/// each carrying a `file` key.
pub fn render(results: &[(String, ScanResult)]) -> Result<String, AnketaError> {
    if let [(_, result)] = results {
        return Ok(serde_json::to_string_pretty(result)?);
    }

    let mut items = Vec::with_capacity(results.len());
    for (source, result) in results {
        let mut value = serde_json::to_value(result)?;
        if let Value::Object(map) = &mut value {
            map.insert("file".to_string(), Value::String(source.clone()));
        }
        items.push(value);
    }
    Ok(serde_json::to_string_pretty(&items)?)
}
