use serde_json::{json, Value};
use crate::cli::commands::cnr::LookupFailed;
use crate::cli::OutputFormat;

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let Some(data_value) = data {
                response["data"] = data_value;
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output an error message in the appropriate format
pub fn output_error(
    output_format: &OutputFormat,
    message: &str,
    error_code: Option<&str>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": false,
                "error": message
            });

            if let Some(code) = error_code {
                response["error_code"] = json!(code);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            eprintln!("Error: {}", message);
        }
    }
    Ok(())
}

/// Report a failed command once, in the selected output format.
pub fn report_error(output_format: &OutputFormat, err: &anyhow::Error, verbose: bool) {
    let message = if verbose { format!("{err:?}") } else { err.to_string() };
    let code = err.downcast_ref::<LookupFailed>().map(|failed| failed.code.as_str());

    if output_error(output_format, &message, code).is_err() {
        eprintln!("Error: {}", message);
    }
}

/// Print `key: value` lines for the scalar fields of a JSON object.
pub fn print_fields(value: &Value) {
    if let Some(obj) = value.as_object() {
        for (key, field) in obj {
            match field {
                Value::String(s) => println!("{}: {}", key, s),
                Value::Null => {}
                Value::Object(_) | Value::Array(_) => println!("{}: {}", key, field),
                other => println!("{}: {}", key, other),
            }
        }
    }
}
