use crate::cli::utils::{output_success, print_fields};
use crate::cli::OutputFormat;
use crate::config::config;

pub fn handle(output_format: OutputFormat) -> anyhow::Result<()> {
    let config = config();
    let mut data = serde_json::to_value(config)?;
    data["ecourts"]["api_key_configured"] = config.ecourts.api_key.is_some().into();

    match output_format {
        OutputFormat::Json => output_success(&output_format, "Effective configuration", Some(data)),
        OutputFormat::Text => {
            output_success(&output_format, &format!("Environment: {:?}", config.environment), None)?;
            for section in ["server", "ecourts", "roster", "security"] {
                println!("[{}]", section);
                print_fields(&data[section]);
            }
            Ok(())
        }
    }
}
