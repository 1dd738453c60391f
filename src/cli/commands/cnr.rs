use anyhow::Context;
use clap::Args;
use serde_json::Value;
use thiserror::Error;

use crate::cli::utils::{output_success, print_fields};
use crate::cli::OutputFormat;
use crate::config::config;
use crate::ecourts::{CaseProvider, EcourtsClient, LookupResult, ProviderConfig};

/// Provider-reported failure, surfaced once by the binary's error reporter.
#[derive(Debug, Error)]
#[error("CNR lookup for {cnr} failed: {message}")]
pub struct LookupFailed {
    pub cnr: String,
    pub code: String,
    pub message: String,
}

impl LookupFailed {
    fn from_result(cnr: &str, result: &LookupResult) -> Self {
        Self {
            cnr: cnr.to_string(),
            code: result.error.clone().unwrap_or_else(|| "API_ERROR".to_string()),
            message: result.message.clone().unwrap_or_else(|| "Lookup failed".to_string()),
        }
    }
}

#[derive(Args)]
pub struct CnrArgs {
    #[arg(help = "16-character CNR number")]
    pub cnr: String,

    #[arg(long, help = "Query a running CaseDesk server instead of the provider directly")]
    pub server: Option<String>,
}

pub async fn handle(args: CnrArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let result = match &args.server {
        Some(server) => lookup_via_server(server, &args.cnr).await?,
        None => lookup_direct(&args.cnr).await?,
    };

    if !result.success {
        return Err(LookupFailed::from_result(&args.cnr, &result).into());
    }

    let data = result.data.unwrap_or(Value::Null);
    match output_format {
        OutputFormat::Json => output_success(&output_format, &format!("Case {}", args.cnr), Some(data)),
        OutputFormat::Text => {
            output_success(&output_format, &format!("Case {}", args.cnr), None)?;
            print_fields(&data);
            Ok(())
        }
    }
}

async fn lookup_direct(cnr: &str) -> anyhow::Result<LookupResult> {
    let provider_config = ProviderConfig::from_app_config(config())?;
    let client = EcourtsClient::new(provider_config)?;
    Ok(client.lookup_by_cnr(cnr).await?)
}

/// Error bodies from the server share the `{success, error, message}` shape.
async fn lookup_via_server(server: &str, cnr: &str) -> anyhow::Result<LookupResult> {
    let url = format!("{}/api/ecourts/cnr", server.trim_end_matches('/'));
    let res = reqwest::Client::new()
        .post(&url)
        .json(&serde_json::json!({ "cnr": cnr }))
        .send()
        .await
        .with_context(|| format!("failed to reach {}", url))?;

    res.json::<LookupResult>()
        .await
        .with_context(|| format!("unexpected response from {}", url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reported_failure_carries_code_and_message() {
        let result = LookupResult::failed("CASE_NOT_FOUND", "Case not found");

        let err: anyhow::Error = LookupFailed::from_result("MHAU010012342023", &result).into();

        assert_eq!(err.to_string(), "CNR lookup for MHAU010012342023 failed: Case not found");
        let failed = err.downcast_ref::<LookupFailed>().unwrap();
        assert_eq!(failed.code, "CASE_NOT_FOUND");
    }

    #[test]
    fn failure_without_details_uses_defaults() {
        let result = LookupResult {
            success: false,
            data: None,
            error: None,
            message: None,
        };

        let failed = LookupFailed::from_result("X", &result);

        assert_eq!(failed.code, "API_ERROR");
        assert_eq!(failed.message, "Lookup failed");
    }
}
