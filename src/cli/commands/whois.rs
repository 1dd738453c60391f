use clap::Args;
use serde_json::json;

use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config::config;
use crate::session::SessionUser;
use crate::team::{resolve_display_name, HttpTeamRoster, NameSource, ResolvedName};

#[derive(Args)]
pub struct WhoisArgs {
    #[arg(help = "Email of the signed-in user")]
    pub email: String,

    #[arg(long, help = "Name reported by the auth provider")]
    pub name: Option<String>,
}

pub async fn handle(args: WhoisArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let user = SessionUser {
        email: Some(args.email),
        name: args.name,
    };

    let resolved = match HttpTeamRoster::from_app_config(config())? {
        Some(roster) => resolve_display_name(&roster, &user).await,
        None => ResolvedName::fallback(user.fallback_display_name()),
    };

    let source = match resolved.source {
        NameSource::Roster => "team roster",
        NameSource::Fallback => "auth profile",
    };

    output_success(
        &output_format,
        &format!("{} (from {})", resolved.display_name, source),
        Some(json!(resolved)),
    )
}
