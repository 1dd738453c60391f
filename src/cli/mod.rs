pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "casedesk")]
#[command(about = "CaseDesk CLI - eCourts lookups, route guard checks and team display names")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Evaluate the dashboard route guard for a path")]
    Route(commands::route::RouteArgs),

    #[command(about = "Look up a case by CNR number")]
    Cnr(commands::cnr::CnrArgs),

    #[command(about = "Resolve the dashboard display name for an email")]
    Whois(commands::whois::WhoisArgs),

    #[command(about = "Show the effective configuration (secrets omitted)")]
    Config,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Route(args) => commands::route::handle(args, output_format),
        Commands::Cnr(args) => commands::cnr::handle(args, output_format).await,
        Commands::Whois(args) => commands::whois::handle(args, output_format).await,
        Commands::Config => commands::config::handle(output_format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_route_flags() {
        let cli = Cli::try_parse_from(["casedesk", "--json", "route", "/cases", "--authenticated"]).unwrap();
        assert!(matches!(OutputFormat::from_cli(&cli), OutputFormat::Json));
        match cli.command {
            Commands::Route(args) => {
                assert_eq!(args.path, "/cases");
                assert!(args.authenticated);
                assert!(!args.loading);
            }
            _ => panic!("expected route command"),
        }
    }

    #[test]
    fn parses_cnr_with_server() {
        let cli = Cli::try_parse_from(["casedesk", "cnr", "MHAU010012342023", "--server", "http://localhost:3000"]).unwrap();
        match cli.command {
            Commands::Cnr(args) => {
                assert_eq!(args.cnr, "MHAU010012342023");
                assert_eq!(args.server.as_deref(), Some("http://localhost:3000"));
            }
            _ => panic!("expected cnr command"),
        }
    }
}
