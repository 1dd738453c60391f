use clap::Args;

use crate::cli::utils::{output_success, print_fields};
use crate::cli::OutputFormat;
use crate::routing::decide;
use crate::session::AuthState;

#[derive(Args)]
pub struct RouteArgs {
    #[arg(help = "Path being navigated to, e.g. /cases/12")]
    pub path: String,

    #[arg(long, help = "Treat the user as signed in")]
    pub authenticated: bool,

    #[arg(long, help = "Treat the auth state as still loading")]
    pub loading: bool,
}

pub fn handle(args: RouteArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let auth = AuthState {
        is_authenticated: args.authenticated,
        is_loading: args.loading,
    };
    let decision = decide(auth, &args.path);
    let data = serde_json::to_value(decision)?;

    let message = match decision.redirect {
        Some(redirect) => format!("{} -> {} ({:?})", args.path, redirect.to, redirect.mode),
        None => format!("{} renders {:?}", args.path, decision.render),
    };

    match output_format {
        OutputFormat::Json => output_success(&output_format, &message, Some(data)),
        OutputFormat::Text => {
            output_success(&output_format, &message, None)?;
            print_fields(&data);
            Ok(())
        }
    }
}
