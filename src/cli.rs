//! Command-line surface and parse-error policy.
//!
//! Help and version requests short-circuit with exit 0. Every other
//! parse problem (unknown flag, `--name`/`--email` left without a
//! value) prints the diagnostic followed by the full help text and
//! exits 1. No tool probing happens before parsing succeeds.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::process::ExitCode;

use crate::color::ColorMode;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "node-nanny",
    version,
    about = "Your friendly Node.js configuration helper: sets npm and Yarn author identity and proxy settings."
)]
pub struct Cli {
    /// Author name to configure (prompted for when omitted)
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Author email address to configure (prompted for when omitted)
    #[arg(long, short = 'e')]
    pub email: Option<String>,

    /// Configure both HTTP and HTTPS proxy (skips the yes/no question)
    #[arg(long, short = 'p')]
    pub proxy: bool,

    /// Check the current configuration for npm, Yarn and npx, then exit
    #[arg(long = "check-config", short = 'c')]
    pub check_config: bool,

    /// Colorize output: auto|always|never
    #[arg(long = "color", value_enum)]
    pub color: Option<ColorMode>,
}

/// Parse the argument list, terminating on help/version (exit 0) and
/// on usage errors (diagnostic + help text, exit 1).
pub fn parse_or_exit() -> Result<Cli, ExitCode> {
    match Cli::try_parse() {
        Ok(cli) => Ok(cli),
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{e}");
                Err(ExitCode::SUCCESS)
            }
            _ => {
                eprint!("{}", e.render());
                eprintln!();
                eprint!("{}", Cli::command().render_help());
                Err(ExitCode::from(1))
            }
        },
    }
}
