//! node-nanny: configures npm and Yarn author identity and proxy
//! settings by driving the tools' own config subcommands.
//!
//! Architecture
//! - Binary glue (src/main.rs) orchestrates CLI parsing, the banner,
//!   check-config mode and the interactive configure flow.
//! - tools.rs models the fixed tool set and the exact command lines.
//! - exec.rs runs one command best-effort with inherited streams.
//! - prompt.rs reads one reply per question from stdin.
//! - color.rs holds color mode and paint/log wrappers.
//!
//! Environment
//! - NODE_NANNY_COLOR / NO_COLOR: crate-wide color control.

pub mod banner;
pub mod check_config;
pub mod cli;
pub mod color;
pub mod exec;
pub mod prompt;
pub mod tools;

pub use color::{
    color_enabled_stderr, color_enabled_stdout, log_error_stderr, paint, set_color_mode,
    ColorMode,
};
pub use exec::{run_step, StepOutcome};
pub use prompt::Prompter;
pub use tools::{config_probes, ConfigProbe, ConfigStep, Tool, TOOLS};
