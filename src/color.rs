//! Color mode configuration and ANSI painting helpers.
//!
//! Precedence for enabling color on a stream:
//! 1) NO_COLOR disables unconditionally (https://no-color.org/)
//! 2) --color flag via set_color_mode
//! 3) NODE_NANNY_COLOR environment variable
//! 4) auto: color when the stream is a TTY

use clap::ValueEnum;
use once_cell::sync::OnceCell;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

static COLOR_MODE: OnceCell<ColorMode> = OnceCell::new();

pub fn set_color_mode(mode: ColorMode) {
    let _ = COLOR_MODE.set(mode);
}

fn parse_color_mode(s: &str) -> Option<ColorMode> {
    match s.trim().to_ascii_lowercase().as_str() {
        "auto" => Some(ColorMode::Auto),
        "always" | "on" | "true" | "yes" => Some(ColorMode::Always),
        "never" | "off" | "false" | "no" => Some(ColorMode::Never),
        _ => None,
    }
}

fn env_color_mode_pref() -> Option<ColorMode> {
    std::env::var("NODE_NANNY_COLOR")
        .ok()
        .and_then(|v| parse_color_mode(&v))
}

fn no_color_env() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

fn color_choice(
    no_color: bool,
    cli_mode: Option<ColorMode>,
    env_mode: Option<ColorMode>,
    is_tty: bool,
) -> bool {
    if no_color {
        return false;
    }
    match cli_mode.or(env_mode).unwrap_or(ColorMode::Auto) {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_tty,
    }
}

fn color_enabled_for(is_tty: bool) -> bool {
    color_choice(
        no_color_env(),
        COLOR_MODE.get().copied(),
        env_color_mode_pref(),
        is_tty,
    )
}

pub fn color_enabled_stdout() -> bool {
    color_enabled_for(atty::is(atty::Stream::Stdout))
}

pub fn color_enabled_stderr() -> bool {
    color_enabled_for(atty::is(atty::Stream::Stderr))
}

/// Wrap string with ANSI color code when enabled; otherwise return unchanged.
pub fn paint(enabled: bool, code: &str, s: &str) -> String {
    if enabled {
        format!("{code}{s}\x1b[0m")
    } else {
        s.to_string()
    }
}

/// Color-aware stderr one-liner for failure notices.
pub fn log_error_stderr(use_color: bool, msg: &str) {
    eprintln!("{}", paint(use_color, "\x1b[31;1m", msg));
}
