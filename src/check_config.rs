//! Check-config mode: report the current configuration of npm, Yarn
//! and npx without changing anything.

use which::which;

use crate::color::{color_enabled_stdout, paint};
use crate::exec::run_step;
use crate::tools::config_probes;

/// Probe npm, Yarn and npx in that fixed order. Present tools get
/// their listing command run with output inherited to the terminal;
/// absent tools get a skip notice. Individual failures never stop the
/// iteration.
pub fn run_check_config() {
    let use_out = color_enabled_stdout();
    println!();
    println!("Checking current configuration...");
    println!();

    for probe in config_probes() {
        if which(probe.tool).is_ok() {
            println!(
                "{}",
                paint(
                    use_out,
                    "\x1b[36;1m",
                    &format!("{} configuration:", probe.tool.to_uppercase())
                )
            );
            run_step(&probe.step);
        } else {
            println!(
                "{} is not installed. Skipping {} configuration.",
                probe.tool, probe.tool
            );
        }
        println!();
    }
}
