use std::process::ExitCode;

use node_nanny::banner::print_startup_banner;
use node_nanny::check_config::run_check_config;
use node_nanny::cli::parse_or_exit;
use node_nanny::{paint, run_step, set_color_mode, Prompter, TOOLS};

fn main() -> ExitCode {
    let cli = match parse_or_exit() {
        Ok(cli) => cli,
        Err(code) => return code,
    };
    if let Some(mode) = cli.color {
        set_color_mode(mode);
    }

    print_startup_banner();

    // Check-config mode reports and exits; no setup, no prompts.
    if cli.check_config {
        run_check_config();
        return ExitCode::SUCCESS;
    }

    let mut prompter = Prompter::stdin();

    let name = match cli.name {
        Some(n) => n,
        None => prompter.ask("What is your name? "),
    };
    let email = match cli.email {
        Some(e) => e,
        None => prompter.ask("And what's your email address? "),
    };
    // The --proxy flag is affirmative on its own; only without it do we
    // ask, comparing the lowercased reply against the literal "yes".
    let use_proxy = cli.proxy
        || prompter
            .ask("Do you need to set up a proxy? (yes/no): ")
            .to_lowercase()
            == "yes";

    let use_out = node_nanny::color_enabled_stdout();
    for tool in TOOLS {
        if tool.is_installed() {
            println!();
            println!(
                "{}",
                paint(
                    use_out,
                    "\x1b[36;1m",
                    &format!("Setting up your {} configuration, {name}...", tool.label())
                )
            );
            for step in tool.author_steps(&name, &email) {
                run_step(&step);
            }
        } else {
            println!(
                "{} is not installed. Skipping {} configuration.",
                tool.label(),
                tool.label()
            );
        }
    }

    if use_proxy {
        let http_proxy = prompter.ask("Enter the HTTP proxy URL: ");
        let https_proxy = prompter.ask("Enter the HTTPS proxy URL: ");

        for tool in TOOLS {
            if tool.is_installed() {
                println!();
                println!(
                    "{}",
                    paint(
                        use_out,
                        "\x1b[36;1m",
                        &format!("Setting up your {} proxy settings...", tool.label())
                    )
                );
                for step in tool.proxy_steps(&http_proxy, &https_proxy) {
                    run_step(&step);
                }
            } else {
                println!(
                    "{} is not installed. Skipping {} proxy configuration.",
                    tool.label(),
                    tool.label()
                );
            }
        }
    }

    println!();
    println!(
        "All done! node-nanny has taken good care of your setup, {name}. Have a great day!"
    );
    ExitCode::SUCCESS
}
