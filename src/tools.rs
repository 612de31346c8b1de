//! The fixed set of package-manager tools and the config commands sent
//! to each of them. Command shapes follow the tools' own CLIs: npm uses
//! `npm set <key> <value>` for init-author keys but `npm config set`
//! for proxy keys; Yarn takes `yarn config set` for everything.

use std::path::PathBuf;

use which::which;

/// One configuration command to run against a tool: a program, its
/// argument vector and a short human-readable description for the
/// success/failure notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStep {
    pub program: &'static str,
    pub args: Vec<String>,
    pub description: String,
}

impl ConfigStep {
    fn new(program: &'static str, args: &[&str], description: String) -> Self {
        ConfigStep {
            program,
            args: args.iter().map(|s| s.to_string()).collect(),
            description,
        }
    }
}

/// The two tools whose author/proxy settings this program manages,
/// always handled in this order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tool {
    Npm,
    Yarn,
}

pub const TOOLS: [Tool; 2] = [Tool::Npm, Tool::Yarn];

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Npm => "npm",
            Tool::Yarn => "yarn",
        }
    }

    /// Display name used in headings and notices.
    pub fn label(&self) -> &'static str {
        match self {
            Tool::Npm => "npm",
            Tool::Yarn => "Yarn",
        }
    }

    /// Resolve the tool executable on PATH. Absence is a normal
    /// outcome, not an error; the probe is repeated on every call.
    pub fn resolve(&self) -> Option<PathBuf> {
        which(self.name()).ok()
    }

    pub fn is_installed(&self) -> bool {
        self.resolve().is_some()
    }

    /// The two author-identity commands for this tool.
    pub fn author_steps(&self, name: &str, email: &str) -> Vec<ConfigStep> {
        match self {
            Tool::Npm => vec![
                ConfigStep::new(
                    "npm",
                    &["set", "init-author-name", name],
                    format!("npm author \"{name}\""),
                ),
                ConfigStep::new(
                    "npm",
                    &["set", "init-author-email", email],
                    format!("npm email \"{email}\""),
                ),
            ],
            Tool::Yarn => vec![
                ConfigStep::new(
                    "yarn",
                    &["config", "set", "init-author-name", name],
                    format!("Yarn author \"{name}\""),
                ),
                ConfigStep::new(
                    "yarn",
                    &["config", "set", "init-author-email", email],
                    format!("Yarn email \"{email}\""),
                ),
            ],
        }
    }

    /// The two proxy commands (HTTP then HTTPS) for this tool.
    pub fn proxy_steps(&self, http_proxy: &str, https_proxy: &str) -> Vec<ConfigStep> {
        let label = self.label();
        vec![
            ConfigStep::new(
                self.name(),
                &["config", "set", "proxy", http_proxy],
                format!("{label} HTTP proxy"),
            ),
            ConfigStep::new(
                self.name(),
                &["config", "set", "https-proxy", https_proxy],
                format!("{label} HTTPS proxy"),
            ),
        ]
    }
}

/// One probe of the check-config report: the executable to look for and
/// the listing command to run when it is present.
#[derive(Debug, Clone)]
pub struct ConfigProbe {
    pub tool: &'static str,
    pub step: ConfigStep,
}

/// The fixed, ordered check-config probe set: npm, Yarn, npx. npx has
/// no config listing of its own (it shares npm's store), so its probe
/// is a version query.
pub fn config_probes() -> Vec<ConfigProbe> {
    vec![
        ConfigProbe {
            tool: "npm",
            step: ConfigStep::new(
                "npm",
                &["config", "list"],
                "npm configuration".to_string(),
            ),
        },
        ConfigProbe {
            tool: "yarn",
            step: ConfigStep::new(
                "yarn",
                &["config", "list"],
                "yarn configuration".to_string(),
            ),
        },
        ConfigProbe {
            tool: "npx",
            step: ConfigStep::new("npx", &["--version"], "npx configuration".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn npm_author_steps_use_bare_set() {
        let steps = Tool::Npm.author_steps("Ada Lovelace", "ada@example.com");
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].program, "npm");
        assert_eq!(steps[0].args, ["set", "init-author-name", "Ada Lovelace"]);
        assert_eq!(steps[1].args, ["set", "init-author-email", "ada@example.com"]);
        assert!(steps[0].description.contains("Ada Lovelace"));
    }

    #[test]
    fn yarn_author_steps_use_config_set() {
        let steps = Tool::Yarn.author_steps("Ada", "ada@example.com");
        assert_eq!(
            steps[0].args,
            ["config", "set", "init-author-name", "Ada"]
        );
        assert_eq!(
            steps[1].args,
            ["config", "set", "init-author-email", "ada@example.com"]
        );
    }

    #[test]
    fn proxy_steps_order_http_then_https() {
        for tool in TOOLS {
            let steps = tool.proxy_steps("http://p:3128", "https://p:3128");
            assert_eq!(steps[0].args[2], "proxy");
            assert_eq!(steps[0].args[3], "http://p:3128");
            assert_eq!(steps[1].args[2], "https-proxy");
            assert_eq!(steps[1].args[3], "https://p:3128");
        }
    }

    #[test]
    fn config_probes_fixed_order() {
        let probes = config_probes();
        let names: Vec<&str> = probes.iter().map(|p| p.tool).collect();
        assert_eq!(names, ["npm", "yarn", "npx"]);
        assert_eq!(probes[2].step.args, ["--version"]);
    }
}
