use std::path::Path;
use std::process::{Command, Output, Stdio};

pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_node-nanny")
}

/// Run the binary with a controlled PATH and optional scripted stdin.
/// An empty PATH dir makes every tool probe come up absent.
pub fn run_with_path(args: &[&str], path: &Path, stdin: Option<&str>) -> Output {
    let mut cmd = Command::new(bin());
    cmd.args(args)
        .env("PATH", path)
        .env_remove("NODE_NANNY_COLOR")
        .env("NO_COLOR", "1")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    match stdin {
        Some(input) => {
            cmd.stdin(Stdio::piped());
            let mut child = cmd.spawn().expect("failed to spawn node-nanny");
            {
                use std::io::Write;
                let mut pipe = child.stdin.take().expect("stdin pipe");
                pipe.write_all(input.as_bytes()).expect("write stdin");
            }
            child.wait_with_output().expect("wait for node-nanny")
        }
        None => {
            cmd.stdin(Stdio::null());
            cmd.output().expect("failed to run node-nanny")
        }
    }
}

/// Drop a fake tool executable into `dir` that appends its argv to
/// `log` and exits 0.
#[cfg(unix)]
pub fn write_stub_tool(dir: &Path, name: &str, log: &Path) {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let script = format!("#!/bin/sh\necho \"{} $*\" >> \"{}\"\n", name, log.display());
    let p = dir.join(name);
    fs::write(&p, script).expect("write stub tool");
    fs::set_permissions(&p, fs::Permissions::from_mode(0o755)).expect("chmod stub tool");
}

pub fn stdout_str(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

pub fn stderr_str(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).to_string()
}
