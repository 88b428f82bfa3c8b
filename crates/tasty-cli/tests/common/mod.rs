use std::path::Path;
use std::process::{Command, Output};

/// Environment variables the CLI reads as flag fallbacks.
const CLI_ENV: [&str; 4] = ["TT_USER", "TT_PASSWORD", "TT_BASE_URL", "TT_API_VERSION"];

/// Run the CLI with a custom HOME directory for isolated session storage.
pub fn run_cli_with_home(args: &[&str], home: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tasty"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    for var in CLI_ENV {
        cmd.env_remove(var);
    }
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI with a custom HOME and expect success.
pub fn run_cli_success(args: &[&str], home: &Path) -> String {
    let output = run_cli_with_home(args, home);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI with a custom HOME and expect failure.
pub fn run_cli_failure(args: &[&str], home: &Path) -> String {
    let output = run_cli_with_home(args, home);
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Where the session file lands under an isolated HOME.
pub fn session_file(home: &Path) -> std::path::PathBuf {
    home.join("data").join("tasty").join("session.json")
}
