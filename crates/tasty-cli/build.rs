//! Stamps the `tasty` binary with a version for `--version`.
//!
//! Inside a git checkout this is `git describe` output, so local builds show
//! the commit they came from. Source tarballs fall back to the package version.

use std::path::Path;
use std::process::Command;

fn main() {
    let git_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../.git");
    for watched in ["HEAD", "refs/tags"] {
        println!("cargo:rerun-if-changed={}", git_dir.join(watched).display());
    }

    let version = describe().unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_owned());
    println!("cargo:rustc-env=TASTY_VERSION={version}");
}

fn describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|o| o.status.success())?;

    let described = String::from_utf8(output.stdout).ok()?;
    match described.trim() {
        "" => None,
        tag => Some(tag.trim_start_matches('v').to_owned()),
    }
}
