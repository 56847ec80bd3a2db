// build.rs

use std::env;
use std::path::Path;
use std::process::Command;

/// Runs `git` with `args` and returns trimmed stdout, or `None` outside a checkout.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn main() {
    // An explicit release version is used verbatim; otherwise the commit is appended.
    let version = match env::var("JSONLOC_VERSION") {
        Ok(version) => version,
        Err(_) => {
            let base = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "dev".to_string());
            match git(&["rev-parse", "--short", "HEAD"]) {
                Some(commit) if !commit.is_empty() => format!("{base}+{commit}"),
                _ => base,
            }
        }
    };

    println!("cargo:rustc-env=JSONLOC_BUILD_VERSION={version}");
    println!("cargo:rerun-if-env-changed=JSONLOC_VERSION");
    if Path::new(".git/HEAD").exists() {
        println!("cargo:rerun-if-changed=.git/HEAD");
    }
}
