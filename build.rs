//! Stamps the binary with the commit and build time shown by `--version` and
//! on the line under the startup banner.
//!
//! Each value can be pinned from the environment (reproducible builds, CI);
//! otherwise it is probed from git or the clock, and becomes "unknown" when
//! probing fails.

use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

/// A compile-time env var and how to compute it when not pinned.
struct Stamp {
    key: &'static str,
    probe: fn() -> String,
}

const STAMPS: [Stamp; 2] = [
    Stamp {
        key: "S3GEN_BUILD_GIT_HASH",
        probe: commit_hash,
    },
    Stamp {
        key: "S3GEN_BUILD_TIMESTAMP",
        probe: utc_now,
    },
];

fn main() {
    watch_git_head();
    for stamp in &STAMPS {
        println!("cargo:rerun-if-env-changed={}", stamp.key);
        let value = std::env::var(stamp.key).unwrap_or_else(|_| (stamp.probe)());
        println!("cargo:rustc-env={}={value}", stamp.key);
    }
}

/// Rebuild when HEAD moves, including new commits on the checked-out branch.
fn watch_git_head() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    let branch_ref = std::fs::read_to_string(".git/HEAD")
        .ok()
        .and_then(|head| head.trim().strip_prefix("ref: ").map(str::to_owned));
    if let Some(branch_ref) = branch_ref {
        println!("cargo:rerun-if-changed=.git/{branch_ref}");
    }
}

fn commit_hash() -> String {
    command_output("git", &["rev-parse", "--short=12", "HEAD"])
        .unwrap_or_else(|| "unknown".to_owned())
}

fn utc_now() -> String {
    command_output("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]).unwrap_or_else(|| {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs());
        format!("unix:{secs}")
    })
}

/// Trimmed stdout of a successful command, if non-empty.
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8(output.stdout).ok()?;
    let stdout = stdout.trim();
    if stdout.is_empty() {
        None
    } else {
        Some(stdout.to_owned())
    }
}
