use std::process::Command;

/// Exposes the short commit hash as `STANDUP_GIT_HASH` for `--version`.
/// Empty when building outside a git checkout.
fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");

    let hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    println!("cargo:rustc-env=STANDUP_GIT_HASH={}", hash);
}
