use std::process::Command;

// Embed the git revision suffix into the reported version when the crate
// is built from a checkout. Outside a checkout the base version is used
// unchanged.
fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let base = std::env::var("CARGO_PKG_VERSION").unwrap_or_default();

    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output();

    let version = match output {
        Ok(o) if o.status.success() => {
            let revision = String::from_utf8_lossy(&o.stdout).trim().to_string();
            if revision.is_empty() {
                base
            } else {
                format!("{}+{}", base, revision)
            }
        }
        _ => base,
    };

    println!("cargo:rustc-env=PAKRM_VERSION={}", version);
}
