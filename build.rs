//! Bundles the alerter executable into the library.
//!
//! The payload is read from `MAC_NOTIFY_ALERTER` (a path) or from
//! `assets/alerter`. Without either the build still succeeds with an empty
//! payload, and installing the bundled alerter fails at runtime.

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=MAC_NOTIFY_ALERTER");
    println!("cargo:rerun-if-changed=assets/alerter");

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let target = out_dir.join("alerter");

    let source = env::var_os("MAC_NOTIFY_ALERTER")
        .map(PathBuf::from)
        .or_else(|| {
            let bundled = PathBuf::from("assets").join("alerter");
            bundled.exists().then_some(bundled)
        });

    match source {
        Some(path) => {
            fs::copy(&path, &target)
                .unwrap_or_else(|e| panic!("failed to bundle {}: {}", path.display(), e));
        }
        None => {
            println!(
                "cargo:warning=no alerter payload bundled; set MAC_NOTIFY_ALERTER or add assets/alerter"
            );
            fs::write(&target, []).expect("failed to write empty alerter payload");
        }
    }
}
