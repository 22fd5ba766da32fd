//! Invocation of the external custom-elements-manifest analyzer.
//!
//! The analyzer is an external collaborator: cemwrap only consumes the
//! manifest file it leaves behind. Its own configuration decides what gets
//! scanned and where the output lands, so the only contract here is "a
//! manifest exists at the configured path afterwards".

use std::{io::ErrorKind, path::Path, process::Command};

use eyre::{Context, Result, bail};

const ANALYZER_BIN: &str = "cem";
const FALLBACK_BIN: &str = "npx";
const FALLBACK_ARGS: &[&str] = &["@custom-elements-manifest/analyzer", "analyze"];

/// Run the analyzer, preferring an installed `cem` binary and falling back
/// to npx when it is not on the PATH.
pub fn run(manifest_path: &Path) -> Result<()> {
    let status = match Command::new(ANALYZER_BIN).arg("analyze").status() {
        Ok(status) => status,
        Err(error) if error.kind() == ErrorKind::NotFound => Command::new(FALLBACK_BIN)
            .args(FALLBACK_ARGS)
            .status()
            .wrap_err("failed to launch the manifest analyzer (is npx installed?)")?,
        Err(error) => {
            return Err(error).wrap_err_with(|| format!("failed to launch `{ANALYZER_BIN} analyze`"));
        }
    };

    if !status.success() {
        bail!("manifest analyzer exited with {status}");
    }
    if !manifest_path.exists() {
        bail!(
            "analyzer succeeded but '{}' was not produced; check its output path",
            manifest_path.display()
        );
    }
    Ok(())
}
