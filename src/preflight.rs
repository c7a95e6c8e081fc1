//! Preflight checks - ensure the external model runtime is available.

use anyhow::{bail, Result};

/// Fail fast when `ollama` is not on PATH. A missing binary would otherwise
/// surface as a spawn error partway through a run.
pub fn ensure_ollama() -> Result<()> {
    if which::which("ollama").is_err() {
        bail!(
            "ollama not found in PATH. Install it from https://ollama.com \
             and pull the models you plan to use (e.g. 'ollama pull llava')."
        );
    }
    Ok(())
}
