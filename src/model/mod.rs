//! Model invocation seam.

pub mod ollama;

use anyhow::Result;
use std::path::Path;

/// Capability interface over the external models.
///
/// `Ok(None)` means the model process ran and exited non-zero; the failure
/// has already been reported and the caller should skip the item. `Err` is
/// reserved for failing to run the process at all.
pub trait ModelRunner {
    /// Describe the program ideas captured in an image.
    fn caption(&self, image: &Path) -> Result<Option<String>>;

    /// Produce source code in `language` for a task description.
    fn generate_code(&self, language: &str, task: &str) -> Result<Option<String>>;
}
