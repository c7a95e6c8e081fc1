//! Local model invocation through the `ollama` CLI.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

use super::ModelRunner;

pub const DEFAULT_CAPTION_MODEL: &str = "llava";
pub const DEFAULT_CODE_MODEL: &str = "codellama";

/// Runs models via `ollama run <model> <prompt>`, blocking per call.
pub struct OllamaRunner {
    caption_model: String,
    code_model: String,
}

impl OllamaRunner {
    pub fn new(caption_model: impl Into<String>, code_model: impl Into<String>) -> Self {
        Self {
            caption_model: caption_model.into(),
            code_model: code_model.into(),
        }
    }

    /// Run one model with one prompt. A non-zero exit is reported on
    /// standard output and mapped to `None`; only a spawn failure is an
    /// error.
    fn run(&self, model: &str, prompt: &str) -> Result<Option<String>> {
        let output = Command::new("ollama")
            .args(["run", model, prompt])
            .output()
            .with_context(|| format!("Failed to run ollama model '{model}'"))?;

        if !output.status.success() {
            println!(
                "Error running ollama: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Ok(None);
        }

        Ok(Some(
            String::from_utf8_lossy(&output.stdout).trim().to_string(),
        ))
    }
}

impl ModelRunner for OllamaRunner {
    fn caption(&self, image: &Path) -> Result<Option<String>> {
        let prompt = format!(
            "This image represents ideas for a computer program: {}. \
             Give a description of the computer program that could be used by \
             another generative AI tool to write the program.  Be as specific \
             as possible about specific functions that will need to be written \
             as computer code and number each function in a list.",
            image.display()
        );
        self.run(&self.caption_model, &prompt)
    }

    fn generate_code(&self, language: &str, task: &str) -> Result<Option<String>> {
        let prompt = format!("Write code in {language} to accomplish the following task. {task}");
        self.run(&self.code_model, &prompt)
    }
}
