use anyhow::Result;
use std::path::PathBuf;

use sketchc::model::ollama::OllamaRunner;
use sketchc::pipeline::{self, CompileOptions};
use sketchc::preflight;

pub fn execute(
    image_directory: PathBuf,
    output_directory: PathBuf,
    language: String,
    caption_model: String,
    code_model: String,
    json: bool,
) -> Result<()> {
    preflight::ensure_ollama()?;

    let runner = OllamaRunner::new(caption_model, code_model);
    let options = CompileOptions {
        image_dir: image_directory,
        output_dir: output_directory,
        language,
    };

    let report = pipeline::compile(&runner, &options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!();
        println!("✅ Compile run complete");
        println!("   • Images analyzed: {}", report.images_analyzed);
        println!("   • Images skipped: {}", report.images_skipped);
        println!("   • Tasks extracted: {}", report.tasks_extracted);
        println!("   • Files written: {}", report.files_written.len());
    }

    Ok(())
}
