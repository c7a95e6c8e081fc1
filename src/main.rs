use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use sketchc::model::ollama::{DEFAULT_CAPTION_MODEL, DEFAULT_CODE_MODEL};

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Compile idea sketches into source code using local models", long_about = None)]
struct Cli {
    /// Directory containing image files to analyze
    image_directory: PathBuf,

    /// Directory to save generated code files
    output_directory: PathBuf,

    /// Programming language for code generation (e.g. python, rust)
    language: String,

    /// Captioning model to run
    #[arg(long, default_value = DEFAULT_CAPTION_MODEL)]
    caption_model: String,

    /// Code-generation model to run
    #[arg(long, default_value = DEFAULT_CODE_MODEL)]
    code_model: String,

    /// Output the run summary as JSON
    #[arg(short, long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    commands::compile::execute(
        cli.image_directory,
        cli.output_directory,
        cli.language,
        cli.caption_model,
        cli.code_model,
        cli.json,
    )
}
