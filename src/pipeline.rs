//! Sequential compile pipeline: analyze images, extract numbered tasks,
//! generate code files.
//!
//! Every stage blocks on its external model call; a failed call skips the
//! item and the run continues. Only I/O and spawn failures are fatal.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::extract;
use crate::model::ModelRunner;
use crate::naming;

/// One captioning-model result, tied to the image that produced it.
pub struct Analysis {
    pub image: PathBuf,
    pub text: String,
}

pub struct CompileOptions {
    pub image_dir: PathBuf,
    pub output_dir: PathBuf,
    pub language: String,
}

/// Summary of one pipeline run.
#[derive(Debug, Default, Serialize)]
pub struct RunReport {
    pub images_analyzed: usize,
    pub images_skipped: usize,
    pub tasks_extracted: usize,
    pub generation_skipped: usize,
    pub files_written: Vec<PathBuf>,
}

/// Run the full pipeline: caption every image in `image_dir`, report the
/// numbered tasks found in each analysis, then generate one code file per
/// analysis under `output_dir`.
pub fn compile(runner: &dyn ModelRunner, options: &CompileOptions) -> Result<RunReport> {
    fs::create_dir_all(&options.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            options.output_dir.display()
        )
    })?;

    let mut report = RunReport::default();
    let analyses = analyze_images(runner, &options.image_dir, &mut report)?;

    for analysis in &analyses {
        let tasks = extract::numbered_tasks(&analysis.text);
        println!(
            "Found {} function description(s) in {}:",
            tasks.len(),
            analysis.image.display()
        );
        for task in &tasks {
            println!("  - {task}");
        }
        report.tasks_extracted += tasks.len();
    }

    for analysis in &analyses {
        println!("Generating code for {}...", analysis.image.display());
        let Some(code) = runner.generate_code(&options.language, &analysis.text)? else {
            println!(
                "Skipping {} due to code generation error.",
                analysis.image.display()
            );
            report.generation_skipped += 1;
            continue;
        };

        let output_file =
            naming::output_path(&options.output_dir, &analysis.image, &options.language);
        fs::write(&output_file, &code)
            .with_context(|| format!("Failed to write {}", output_file.display()))?;
        println!("Code saved to {}", output_file.display());
        report.files_written.push(output_file);
    }

    Ok(report)
}

/// Caption every image file in `image_dir`, non-recursively. Entries are
/// sorted by name so runs are deterministic. Non-image files are skipped.
fn analyze_images(
    runner: &dyn ModelRunner,
    image_dir: &Path,
    report: &mut RunReport,
) -> Result<Vec<Analysis>> {
    let mut images: Vec<PathBuf> = fs::read_dir(image_dir)
        .with_context(|| format!("Failed to read image directory {}", image_dir.display()))?
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to list image directory")?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| naming::is_image_file(path))
        .collect();
    images.sort();

    let mut analyses = Vec::new();
    for image in images {
        println!("Analyzing image: {}", image.display());
        match runner.caption(&image)? {
            Some(text) => {
                println!("Analysis result for {}: {}", image.display(), text);
                report.images_analyzed += 1;
                analyses.push(Analysis { image, text });
            }
            None => {
                println!("Skipping {} due to analysis error.", image.display());
                report.images_skipped += 1;
            }
        }
    }

    Ok(analyses)
}
