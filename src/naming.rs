//! Filesystem naming rules for the compile pipeline.
//!
//! No I/O here - just the image allowlist and output-file naming.

use std::path::{Path, PathBuf};

/// Image extensions the analyzer accepts, lowercase.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tiff", "gif"];

/// Whether a path names an image the pipeline should analyze.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Source-file extension for a target language name.
/// Unknown languages fall back to `txt`.
pub fn language_extension(language: &str) -> &'static str {
    match language.to_lowercase().as_str() {
        "python" => "py",
        "rust" => "rs",
        "javascript" => "js",
        "typescript" => "ts",
        "go" | "golang" => "go",
        "c" => "c",
        "c++" | "cpp" => "cpp",
        "java" => "java",
        "ruby" => "rb",
        "shell" | "bash" => "sh",
        _ => "txt",
    }
}

/// Output file for one generated result: `<image-stem>_code.<ext>`.
pub fn output_path(output_dir: &Path, image: &Path, language: &str) -> PathBuf {
    let stem = image
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("image");
    output_dir.join(format!("{}_code.{}", stem, language_extension(language)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_allowlisted_extensions_case_insensitively() {
        assert!(is_image_file(Path::new("sketch.png")));
        assert!(is_image_file(Path::new("SKETCH.PNG")));
        assert!(is_image_file(Path::new("photo.Jpeg")));
        assert!(is_image_file(Path::new("scan.tiff")));
    }

    #[test]
    fn rejects_other_files() {
        assert!(!is_image_file(Path::new("notes.txt")));
        assert!(!is_image_file(Path::new("archive.png.zip")));
        assert!(!is_image_file(Path::new("no_extension")));
    }

    #[test]
    fn maps_known_languages() {
        assert_eq!(language_extension("python"), "py");
        assert_eq!(language_extension("Rust"), "rs");
        assert_eq!(language_extension("C++"), "cpp");
        assert_eq!(language_extension("bash"), "sh");
    }

    #[test]
    fn unknown_language_falls_back_to_txt() {
        assert_eq!(language_extension("brainfuck"), "txt");
    }

    #[test]
    fn names_output_after_image_stem_and_language() {
        let path = output_path(Path::new("out"), Path::new("images/whiteboard.png"), "rust");
        assert_eq!(path, Path::new("out/whiteboard_code.rs"));
    }
}
