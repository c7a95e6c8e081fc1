pub mod extract;
pub mod model;
pub mod naming;
pub mod pipeline;
pub mod preflight;

// Re-export commonly used types
pub use model::ModelRunner;
pub use pipeline::{CompileOptions, RunReport};
