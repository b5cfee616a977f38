pub mod file_classifier;
pub mod dependency_detector;

pub use file_classifier::{classify, FileCategory};
pub use dependency_detector::extract_dependencies;
