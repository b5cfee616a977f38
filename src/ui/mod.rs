pub mod prompt;

pub use prompt::{pause_before_exit, prompt_for_directory};
