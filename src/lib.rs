pub mod anki;
pub mod core;
pub mod import;
pub mod lingq;
pub mod mapping;
pub mod prompt;
pub mod transform;
