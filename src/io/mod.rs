//! Parameter-file I/O and result artifact writers.

pub mod export;
pub mod params_file;
pub mod template;
