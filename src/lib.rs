pub mod cli;
pub mod config;
pub mod error;
pub mod logfile;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod rules;
pub mod source;

pub use error::{LogAnalyzerError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_RUNTIME_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
