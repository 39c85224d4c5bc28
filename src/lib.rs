pub mod audit;
pub mod checker;
pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod project;
pub mod report;
pub mod rules;
pub mod score;

pub use error::{ProjectAuditError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_AUDIT_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
