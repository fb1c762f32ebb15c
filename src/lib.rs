pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod counter;
pub mod engine;
pub mod error;
pub mod output;
pub mod parser;
pub mod rules;
pub mod scanner;

pub use engine::{CheckReport, CheckScope, Engine, EngineOptions};
pub use error::{Result, RpgGuardError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ISSUES_FOUND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
