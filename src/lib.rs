//! Hackbright project tracker
//!
//! A console front end over a database of students, class projects and
//! the grades students receive on them.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod repl;
pub mod storage;
pub mod utils;

// Re-export core types and traits for easier use
pub use commands::{Command, Outcome};
pub use crate::core::{
    data::{Grade, Project, ProjectGrade, Student},
    traits::{GradeStore, ProjectStore, StudentStore, Tracker},
};
pub use repl::Session;
pub use storage::Database;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
