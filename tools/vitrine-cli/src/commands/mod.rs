//! CLI command implementations.

pub mod config;
pub mod search;
pub mod shell;

pub use config::ConfigArgs;
pub use search::SearchArgs;
pub use shell::ShellArgs;
