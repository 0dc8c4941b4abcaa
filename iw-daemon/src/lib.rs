pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod wiring;

#[cfg(test)]
mod tests;

pub use cli::{Cli, Command};
pub use error::{DaemonError, Result as DaemonResult};
