pub mod assets;
pub mod config;
pub mod error;
pub mod init;
pub mod install;
pub mod io;
pub mod paths;
pub mod prompt;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{OcmError, Result};
pub use init::{run_init, InitOptions, InitSummary, Outcome, Step, StepReport};
pub use prompt::Console;
