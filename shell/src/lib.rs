pub mod command;
pub mod runner;

pub use command::*;
pub use runner::*;

/// Console log written by the emulator wrapper and scanned for backtraces by the dump wrapper
pub const CONSOLE_LOG: &str = "last_output";
