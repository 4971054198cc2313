/*
[INPUT]:  Module definitions
[OUTPUT]: Public API exports for the command-line runner
[POS]:    Crate root - module wiring
[UPDATE]: When adding modules or changing exports
*/

pub mod command;
pub mod config;

pub use command::Command;
pub use config::NodeConfig;
