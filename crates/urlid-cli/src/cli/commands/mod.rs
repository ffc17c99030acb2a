//! CLI command handlers, one file per command.

mod completions;
mod generate;
mod man;
mod verify;

pub use completions::run_completions;
pub use generate::run_generate;
pub use man::run_man;
pub use verify::run_verify;
