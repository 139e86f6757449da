//! shline - shell-like command line splitting.
//!
//! Turns command text into structured `{cmd, args}` records: [`split_command`]
//! tokenizes one line with quote and escape handling, [`parse_script`] walks a
//! multi-line script with comments and backslash continuations. Both are total
//! functions; malformed input degrades to a best-effort split instead of an
//! error. Executing the results is the caller's business.

pub mod command;
pub mod config;
pub mod input;
pub mod output;
pub mod shell;

pub use command::Command;
pub use config::{Config, Format};
pub use input::Source;
pub use output::render;
pub use shell::{parse_script, split_command};
