//! Command-line interface module.

mod commands;
mod handlers;
mod logging;

pub use commands::{Cli, Commands};
pub use handlers::{next_keyword, quota, run};
pub use logging::init_logging;
