//! Console front end for the till calculators.
//!
//! - [`cli`]: Argument parsing and command dispatch
//! - [`menu`]: Interactive billing and sales menus
//! - [`prompt`]: Line input, field checks and receipt output
//! - [`config`]: Layered settings (defaults, TOML, environment)
//! - [`logging`]: tracing subscriber setup

pub mod cli;
pub mod config;
pub mod logging;
pub mod menu;
pub mod prompt;

pub use cli::{Cli, Commands, QuoteCommand};
pub use config::Settings;
pub use prompt::{Prompter, Render};
