//! Command handler modules for the holdem CLI.
//!
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: output streams (`&mut dyn Write`) and, for `play`,
//!   the input reader are passed as parameters
//! - Error propagation: all errors propagated via `CliError` enum

pub mod cfg;
pub mod deal;
pub mod eval;
pub mod play;
pub mod sim;
mod table;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::{PlayArgs, handle_play_command};
pub use sim::{SimArgs, handle_sim_command};
