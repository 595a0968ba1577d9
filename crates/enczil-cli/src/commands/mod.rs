//! Command handlers, one module per subcommand.

mod config;
mod decrypt;
mod encrypt;
mod inspect;
mod misc;

pub use config::handle_config;
pub use decrypt::handle_decrypt;
pub use encrypt::handle_encrypt;
pub use inspect::{handle_inspect, HeaderSummary};
pub use misc::handle_completions;
