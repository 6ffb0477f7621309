//! Configuration and connection validation commands.

mod config;
mod connection;
#[cfg(feature = "telegram")]
mod telegram;

pub use config::execute_config;
pub use connection::execute_connection;
#[cfg(feature = "telegram")]
pub use telegram::execute_telegram;
