//! Reviewbot - homework review status watcher.
//!
//! Polls a homework-review API on a fixed interval and forwards status
//! changes of the most recent submission to a Telegram chat.
//!
//! # Architecture
//!
//! The crate uses ports and adapters around a single poll loop:
//!
//! - **`application::PollLoop`** - fetch, validate, format, notify, sleep
//!   - consecutive identical status messages are sent once
//!   - consecutive identical errors are reported once
//!
//! - **`port`** - `ReviewSource` and `Notifier` traits
//! - **`adapter::practicum`** - reqwest client for the review API
//! - **`adapter::notifier`** - Telegram (teloxide) and log-only notifiers
//!
//! # Modules
//!
//! - [`config`] - TOML settings and environment credentials
//! - [`domain`] - Homework, status catalog, response validation
//! - [`error`] - Error types for the crate
//! - [`port`] - Trait definitions for external collaborators
//! - [`adapter`] - Port implementations
//! - [`application`] - The poll loop and its wiring
//! - [`cli`] - Command-line interface
//!
//! # Features
//!
//! - `telegram` - Deliver messages through the Telegram Bot API (default)
//!
//! # Example
//!
//! ```no_run
//! use reviewbot::application::App;
//! use reviewbot::config::{Config, Credentials};
//!
//! # async fn example() -> reviewbot::error::Result<()> {
//! let config = Config::load_or_default(None)?;
//! let credentials = Credentials::from_env()?;
//! App::run(&config, &credentials).await;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
