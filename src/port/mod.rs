//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between the poll loop and the outside world. The
//! application layer only sees these traits; adapters implement them.
//!
//! # Architecture
//!
//! ```text
//!                 ┌─────────────────────────┐
//!                 │       Poll loop         │
//!     ┌───────────┤    Domain + Port        ├───────────┐
//!     │           └─────────────────────────┘           │
//!     ▼                                                 ▼
//! ┌──────────────┐                               ┌───────────┐
//! │ Review API   │                               │ Notifier  │
//! │   Adapter    │                               │  Adapter  │
//! └──────────────┘                               └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`ReviewSource`] - Fetches raw review responses
//! - [`Notifier`] - Delivers chat messages (Telegram, logging, etc.)

mod notifier;
mod review;

pub use notifier::Notifier;
pub use review::ReviewSource;
