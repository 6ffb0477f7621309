//! Homework-review API integration.

mod client;
mod settings;

pub use client::PracticumClient;
pub use settings::{PracticumConfig, PracticumHttpConfig, DEFAULT_ENDPOINT};
