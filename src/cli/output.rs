//! Plain-text report lines printed by the `check` commands.
//!
//! Labels are right-aligned so values line up in a column. Secrets only ever
//! reach the terminal through [`secret`].

use std::fmt::Display;

use crate::config::{mask_secret, Credentials};

const LABEL_WIDTH: usize = 14;

/// Start a named block of report lines.
pub fn heading(title: &str) {
    println!("\n[{title}]");
}

pub fn field(label: &str, value: impl Display) {
    println!("{label:>LABEL_WIDTH$}: {value}");
}

/// Print a token with everything past its prefix hidden.
pub fn secret(label: &str, value: &str) {
    field(label, mask_secret(value));
}

/// Print every credential, tokens masked.
pub fn credentials(credentials: &Credentials) {
    secret("API token", credentials.practicum_token());
    secret("Bot token", credentials.telegram_token());
    field("Chat ID", credentials.chat_id());
}

pub fn passed(message: &str) {
    println!("{:>LABEL_WIDTH$}  {message}", "ok");
}

pub fn caution(message: &str) {
    println!("{:>LABEL_WIDTH$}  {message}", "warning");
}

/// Report a fatal error on stderr.
pub fn failed(message: &str) {
    eprintln!("error: {message}");
}
