//! Secret credentials read from the environment.
//!
//! Credentials never come from the config file. `main` loads a `.env` file
//! (via `dotenvy`) before [`Credentials::from_env`] runs.

use std::fmt;

use crate::error::ConfigError;

/// Environment variable holding the review API OAuth token.
pub const PRACTICUM_TOKEN_VAR: &str = "PRACTICUM_TOKEN";
/// Environment variable holding the Telegram bot token.
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";
/// Environment variable holding the destination chat ID.
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

/// The three credentials the watcher needs before it may start.
///
/// All values are guaranteed non-blank.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    practicum_token: String,
    telegram_token: String,
    chat_id: String,
}

impl Credentials {
    /// Build credentials, rejecting blank values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] naming the first blank value.
    pub fn new(
        practicum_token: impl Into<String>,
        telegram_token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let lookup = [
            (PRACTICUM_TOKEN_VAR, practicum_token.into()),
            (TELEGRAM_TOKEN_VAR, telegram_token.into()),
            (TELEGRAM_CHAT_ID_VAR, chat_id.into()),
        ];
        Self::from_lookup(|name| {
            lookup
                .iter()
                .find(|(var, _)| *var == name)
                .map(|(_, value)| value.clone())
        })
    }

    /// Read credentials from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] naming the first variable that
    /// is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Credentials::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |field: &'static str| {
            lookup(field)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::MissingField { field })
        };

        Ok(Self {
            practicum_token: require(PRACTICUM_TOKEN_VAR)?,
            telegram_token: require(TELEGRAM_TOKEN_VAR)?,
            chat_id: require(TELEGRAM_CHAT_ID_VAR)?,
        })
    }

    #[must_use]
    pub fn practicum_token(&self) -> &str {
        &self.practicum_token
    }

    #[must_use]
    pub fn telegram_token(&self) -> &str {
        &self.telegram_token
    }

    #[must_use]
    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }
}

/// Mask a secret for display, keeping a short prefix and suffix.
#[must_use]
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() >= 15 {
        let head: String = chars[..10].iter().collect();
        let tail: String = chars[chars.len() - 5..].iter().collect();
        format!("{head}...{tail}")
    } else {
        let head: String = chars.iter().take(chars.len() / 3).collect();
        format!("{head}...")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &mask_secret(&self.practicum_token))
            .field("telegram_token", &mask_secret(&self.telegram_token))
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn all_present_succeeds() {
        let creds = Credentials::from_lookup(lookup_from(&[
            (PRACTICUM_TOKEN_VAR, "y0_practicum"),
            (TELEGRAM_TOKEN_VAR, "123:abc"),
            (TELEGRAM_CHAT_ID_VAR, "42"),
        ]))
        .unwrap();

        assert_eq!(creds.practicum_token(), "y0_practicum");
        assert_eq!(creds.telegram_token(), "123:abc");
        assert_eq!(creds.chat_id(), "42");
    }

    #[test]
    fn unset_variable_is_named() {
        let err = Credentials::from_lookup(lookup_from(&[
            (PRACTICUM_TOKEN_VAR, "y0_practicum"),
            (TELEGRAM_CHAT_ID_VAR, "42"),
        ]))
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::MissingField {
                field: TELEGRAM_TOKEN_VAR
            }
        ));
    }

    #[test]
    fn blank_destination_counts_as_missing() {
        let err = Credentials::new("y0_practicum", "123:abc", "   ").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingField {
                field: TELEGRAM_CHAT_ID_VAR
            }
        ));
    }

    #[test]
    fn debug_output_masks_tokens() {
        let creds = Credentials::new("y0_AgAAAAAsecretsecret", "123456:ABCDEFsecret", "42").unwrap();
        let debug = format!("{creds:?}");
        assert!(!debug.contains("y0_AgAAAAAsecretsecret"));
        assert!(!debug.contains("123456:ABCDEFsecret"));
        assert!(debug.contains("42"));
    }

    #[test]
    fn short_secrets_are_mostly_hidden() {
        assert_eq!(mask_secret("abcdef"), "ab...");
        assert_eq!(mask_secret(""), "...");
    }
}
