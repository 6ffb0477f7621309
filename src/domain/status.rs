//! Review status codes and their verdict texts.

use std::str::FromStr;

use crate::error::PollError;

/// Review status reported by the API for a homework submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    /// The reviewer accepted the work.
    Approved,
    /// The work is in review.
    Reviewing,
    /// The reviewer returned the work with remarks.
    Rejected,
}

impl HomeworkStatus {
    /// All recognized statuses.
    pub const ALL: [Self; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    /// Wire code used by the review API.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable verdict sent to the chat.
    #[must_use]
    pub const fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "The work has been reviewed: the reviewer liked everything. Hooray!",
            Self::Reviewing => "The work has been taken into review.",
            Self::Rejected => "The work has been reviewed: the reviewer has remarks.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = PollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.code() == s)
            .ok_or_else(|| PollError::UnknownStatus {
                status: s.to_string(),
            })
    }
}
