//! Review domain: homework submissions, their status catalog, and the shape
//! of review API responses.

pub mod homework;
pub mod response;
pub mod status;

pub use homework::Homework;
pub use response::{extract_latest, extract_timestamp, validate, ReviewUpdate};
pub use status::HomeworkStatus;
