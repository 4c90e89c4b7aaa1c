//! MIC classification against a breakpoint rule table.

mod engine;
mod mic;
mod outcome;

pub use engine::{ClassificationRequest, classify, classify_value, explain, first_match};
pub use mic::parse_mic;
pub use outcome::{Classification, Explanation, INVALID_MIC, NOT_DEFINED};
