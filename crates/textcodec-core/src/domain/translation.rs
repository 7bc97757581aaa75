//! Translation record: what went in, what came out.

use serde::{Deserialize, Serialize};

use super::format::Format;

/// The result of one successful dispatch, kept whole so callers can report
/// it without re-assembling the arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub source: Format,
    pub destination: Format,
    pub input: String,
    pub output: String,
}
