//! Object kind tags

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of the `object` field stamped on a completion response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    #[serde(rename = "text_completion")]
    TextCompletion,
}

impl ObjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TextCompletion => "text_completion",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
