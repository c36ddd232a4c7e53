//! Extraction settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParserConfig {
    /// Log every declaration the extractor classifies.
    #[serde(default)]
    pub verbose: bool,
}
