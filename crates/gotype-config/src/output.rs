//! Output rendering settings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How responses are rendered.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// Single-line JSON.
    Raw,
}

impl OutputFormat {
    /// Every accepted format, in help order.
    pub const ALL: [Self; 2] = [Self::Json, Self::Raw];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Raw => "raw",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| {
                let expected = Self::ALL.map(Self::as_str).join(", ");
                format!("expected one of {expected}, got '{s}'")
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}
