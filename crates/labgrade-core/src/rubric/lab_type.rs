use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GradeError, Result};

/// Coarse subject-area tag used for filtering and grouping
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LabType {
    /// Machine learning
    Ml,
    /// Artificial intelligence
    Ai,
    /// Full stack development
    Fsd,
    /// Data science
    Ds,
    /// Any other department tag, stored upper-case
    Other(String),
}

impl LabType {
    pub fn as_str(&self) -> &str {
        match self {
            LabType::Ml => "ML",
            LabType::Ai => "AI",
            LabType::Fsd => "FSD",
            LabType::Ds => "DS",
            LabType::Other(tag) => tag,
        }
    }
}

impl FromStr for LabType {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim().to_uppercase();
        match tag.as_str() {
            "" => Err(GradeError::invalid_value("lab type", "(empty)")),
            "ML" => Ok(LabType::Ml),
            "AI" => Ok(LabType::Ai),
            "FSD" => Ok(LabType::Fsd),
            "DS" => Ok(LabType::Ds),
            _ if tag.chars().any(char::is_whitespace) => {
                Err(GradeError::invalid_value("lab type", s))
            }
            _ => Ok(LabType::Other(tag)),
        }
    }
}

impl TryFrom<String> for LabType {
    type Error = GradeError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<LabType> for String {
    fn from(lab: LabType) -> String {
        lab.as_str().to_string()
    }
}

impl fmt::Display for LabType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
