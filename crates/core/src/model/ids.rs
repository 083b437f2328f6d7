use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length of a document-store object id in hex digits.
const OBJECT_ID_HEX_LEN: usize = 24;

/// Unique identifier for a stored roadmap.
///
/// The document store hands out 24-digit hexadecimal object ids. Ids are
/// normalized to lowercase on parse so equality does not depend on casing.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoadmapId(String);

impl RoadmapId {
    /// Parses and normalizes a raw id.
    ///
    /// # Errors
    ///
    /// Returns `ParseIdError` if `raw` is not exactly 24 ASCII hex digits.
    pub fn parse(raw: &str) -> Result<Self, ParseIdError> {
        let trimmed = raw.trim();
        if trimmed.len() != OBJECT_ID_HEX_LEN
            || !trimmed.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(ParseIdError {
                raw: raw.to_string(),
            });
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    /// Returns the normalized hex string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RoadmapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoadmapId({})", self.0)
    }
}

impl fmt::Display for RoadmapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error type for parsing a `RoadmapId` from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid roadmap id: {raw:?}")]
pub struct ParseIdError {
    raw: String,
}

impl ParseIdError {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl FromStr for RoadmapId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RoadmapId {
    type Error = ParseIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RoadmapId> for String {
    fn from(id: RoadmapId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_object_id() {
        let id: RoadmapId = "65f1c2a9e4b0a1b2c3d4e5f6".parse().unwrap();
        assert_eq!(id.as_str(), "65f1c2a9e4b0a1b2c3d4e5f6");
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        let id = RoadmapId::parse(" 65F1C2A9E4B0A1B2C3D4E5F6\n").unwrap();
        assert_eq!(id.to_string(), "65f1c2a9e4b0a1b2c3d4e5f6");
    }

    #[test]
    fn rejects_wrong_length() {
        assert!("65f1c2a9".parse::<RoadmapId>().is_err());
        assert!("65f1c2a9e4b0a1b2c3d4e5f6aa".parse::<RoadmapId>().is_err());
    }

    #[test]
    fn rejects_non_hex() {
        let err = "zzzzzzzzzzzzzzzzzzzzzzzz".parse::<RoadmapId>().unwrap_err();
        assert_eq!(err.raw(), "zzzzzzzzzzzzzzzzzzzzzzzz");
    }

    #[test]
    fn deserializes_through_validation() {
        let ok: RoadmapId = serde_json::from_str("\"65f1c2a9e4b0a1b2c3d4e5f6\"").unwrap();
        assert_eq!(ok.as_str(), "65f1c2a9e4b0a1b2c3d4e5f6");
        assert!(serde_json::from_str::<RoadmapId>("\"nope\"").is_err());
    }
}
