use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status '{0}'")]
pub struct UnknownStatus(pub String);

/// Whether an athlete is currently racing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AthleteStatus {
    Active,
    #[default]
    Inactive,
}

impl AthleteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for AthleteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AthleteStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Inactive" => Ok(Self::Inactive),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl TryFrom<String> for AthleteStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Editorial state shared by events and races
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PublicationStatus {
    #[default]
    Backlog,
    Published,
    Deleted,
}

impl PublicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::Published => "Published",
            Self::Deleted => "Deleted",
        }
    }
}

impl fmt::Display for PublicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PublicationStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Backlog" => Ok(Self::Backlog),
            "Published" => Ok(Self::Published),
            "Deleted" => Ok(Self::Deleted),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl TryFrom<String> for PublicationStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(AthleteStatus::default(), AthleteStatus::Inactive);
        assert_eq!(PublicationStatus::default(), PublicationStatus::Backlog);
    }

    #[test]
    fn test_athlete_status_rejects_deleted() {
        assert_eq!(
            "Deleted".parse::<AthleteStatus>(),
            Err(UnknownStatus("Deleted".to_string()))
        );
    }

    #[test]
    fn test_parse_matches_display() {
        for status in [
            PublicationStatus::Backlog,
            PublicationStatus::Published,
            PublicationStatus::Deleted,
        ] {
            assert_eq!(status.to_string().parse::<PublicationStatus>(), Ok(status));
        }
        assert_eq!("Active".parse::<AthleteStatus>(), Ok(AthleteStatus::Active));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("published".parse::<PublicationStatus>().is_err());
    }

    #[test]
    fn test_serde_uses_stored_labels() {
        let json = serde_json::to_string(&PublicationStatus::Published).unwrap();
        assert_eq!(json, "\"Published\"");
    }
}
