//! Device category tags
//!
//! Device categories are a closed set, so every lookup keyed by a device
//! (models, multipliers) is an exhaustive match instead of a string table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QuoteError;

/// A device category the shop repairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceCategory {
    Tablet,
    Phone,
    Laptop,
    Computer,
    Watch,
}

impl DeviceCategory {
    /// Every category, in display order
    pub const ALL: [DeviceCategory; 5] = [
        DeviceCategory::Tablet,
        DeviceCategory::Phone,
        DeviceCategory::Laptop,
        DeviceCategory::Computer,
        DeviceCategory::Watch,
    ];

    /// Stable identifier used on the command line and in logs
    pub fn id(&self) -> &'static str {
        match self {
            Self::Tablet => "tablet",
            Self::Phone => "phone",
            Self::Laptop => "laptop",
            Self::Computer => "computer",
            Self::Watch => "watch",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Tablet => "Tablet",
            Self::Phone => "Phone",
            Self::Laptop => "Laptop",
            Self::Computer => "Computer",
            Self::Watch => "Watch",
        }
    }

    /// Parse a category id, returning `None` for unknown ids
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.id().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for DeviceCategory {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| QuoteError::device_not_found(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ids() {
        assert_eq!(DeviceCategory::parse("computer"), Some(DeviceCategory::Computer));
        assert_eq!(DeviceCategory::parse(" Tablet "), Some(DeviceCategory::Tablet));
        assert_eq!(DeviceCategory::parse("unknown-id"), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "toaster".parse::<DeviceCategory>().unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&DeviceCategory::Watch).unwrap();
        assert_eq!(json, "\"watch\"");
        for device in DeviceCategory::ALL {
            let json = serde_json::to_string(&device).unwrap();
            assert_eq!(json, format!("\"{}\"", device.id()));
        }
    }
}
