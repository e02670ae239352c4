//! Keyword classification of free-text locations.
//!
//! Locations are plain strings like "Seshachalam Forest" or "Interlaken,
//! Switzerland". There is no geocoding: a location is classified by
//! case-sensitive substring match against the fixed keyword sets below. A
//! location outside these lists reads as a studio set, even when it is not.

use serde::{Deserialize, Serialize};

/// Marks a foreign unit shoot.
pub const INTERNATIONAL_KEYWORDS: &[&str] = &["Switzerland"];

/// Marks an exterior location for feasibility.
pub const OUTDOOR_KEYWORDS: &[&str] = &["Forest", "Port", "Road", "Shipyard", "Switzerland"];

/// Exterior locations that add on-set safety risk.
pub const HAZARDOUS_OUTDOOR_KEYWORDS: &[&str] = &["Forest", "Port", "Road", "Shipyard"];

/// Harbour locations that carry extra permit and logistics cost.
pub const HARBOUR_KEYWORDS: &[&str] = &["Port", "Shipyard"];

fn contains_any(location: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| location.contains(k))
}

pub fn is_international(location: &str) -> bool {
    contains_any(location, INTERNATIONAL_KEYWORDS)
}

pub fn is_outdoor(location: &str) -> bool {
    contains_any(location, OUTDOOR_KEYWORDS)
}

pub fn is_hazardous_outdoor(location: &str) -> bool {
    contains_any(location, HAZARDOUS_OUTDOOR_KEYWORDS)
}

pub fn is_harbour(location: &str) -> bool {
    contains_any(location, HARBOUR_KEYWORDS)
}

/// Coarse location class; international wins over outdoor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationClass {
    International,
    Outdoor,
    Studio,
}

impl LocationClass {
    pub fn classify(location: &str) -> Self {
        if is_international(location) {
            LocationClass::International
        } else if is_outdoor(location) {
            LocationClass::Outdoor
        } else {
            LocationClass::Studio
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_precedence() {
        assert_eq!(
            LocationClass::classify("Interlaken, Switzerland"),
            LocationClass::International
        );
        assert_eq!(
            LocationClass::classify("Seshachalam Forest"),
            LocationClass::Outdoor
        );
        assert_eq!(
            LocationClass::classify("Ramoji Film City, Studio 4"),
            LocationClass::Studio
        );
    }

    #[test]
    fn matching_is_case_sensitive_substring() {
        assert!(is_harbour("Chennai Port"));
        assert!(is_harbour("Vizag Shipyard"));
        // Known misfire of the keyword heuristic.
        assert!(is_outdoor("Airport Lounge Set"));
        assert!(!is_outdoor("forest clearing"));
        assert!(!is_hazardous_outdoor("Zermatt, Switzerland"));
    }
}
