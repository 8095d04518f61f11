//! US state cleaning.
//!
//! The LIAR `state` column is free text: abbreviations, misspellings,
//! qualifiers ("Virginia - Senate race"), and outright non-states. Cleaning
//! maps it onto canonical full names where possible, first match wins:
//!
//! 1. missing value yields `"Unknown"`
//! 2. "Washington D.C." spelling variants
//! 3. two-letter abbreviations (50 states + DC + 5 territories)
//! 4. trailing `- qualifier` removal
//! 5. curated misspelling/alias table
//! 6. title-cased passthrough
//!
//! The passthrough is deliberate: an unrecognized value is kept verbatim
//! rather than coerced to `"Unknown"`, and [is_us_state] surfaces it
//! downstream.
use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

lazy_static! {

    /// US states and territories, keyed by two-letter abbreviation.
    pub static ref US_STATES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("AL", "Alabama");
        m.insert("AK", "Alaska");
        m.insert("AZ", "Arizona");
        m.insert("AR", "Arkansas");
        m.insert("CA", "California");
        m.insert("CO", "Colorado");
        m.insert("CT", "Connecticut");
        m.insert("DE", "Delaware");
        m.insert("FL", "Florida");
        m.insert("GA", "Georgia");
        m.insert("HI", "Hawaii");
        m.insert("ID", "Idaho");
        m.insert("IL", "Illinois");
        m.insert("IN", "Indiana");
        m.insert("IA", "Iowa");
        m.insert("KS", "Kansas");
        m.insert("KY", "Kentucky");
        m.insert("LA", "Louisiana");
        m.insert("ME", "Maine");
        m.insert("MD", "Maryland");
        m.insert("MA", "Massachusetts");
        m.insert("MI", "Michigan");
        m.insert("MN", "Minnesota");
        m.insert("MS", "Mississippi");
        m.insert("MO", "Missouri");
        m.insert("MT", "Montana");
        m.insert("NE", "Nebraska");
        m.insert("NV", "Nevada");
        m.insert("NH", "New Hampshire");
        m.insert("NJ", "New Jersey");
        m.insert("NM", "New Mexico");
        m.insert("NY", "New York");
        m.insert("NC", "North Carolina");
        m.insert("ND", "North Dakota");
        m.insert("OH", "Ohio");
        m.insert("OK", "Oklahoma");
        m.insert("OR", "Oregon");
        m.insert("PA", "Pennsylvania");
        m.insert("RI", "Rhode Island");
        m.insert("SC", "South Carolina");
        m.insert("SD", "South Dakota");
        m.insert("TN", "Tennessee");
        m.insert("TX", "Texas");
        m.insert("UT", "Utah");
        m.insert("VT", "Vermont");
        m.insert("VA", "Virginia");
        m.insert("WA", "Washington");
        m.insert("WV", "West Virginia");
        m.insert("WI", "Wisconsin");
        m.insert("WY", "Wyoming");
        m.insert("DC", "Washington D.C.");
        m.insert("PR", "Puerto Rico");
        m.insert("GU", "Guam");
        m.insert("VI", "U.S. Virgin Islands");
        m.insert("AS", "American Samoa");
        m.insert("MP", "Northern Mariana Islands");
        m
    };

    /// Canonical full names, for membership checks.
    static ref US_STATE_NAMES: HashSet<&'static str> =
        US_STATES.values().copied().collect();

    /// Misspellings and aliases observed in the LIAR data.
    /// Non-US entries map to "Unknown".
    static ref MISSPELLINGS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("virgina", "Virginia");
        m.insert("virgiia", "Virginia");
        m.insert("tennesse", "Tennessee");
        m.insert("tex", "Texas");
        m.insert("pa - pennsylvania", "Pennsylvania");
        m.insert("rhode island", "Rhode Island");
        m.insert("washington, d.c.", "Washington D.C.");
        m.insert("district of columbia", "Washington D.C.");
        m.insert("washington dc", "Washington D.C.");
        m.insert("washington d.c.", "Washington D.C.");
        m.insert("atlanta", "Georgia");
        m.insert(
            "virgina director, coalition to stop gun violence",
            "Virginia",
        );
        m.insert("the united states", "Unknown");
        m.insert("china", "Unknown");
        m.insert("russia", "Unknown");
        m.insert("qatar", "Unknown");
        m.insert("united kingdom", "Unknown");
        m
    };
}

/// Clean a raw state value onto a canonical name.
///
/// Total and deterministic, never fails. See the module docs for the
/// matching cascade. The fallback title-cases the input without checking
/// US-state membership, so the result may be a non-US value; pair with
/// [is_us_state] to detect those.
pub fn clean_state(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(s) => s,
        None => return "Unknown".to_string(),
    };

    let state = raw.trim().to_lowercase();

    if matches_washington_dc(&state) {
        return "Washington D.C.".to_string();
    }

    let abbreviation = state.to_uppercase();
    if let Some(full) = US_STATES.get(abbreviation.as_str()) {
        return (*full).to_string();
    }

    let state = strip_qualifier(&state);

    if let Some(fixed) = MISSPELLINGS.get(state) {
        return (*fixed).to_string();
    }

    title_case(state)
}

/// Whether a cleaned value is a known US state or territory name.
pub fn is_us_state(cleaned: &str) -> bool {
    US_STATE_NAMES.contains(cleaned)
}

/// Matches "washington d.c.", "washington, dc", "washington dc"...
/// (lowercased input, anchored at the start, periods and comma optional).
fn matches_washington_dc(s: &str) -> bool {
    let rest = match s.strip_prefix("washington") {
        Some(rest) => rest,
        None => return false,
    };
    let rest = rest.strip_prefix(',').unwrap_or(rest);
    let rest = rest.trim_start();
    let rest = match rest.strip_prefix('d') {
        Some(rest) => rest,
        None => return false,
    };
    let rest = rest.strip_prefix('.').unwrap_or(rest);
    rest.starts_with('c')
}

/// Remove a trailing `- qualifier` ("virginia - senate" -> "virginia").
fn strip_qualifier(s: &str) -> &str {
    match s.find('-') {
        Some(idx) => s[..idx].trim_end(),
        None => s,
    }
}

/// Title-case in the Python `str.title()` sense: every alphabetic character
/// following a non-alphabetic one is uppercased.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alphabetic = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alphabetic {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(c);
            prev_alphabetic = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing() {
        assert_eq!(clean_state(None), "Unknown");
    }

    #[test]
    fn test_abbreviations_any_case() {
        assert_eq!(clean_state(Some("tx")), "Texas");
        assert_eq!(clean_state(Some("TX")), "Texas");
        assert_eq!(clean_state(Some("Ny")), "New York");
        assert_eq!(clean_state(Some(" pr ")), "Puerto Rico");
    }

    #[test]
    fn test_washington_dc_variants() {
        assert_eq!(clean_state(Some("Washington, D.C.")), "Washington D.C.");
        assert_eq!(clean_state(Some("washington dc")), "Washington D.C.");
        assert_eq!(clean_state(Some("Washington D.C.")), "Washington D.C.");
        assert_eq!(clean_state(Some("District of Columbia")), "Washington D.C.");
    }

    #[test]
    fn test_misspellings() {
        assert_eq!(clean_state(Some("virgina")), "Virginia");
        assert_eq!(clean_state(Some("Tennesse")), "Tennessee");
        assert_eq!(clean_state(Some("tex")), "Texas");
        assert_eq!(clean_state(Some("atlanta")), "Georgia");
        assert_eq!(clean_state(Some("china")), "Unknown");
        assert_eq!(clean_state(Some("The United States")), "Unknown");
    }

    #[test]
    fn test_qualifier_stripped() {
        assert_eq!(clean_state(Some("virgina - senate race")), "Virginia");
    }

    #[test]
    fn test_fallback_is_not_validated() {
        // unmatched values pass through title-cased, not coerced to Unknown
        assert_eq!(clean_state(Some("gotham city")), "Gotham City");
        assert!(!is_us_state("Gotham City"));
    }

    #[test]
    fn test_membership() {
        assert!(is_us_state("Texas"));
        assert!(is_us_state("Washington D.C."));
        assert!(is_us_state("Guam"));
        assert!(!is_us_state("Unknown"));
    }
}
