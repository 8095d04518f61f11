//! Political party cleaning.

/// Minor parties kept under their own (title-cased) name.
const MINOR_PARTIES: [&str; 4] = ["libertarian", "green", "tea party", "constitution"];

/// Map a raw party value onto the closed vocabulary
/// {Republican, Democrat, Independent, title-cased minor party, Other}.
///
/// Substring matching, major parties first, so "democratic-farmer-labor"
/// resolves to Democrat. Missing values yield "Unknown". Total, never fails.
pub fn clean_party(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(s) => s,
        None => return "Unknown".to_string(),
    };

    let party = raw.to_lowercase();
    let party = party.trim();

    if party.contains("republican") {
        return "Republican".to_string();
    }
    if party.contains("democrat") {
        return "Democrat".to_string();
    }
    if party.contains("independent") {
        return "Independent".to_string();
    }

    for minor in MINOR_PARTIES {
        if party.contains(minor) {
            return title_case(party);
        }
    }

    "Other".to_string()
}

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
