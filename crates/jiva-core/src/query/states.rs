use super::matching::UnitMatcher;
use std::sync::LazyLock;

/// State and union territory names as they appear in the INGRES sheets.
pub const KNOWN_STATES: &[&str] = &[
    "ANDAMAN AND NICOBAR ISLANDS",
    "ANDHRA PRADESH",
    "ARUNACHAL PRADESH",
    "ASSAM",
    "BIHAR",
    "CHANDIGARH",
    "CHHATTISGARH",
    "DADRA AND NAGAR HAVELI",
    "DAMAN AND DIU",
    "DELHI",
    "GOA",
    "GUJARAT",
    "HARYANA",
    "HIMACHAL PRADESH",
    "JAMMU AND KASHMIR",
    "JHARKHAND",
    "KARNATAKA",
    "KERALA",
    "LADAKH",
    "LAKSHDWEEP",
    "MADHYA PRADESH",
    "MAHARASHTRA",
    "MANIPUR",
    "MEGHALAYA",
    "MIZORAM",
    "NAGALAND",
    "ODISHA",
    "PUDUCHERRY",
    "PUNJAB",
    "RAJASTHAN",
    "SIKKIM",
    "TAMILNADU",
    "TELANGANA",
    "TRIPURA",
    "UTTAR PRADESH",
    "UTTARAKHAND",
    "WEST BENGAL",
];

/// Common abbreviations and the state each one stands for.
pub const STATE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("UP", "UTTAR PRADESH"),
    ("MP", "MADHYA PRADESH"),
    ("AP", "ANDHRA PRADESH"),
    ("TS", "TELANGANA"),
];

static STATE_MATCHER: LazyLock<UnitMatcher> = LazyLock::new(|| {
    UnitMatcher::new(
        KNOWN_STATES
            .iter()
            .copied()
            .chain(STATE_ABBREVIATIONS.iter().map(|(abbr, _)| *abbr)),
    )
});

pub fn state_matcher() -> &'static UnitMatcher {
    &STATE_MATCHER
}

/// Expand an abbreviation to its full state name; other names pass through.
pub fn canonical_state(name: &str) -> &str {
    STATE_ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| abbr.eq_ignore_ascii_case(name))
        .map(|(_, full)| *full)
        .unwrap_or(name)
}
