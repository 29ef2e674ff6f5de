//! Canonical country-code table.
//!
//! Source agencies use three alphabets for the same countries: 3-letter ISO
//! ("JPN"), 2-letter ISO ("JP"), and ad hoc agency codes ("G163", "W",
//! "EA19"). Everything downstream works on the canonical form: ISO alpha-2
//! plus two special tokens for aggregates that have no ISO code.
//!
//! The contract is map-or-drop: a code absent from this table is never
//! defaulted to a placeholder, the owning row is dropped by the caller.

/// Canonical token for the Euro Area aggregate.
pub const EURO_AREA: &str = "I9";

/// Canonical token for the rest-of-world aggregate.
pub const REST_OF_WORLD: &str = "W1";

/// Canonical code of the yield-spread reference country.
pub const UNITED_STATES: &str = "US";

/// (canonical alpha-2, ISO alpha-3, display name).
///
/// The aggregate tokens carry an empty alpha-3 slot; they are only ever
/// reached through the agency alias table or by passing the canonical
/// token itself.
const COUNTRIES: &[(&str, &str, &str)] = &[
    ("AU", "AUS", "Australia"),
    ("BR", "BRA", "Brazil"),
    ("CA", "CAN", "Canada"),
    ("CH", "CHE", "Switzerland"),
    ("CN", "CHN", "China"),
    ("DE", "DEU", "Germany"),
    ("DK", "DNK", "Denmark"),
    ("ES", "ESP", "Spain"),
    ("FR", "FRA", "France"),
    ("GB", "GBR", "United Kingdom"),
    ("HK", "HKG", "Hong Kong"),
    ("IN", "IND", "India"),
    ("IT", "ITA", "Italy"),
    ("JP", "JPN", "Japan"),
    ("KR", "KOR", "South Korea"),
    ("LK", "LKA", "Sri Lanka"),
    ("MX", "MEX", "Mexico"),
    ("MY", "MYS", "Malaysia"),
    ("NO", "NOR", "Norway"),
    ("NZ", "NZL", "New Zealand"),
    ("SE", "SWE", "Sweden"),
    ("SG", "SGP", "Singapore"),
    ("TH", "THA", "Thailand"),
    ("TW", "TWN", "Taiwan"),
    ("US", "USA", "United States"),
    ("VE", "VEN", "Venezuela"),
    ("ZA", "ZAF", "South Africa"),
    ("I9", "", "Euro Area"),
    ("W1", "", "Rest of World"),
];

/// Agency-specific aliases (raw code, canonical code).
///
/// "G163" is the IMF aggregate code for the euro area, "U2" the ECB one;
/// "W" is the bare world code several SDMX flows emit.
const AGENCY_ALIASES: &[(&str, &str)] = &[
    ("EA19", EURO_AREA),
    ("EA20", EURO_AREA),
    ("G163", EURO_AREA),
    ("U2", EURO_AREA),
    ("W", REST_OF_WORLD),
    ("W0", REST_OF_WORLD),
    ("WLD", REST_OF_WORLD),
];

/// Map a raw agency code to its canonical form.
///
/// Lookup order: agency alias, canonical alpha-2 passthrough, ISO alpha-3.
/// Returns `None` for anything else; the caller drops the row.
pub fn canonical_code(raw: &str) -> Option<&'static str> {
    let code = raw.trim();
    if code.is_empty() {
        return None;
    }
    let upper = code.to_ascii_uppercase();
    if let Some(&(_, canonical)) = AGENCY_ALIASES.iter().find(|(alias, _)| *alias == upper) {
        return Some(canonical);
    }
    if let Some(&(canonical, _, _)) = COUNTRIES.iter().find(|(alpha2, _, _)| *alpha2 == upper) {
        return Some(canonical);
    }
    COUNTRIES
        .iter()
        .find(|(_, alpha3, _)| !alpha3.is_empty() && *alpha3 == upper)
        .map(|(canonical, _, _)| *canonical)
}

/// Human-readable name for a canonical code, `None` if unmapped.
pub fn country_name(canonical: &str) -> Option<&'static str> {
    COUNTRIES
        .iter()
        .find(|(alpha2, _, _)| *alpha2 == canonical)
        .map(|(_, _, name)| *name)
}
