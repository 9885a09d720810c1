//! Carrier names for the ICAO airline codes found in flight exports

const AIRLINE_NAMES: &[(&str, &str)] = &[
    ("AAL", "American Airlines"),
    ("DAL", "Delta Airlines"),
    ("DLH", "Lufthansa"),
    ("EZY", "EasyJet"),
    ("FIN", "Finnair"),
    ("JJP", "Jetstar"),
    ("NRS", "Norwegian"),
    ("RYR", "Ryanair"),
    ("SWA", "Southwest Airlines"),
    ("TZP", "ZIPAIR"),
    ("UAL", "United Airlines"),
    ("VLG", "Vueling"),
];

/// Full carrier name for a code, if known
pub fn airline_name(code: &str) -> Option<&'static str> {
    AIRLINE_NAMES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code.trim()))
        .map(|(_, name)| *name)
}

/// Carrier name for display, falling back to the code itself
pub fn airline_display_name(code: &str) -> String {
    airline_name(code)
        .map(str::to_string)
        .unwrap_or_else(|| code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown() {
        assert_eq!(airline_name("UAL"), Some("United Airlines"));
        assert_eq!(airline_name("tzp"), Some("ZIPAIR"));
        assert_eq!(airline_name("XYZ"), None);
        assert_eq!(airline_display_name("XYZ"), "XYZ");
        assert_eq!(airline_display_name("FIN"), "Finnair");
    }
}
