//! Airport directory
//!
//! A fixed, compiled-in table of airport code to coordinates and country.
//! Adding a route to a new airport means adding a row to [`AIRPORTS`]; there is
//! no external lookup.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

/// Location and country of one airport
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Airport {
    /// IATA code
    pub code: &'static str,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Country name
    pub country: &'static str,
}

impl Airport {
    /// Create an airport entry
    pub const fn new(code: &'static str, latitude: f64, longitude: f64, country: &'static str) -> Self {
        Self {
            code,
            latitude,
            longitude,
            country,
        }
    }

    /// `[latitude, longitude]` pair, the order map libraries expect
    pub fn coords(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

const US: &str = "United States";

/// Every airport the directory knows about
pub const AIRPORTS: &[Airport] = &[
    // United States
    Airport::new("ABQ", 35.0402, -106.6092, US),
    Airport::new("DEN", 39.8561, -104.6737, US),
    Airport::new("PHX", 33.4352, -112.0101, US),
    Airport::new("LAX", 33.9416, -118.4085, US),
    Airport::new("SAN", 32.7338, -117.1933, US),
    Airport::new("LAS", 36.0840, -115.1537, US),
    Airport::new("SEA", 47.4502, -122.3088, US),
    Airport::new("PDX", 45.5898, -122.5951, US),
    Airport::new("SFO", 37.6213, -122.3790, US),
    Airport::new("OAK", 37.7213, -122.2208, US),
    Airport::new("SMF", 38.6954, -121.5908, US),
    Airport::new("ONT", 34.0560, -117.6012, US),
    Airport::new("ATL", 33.6407, -84.4277, US),
    Airport::new("DFW", 32.8998, -97.0403, US),
    Airport::new("ORD", 41.9742, -87.9073, US),
    Airport::new("IAH", 29.9902, -95.3368, US),
    Airport::new("EWR", 40.6895, -74.1745, US),
    Airport::new("JFK", 40.6413, -73.7781, US),
    Airport::new("BOS", 42.3656, -71.0096, US),
    Airport::new("IAD", 38.9531, -77.4565, US),
    Airport::new("DTW", 42.2162, -83.3554, US),
    Airport::new("MDW", 41.7868, -87.7522, US),
    Airport::new("DAL", 32.8471, -96.8518, US),
    Airport::new("HOU", 29.6465, -95.2789, US),
    Airport::new("MCI", 39.2976, -94.7139, US),
    Airport::new("IND", 39.7173, -86.2944, US),
    Airport::new("TPA", 27.9755, -82.5332, US),
    Airport::new("FLL", 26.0742, -80.1506, US),
    Airport::new("PHL", 39.8744, -75.2424, US),
    Airport::new("BWI", 39.1774, -76.6684, US),
    Airport::new("BNA", 36.1245, -86.6782, US),
    Airport::new("AUS", 30.1945, -97.6699, US),
    Airport::new("SLC", 40.7899, -111.9791, US),
    Airport::new("COS", 38.8058, -104.7004, US),
    Airport::new("GSP", 34.8957, -82.2189, US),
    Airport::new("SAF", 35.6171, -106.0894, US),
    // Europe and North Africa
    Airport::new("LGW", 51.1537, -0.1821, "United Kingdom"),
    Airport::new("LHR", 51.4700, -0.4543, "United Kingdom"),
    Airport::new("SEN", 51.5714, 0.6956, "United Kingdom"),
    Airport::new("CDG", 49.0097, 2.5479, "France"),
    Airport::new("MXP", 45.6301, 8.7231, "Italy"),
    Airport::new("SPU", 43.5389, 16.2980, "Croatia"),
    Airport::new("AMS", 52.3105, 4.7683, "Netherlands"),
    Airport::new("DUB", 53.4213, -6.2701, "Ireland"),
    Airport::new("MUC", 48.3538, 11.7750, "Germany"),
    Airport::new("HEL", 60.3172, 24.9633, "Finland"),
    Airport::new("RVN", 66.5647, 25.8304, "Finland"),
    Airport::new("BCN", 41.2974, 2.0833, "Spain"),
    Airport::new("BRU", 50.9010, 4.4856, "Belgium"),
    Airport::new("KEF", 63.9850, -22.6056, "Iceland"),
    Airport::new("RAK", 31.6069, -8.0363, "Morocco"),
    Airport::new("TNG", 35.7269, -5.9169, "Morocco"),
    // Asia
    Airport::new("NRT", 35.7720, 140.3929, "Japan"),
    Airport::new("HND", 35.5494, 139.7798, "Japan"),
    Airport::new("FUK", 33.5859, 130.4511, "Japan"),
];

/// Read-only lookup from airport code to [`Airport`]
#[derive(Debug, Clone)]
pub struct AirportDirectory {
    airports: HashMap<String, Airport>,
}

impl AirportDirectory {
    /// Build a directory from a list of airports
    pub fn new(airports: &[Airport]) -> Self {
        Self {
            airports: airports
                .iter()
                .map(|a| (a.code.to_ascii_uppercase(), *a))
                .collect(),
        }
    }

    /// The process-wide directory built from [`AIRPORTS`], initialized on first use
    pub fn global() -> &'static AirportDirectory {
        static DIRECTORY: OnceLock<AirportDirectory> = OnceLock::new();
        DIRECTORY.get_or_init(|| AirportDirectory::new(AIRPORTS))
    }

    /// Look up an airport; codes are matched case-insensitively
    pub fn get(&self, code: &str) -> Option<&Airport> {
        let code = code.trim();
        self.airports
            .get(code)
            .or_else(|| self.airports.get(&code.to_ascii_uppercase()))
    }

    /// Country of an airport, if known
    pub fn country(&self, code: &str) -> Option<&'static str> {
        self.get(code).map(|a| a.country)
    }

    /// Number of airports in the directory
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    /// Whether the directory is empty
    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// All airports, sorted by code
    pub fn sorted(&self) -> Vec<&Airport> {
        let mut all: Vec<_> = self.airports.values().collect();
        all.sort_by_key(|a| a.code);
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<_> = AIRPORTS.iter().map(|a| a.code).collect();
        assert_eq!(codes.len(), AIRPORTS.len());
        assert_eq!(AirportDirectory::global().len(), AIRPORTS.len());
    }

    #[test]
    fn test_lookup() {
        let directory = AirportDirectory::global();
        let abq = directory.get("ABQ").unwrap();
        assert_eq!(abq.coords(), [35.0402, -106.6092]);
        assert_eq!(directory.country("NRT"), Some("Japan"));
        assert_eq!(directory.country("nrt"), Some("Japan"));
        assert_eq!(directory.country("ZZZ"), None);
    }

    #[test]
    fn test_custom_directory() {
        let directory = AirportDirectory::new(&[Airport::new("XXA", 0.0, 0.0, "Nowhere")]);
        assert_eq!(directory.len(), 1);
        assert!(directory.get("ABQ").is_none());
        assert!(!directory.is_empty());
    }

    #[test]
    fn test_sorted() {
        let sorted = AirportDirectory::global().sorted();
        assert_eq!(sorted.first().unwrap().code, "ABQ");
        assert!(sorted.windows(2).all(|w| w[0].code < w[1].code));
    }
}
