use crate::sailing::TerminalCode;

/// Which routes get scraped: each departure terminal with its destinations,
/// in the order they should be visited.
#[derive(Debug, Clone)]
pub struct Terminals {
    pub routes: Vec<(TerminalCode, Vec<TerminalCode>)>,
    /// Departure terminals that only publish a seasonal timetable.
    pub non_capacity: Vec<TerminalCode>,
}

impl Terminals {
    pub fn is_non_capacity(&self, departure: &str) -> bool {
        self.non_capacity.iter().any(|code| code == departure)
    }
}

impl Default for Terminals {
    fn default() -> Self {
        let table: [(&str, &[&str]); 8] = [
            ("TSA", &["SWB", "SGI", "DUK"]),
            ("SWB", &["TSA", "FUL", "SGI"]),
            ("HSB", &["NAN", "LNG", "BOW"]),
            ("DUK", &["TSA"]),
            ("LNG", &["HSB"]),
            ("NAN", &["HSB"]),
            ("FUL", &["SWB"]),
            ("BOW", &["HSB"]),
        ];
        Self {
            routes: table
                .iter()
                .map(|(departure, destinations)| {
                    (
                        departure.to_string(),
                        destinations.iter().map(|d| d.to_string()).collect(),
                    )
                })
                .collect(),
            non_capacity: vec!["FUL".to_string(), "BOW".to_string()],
        }
    }
}
