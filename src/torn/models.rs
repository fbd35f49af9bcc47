use serde::{Deserialize, Serialize};

/// Location name the Torn API uses for the player's home city.
pub const HOME_LOCATION: &str = "Torn";

/// Status value reported while the player is mid-flight.
pub const STATUS_TRAVELLING: &str = "Travelling";

/// Top-level response of `user/?selections=travel`.
///
/// The API answers with either an `error` object or a `travel` object.
#[derive(Debug, Deserialize)]
pub struct TravelResponse {
    pub error: Option<ApiError>,
    pub travel: Option<TravelRecord>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiError {
    #[serde(default)]
    pub code: u32,
    pub error: String,
}

/// Travel selection for a single player
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct TravelRecord {
    #[serde(default)]
    pub status: String,
    pub destination: String,
    /// "<origin>,<destination>"
    #[serde(default)]
    pub from_to: String,
    #[serde(default)]
    pub time_left: i64,
    /// Arrival time (unix seconds)
    #[serde(default)]
    pub timestamp: Option<i64>,
}

impl TravelRecord {
    pub fn is_travelling(&self) -> bool {
        self.status == STATUS_TRAVELLING
    }

    /// Origin parsed from `from_to`, if one is present.
    pub fn origin(&self) -> Option<&str> {
        self.from_to
            .split(',')
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_travel_response() {
        let json = json!({
            "travel": {
                "status": "Travelling",
                "destination": "Mexico",
                "from_to": "Torn,Mexico",
                "method": "Standard",
                "timestamp": 1767225600,
                "departed": 1767224400,
                "time_left": 120
            }
        });

        let response: TravelResponse = serde_json::from_value(json).unwrap();
        assert!(response.error.is_none());
        let travel = response.travel.unwrap();
        assert!(travel.is_travelling());
        assert_eq!(travel.destination, "Mexico");
        assert_eq!(travel.time_left, 120);
        assert_eq!(travel.origin(), Some("Torn"));
        assert_eq!(travel.timestamp, Some(1767225600));
    }

    #[test]
    fn test_deserialize_minimal_record_uses_defaults() {
        let json = json!({ "destination": "Torn" });

        let record: TravelRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.status, "");
        assert_eq!(record.time_left, 0);
        assert_eq!(record.origin(), None);
    }

    #[test]
    fn test_deserialize_record_without_destination_fails() {
        let json = json!({ "status": "Okay" });
        assert!(serde_json::from_value::<TravelRecord>(json).is_err());
    }

    #[test]
    fn test_deserialize_api_error() {
        let json = json!({ "error": { "code": 2, "error": "Incorrect key" } });

        let response: TravelResponse = serde_json::from_value(json).unwrap();
        assert!(response.travel.is_none());
        let error = response.error.unwrap();
        assert_eq!(error.code, 2);
        assert_eq!(error.error, "Incorrect key");
    }
}
