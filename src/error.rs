use thiserror::Error;

/// Failures surfaced to the user while checking travel status.
///
/// The classifier and formatter never fail; every variant here originates
/// in the caller: key resolution or the remote request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatusError {
    #[error(
        "Please enter a valid API Key. Pass --key, set TORN_API_KEY, or run 'ttravel config set torn.api_key <KEY>'."
    )]
    MissingApiKey,

    /// Error payload returned by the Torn API, shown verbatim.
    #[error("API Error: {message}")]
    Api { code: u32, message: String },

    #[error("Failed to connect to the Torn API.")]
    Connectivity { reason: String },
}

impl StatusError {
    pub fn connectivity(reason: impl Into<String>) -> Self {
        Self::Connectivity {
            reason: reason.into(),
        }
    }
}
