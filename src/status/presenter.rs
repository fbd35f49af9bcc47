use crate::error::StatusError;
use crate::status::Classification;
use crate::status::render::{PresentationState, StatusPanel};
use std::fmt;

/// Identifies one issued request. Tokens are strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

/// Owns the presentation state. Only the response to the most recently
/// issued request may change it; anything older is dropped on arrival.
#[derive(Debug, Default)]
pub struct Presenter {
    state: PresentationState,
    sequencer: RequestSequencer,
    pending: Option<RequestToken>,
}

impl Presenter {
    pub fn state(&self) -> &PresentationState {
        &self.state
    }

    pub fn begin(&mut self) -> RequestToken {
        let token = self.sequencer.issue();
        self.pending = Some(token);
        token
    }

    /// Latest request has been issued but not yet answered.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns `true` if the outcome was applied.
    pub fn apply(
        &mut self,
        token: RequestToken,
        outcome: Result<Classification, StatusError>,
    ) -> bool {
        if !self.sequencer.is_current(token) {
            return false;
        }

        self.pending = None;
        self.state = match outcome {
            Ok(classification) => PresentationState::Status(StatusPanel::from(classification)),
            Err(err) => PresentationState::error(&err),
        };
        true
    }
}
