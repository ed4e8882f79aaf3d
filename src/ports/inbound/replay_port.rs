use crate::application::dto::{ReplayRequest, ReplayResponse};
use crate::shared::Result;

/// ReplayPort - Inbound port for replaying a scenario through the snapshot engine
///
/// The CLI only sees this trait; which readers and reporters back it is
/// decided at composition time.
pub trait ReplayPort {
    /// Replays every step of the requested scenario
    ///
    /// # Errors
    /// Returns an error if:
    /// - The scenario cannot be read, parsed or validated
    /// - A filter name in the request is unknown
    /// - A step adds a dependency of an unregistered provider type
    fn replay(&self, request: ReplayRequest) -> Result<ReplayResponse>;
}
