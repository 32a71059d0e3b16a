//! Client-side configuration that is independent of the target panel.

use crate::core::domain::error::ValidationError;
use std::num::NonZeroU32;

/// Default size of the response-body excerpt carried by errors.
pub const DEFAULT_ERROR_EXCERPT_LEN: usize = 512;

/// Client-side request throttling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Sustained requests per second.
    pub requests_per_second: u32,
    /// Requests allowed in a burst before throttling starts.
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// Returns the rate and burst as non-zero values.
    pub(crate) fn quota(&self) -> Result<(NonZeroU32, NonZeroU32), ValidationError> {
        let field_error = |field: &str| ValidationError::Field {
            field: field.to_string(),
            message: "Must be greater than zero".to_string(),
        };
        let rate = NonZeroU32::new(self.requests_per_second)
            .ok_or_else(|| field_error("requests_per_second"))?;
        let burst = NonZeroU32::new(self.burst_size).ok_or_else(|| field_error("burst_size"))?;
        Ok((rate, burst))
    }
}

/// Behaviour knobs of a `PanelClient`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Throttle outgoing requests; `None` disables throttling.
    pub rate_limit: Option<RateLimitConfig>,
    /// Minimum zxcvbn score for passwords of new users.
    ///
    /// `None` (the default) leaves password strength to the panel.
    pub min_password_score: Option<zxcvbn::Score>,
    /// Maximum number of response-body bytes kept in error messages.
    pub error_excerpt_len: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rate_limit: None,
            min_password_score: None,
            error_excerpt_len: DEFAULT_ERROR_EXCERPT_LEN,
        }
    }
}
