//! OAuth state parameter for CSRF protection.
//!
//! The state parameter is sent on the authorization URL and must come back
//! unchanged on the redirect callback.

use rand::distributions::Alphanumeric;
use rand::Rng;
use std::fmt;

/// A random state value for the authorization redirect.
///
/// # Example
///
/// ```rust
/// use square_api::auth::oauth::StateParam;
///
/// let state = StateParam::new();
/// assert_eq!(state.as_ref().len(), 15);
///
/// let custom = StateParam::from_raw("stored-value");
/// assert_eq!(custom.as_ref(), "stored-value");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateParam {
    value: String,
}

impl StateParam {
    /// Length of generated state values.
    pub const NONCE_LENGTH: usize = 15;

    /// Generates a fresh state of [`NONCE_LENGTH`](Self::NONCE_LENGTH)
    /// alphanumeric characters.
    #[must_use]
    pub fn new() -> Self {
        let value: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(Self::NONCE_LENGTH)
            .map(char::from)
            .collect();

        Self { value }
    }

    /// Wraps a state value previously issued, e.g. one read back from the
    /// caller's session store.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self { value: raw.into() }
    }
}

impl Default for StateParam {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StateParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl AsRef<str> for StateParam {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
