//! OAuth permission handling for the Square API.
//!
//! This module provides the [`Permissions`] type, the set of permission names
//! requested on the authorization URL (e.g. `PAYMENTS_READ`).

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A set of Square OAuth permissions.
///
/// Permission names are upper-case words joined by underscores. Parsing
/// accepts comma or whitespace separators; the display form is
/// space-separated and sorted, which is what the authorize endpoint expects.
///
/// # Example
///
/// ```rust
/// use square_api::auth::Permissions;
///
/// let permissions: Permissions = "PAYMENTS_READ, MERCHANT_PROFILE_READ".parse().unwrap();
/// assert_eq!(permissions.to_string(), "MERCHANT_PROFILE_READ PAYMENTS_READ");
///
/// let required: Permissions = "PAYMENTS_READ".parse().unwrap();
/// assert!(permissions.covers(&required));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Permissions {
    permissions: BTreeSet<String>,
}

impl Permissions {
    /// Permission to read payments.
    pub const PAYMENTS_READ: &'static str = "PAYMENTS_READ";
    /// Permission to read merchant profile and locations.
    pub const MERCHANT_PROFILE_READ: &'static str = "MERCHANT_PROFILE_READ";

    /// Creates an empty permission set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The permissions the read operations and webhook registration need.
    #[must_use]
    pub fn default_read() -> Self {
        Self {
            permissions: [Self::PAYMENTS_READ, Self::MERCHANT_PROFILE_READ]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    /// Returns `true` if no permissions are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    /// Returns `true` if every permission in `other` is also in `self`.
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        other.permissions.is_subset(&self.permissions)
    }

    /// Returns `true` if the permission is present.
    #[must_use]
    pub fn contains(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }

    /// Iterates over the permissions in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.permissions.iter().map(String::as_str)
    }

    fn is_valid_name(name: &str) -> bool {
        !name.starts_with('_')
            && !name.ends_with('_')
            && name
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
    }
}

impl FromStr for Permissions {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut permissions = BTreeSet::new();

        for name in s.split(|c: char| c == ',' || c.is_whitespace()) {
            if name.is_empty() {
                continue;
            }

            if !Self::is_valid_name(name) {
                return Err(ConfigError::InvalidPermissions {
                    reason: format!("Invalid permission name: '{name}'"),
                });
            }

            permissions.insert(name.to_string());
        }

        Ok(Self { permissions })
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().collect();
        write!(f, "{}", names.join(" "))
    }
}

impl Serialize for Permissions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Permissions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
