//! Identifiers for diagram entities and styles.
//!
//! This module provides the [`Id`] type used as the key of every map in the
//! diagram model. Ids are plain owned strings; lookups by `&str` work
//! directly through [`Borrow`].

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Identifier of a component, container, or style.
///
/// # Examples
///
/// ```
/// use isoarch_core::identifier::Id;
///
/// let api = Id::new("api");
/// let gateway: Id = "gateway".into();
///
/// assert_eq!(api, "api");
/// assert_ne!(api, gateway);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    /// Creates an `Id` from a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use isoarch_core::identifier::Id;
    ///
    /// let component_id = Id::new("user_service");
    /// assert_eq!(component_id.as_str(), "user_service");
    /// ```
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Id {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Id {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
