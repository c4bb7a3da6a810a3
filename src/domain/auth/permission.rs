//! Permission value objects.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Read access to mood records.
pub const MOOD_READ: Permission = Permission::from_static("mood:read");

/// Write access to mood records.
pub const MOOD_WRITE: Permission = Permission::from_static("mood:write");

/// Read access to recent commit activity.
pub const COMMITS_READ: Permission = Permission::from_static("commits:read");

/// A named capability that may be granted to an access code.
///
/// Permissions are plain, human-readable strings such as `mood:read`.
/// They compare by value and never change once created.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Permission(Cow<'static, str>);

impl Permission {
    /// Creates a permission from a static string.
    ///
    /// Intended for constants; the caller guarantees the name is not blank.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates a permission from a runtime string.
    ///
    /// Surrounding whitespace is trimmed; blank names are rejected.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("permission"));
        }
        Ok(Self(Cow::Owned(trimmed.to_string())))
    }

    /// Returns the permission name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Permission {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Permission::new(value)
    }
}

impl From<Permission> for String {
    fn from(p: Permission) -> Self {
        p.0.into_owned()
    }
}

/// The set of permissions granted to a single access code.
///
/// Ordered and de-duplicated; serializes as a JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<Permission>);

impl PermissionSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `permission` is in the set.
    pub fn contains(&self, permission: &Permission) -> bool {
        self.0.contains(permission)
    }

    /// Adds a permission. Returns false if it was already present.
    pub fn insert(&mut self, permission: Permission) -> bool {
        self.0.insert(permission)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.0.iter()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for PermissionSet {
    type Item = Permission;
    type IntoIter = std::collections::btree_set::IntoIter<Permission>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
