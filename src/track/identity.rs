//! Method Identity Module
//!
//! Stable identities for tracked methods. Every counter and history key in
//! the store derives from one of these, so the naming scheme lives in a
//! single place.

use std::borrow::Cow;
use std::fmt;

// == Method Identity ==
/// Identity of a tracked method, rendered as `Owner.method`.
///
/// The identity doubles as the counter key; the history lists hang off it
/// with `:inputs` and `:outputs` suffixes. Identities are always declared
/// explicitly, never derived from type names at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodId(Cow<'static, str>);

impl MethodId {
    // == Constructors ==
    /// Declares an identity from a static key, usable in constants.
    pub const fn from_static(key: &'static str) -> Self {
        Self(Cow::Borrowed(key))
    }

    /// Builds an identity from its owner and method parts.
    pub fn new(owner: &str, method: &str) -> Self {
        Self(Cow::Owned(format!("{owner}.{method}")))
    }

    // == Derived Keys ==
    /// The identity key itself, used as the call counter key.
    pub fn key(&self) -> &str {
        &self.0
    }

    /// Store key of the recorded-inputs list.
    pub fn inputs_key(&self) -> String {
        format!("{}:inputs", self.0)
    }

    /// Store key of the recorded-outputs list.
    pub fn outputs_key(&self) -> String {
        format!("{}:outputs", self.0)
    }
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
