//! Decode Module
//!
//! Decoders that project stored bytes back into typed values. Each one is
//! an ordinary function usable with [`Cache::retrieve_with`], so callers
//! can supply their own in the same shape.
//!
//! [`Cache::retrieve_with`]: crate::cache::Cache::retrieve_with

use crate::error::{CacheError, Result};

// == Decoders ==
/// Decodes stored bytes as strict UTF-8 text.
pub fn text(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec())
        .map_err(|err| CacheError::Decode(format!("not valid UTF-8: {err}")))
}

/// Decodes stored bytes as a base-10 signed integer.
pub fn int(bytes: &[u8]) -> Result<i64> {
    let text = std::str::from_utf8(bytes)
        .map_err(|err| CacheError::Decode(format!("not valid UTF-8: {err}")))?;
    text.parse::<i64>()
        .map_err(|err| CacheError::Decode(format!("not an integer: {err}")))
}
