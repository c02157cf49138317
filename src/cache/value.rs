//! Cache Value Module
//!
//! Scalar value model for everything the cache stores, plus the literal
//! rendering used when recording call arguments and results.

use std::fmt;

// == Cache Value ==
/// A value accepted by the cache: text, raw bytes, or a numeric scalar.
///
/// Every kind has a canonical byte form used for storage, and a literal
/// form used in recorded call history. `From` conversions cover the plain
/// Rust types callers actually pass, so `store("a")` and `store(42)` both
/// read naturally.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheValue {
    Text(String),
    Bytes(Vec<u8>),
    Int(i64),
    Float(f64),
}

impl CacheValue {
    // == Byte Projection ==
    /// Returns the canonical byte form written to the store.
    ///
    /// Text is UTF-8, bytes are kept verbatim, and numbers use their
    /// decimal rendering. An integral float keeps a trailing `.0` so its
    /// kind survives the round trip.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            CacheValue::Text(text) => text.clone().into_bytes(),
            CacheValue::Bytes(bytes) => bytes.clone(),
            CacheValue::Int(number) => number.to_string().into_bytes(),
            CacheValue::Float(number) => render_float(*number).into_bytes(),
        }
    }
}

// The Display form is the literal used in recorded history: quoted text,
// a b'...' byte literal, or the bare number.
impl fmt::Display for CacheValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheValue::Text(text) => f.write_str(&quote_text(text)),
            CacheValue::Bytes(bytes) => f.write_str(&quote_bytes(bytes)),
            CacheValue::Int(number) => write!(f, "{number}"),
            CacheValue::Float(number) => f.write_str(&render_float(*number)),
        }
    }
}

// == Conversions ==
impl From<&str> for CacheValue {
    fn from(value: &str) -> Self {
        CacheValue::Text(value.to_string())
    }
}

impl From<String> for CacheValue {
    fn from(value: String) -> Self {
        CacheValue::Text(value)
    }
}

impl From<Vec<u8>> for CacheValue {
    fn from(value: Vec<u8>) -> Self {
        CacheValue::Bytes(value)
    }
}

impl From<&[u8]> for CacheValue {
    fn from(value: &[u8]) -> Self {
        CacheValue::Bytes(value.to_vec())
    }
}

impl From<i64> for CacheValue {
    fn from(value: i64) -> Self {
        CacheValue::Int(value)
    }
}

impl From<f64> for CacheValue {
    fn from(value: f64) -> Self {
        CacheValue::Float(value)
    }
}

// == Argument Rendering ==
/// Renders a call's positional arguments as a tuple literal.
///
/// # Arguments
/// * `args` - The argument values, in call order
///
/// # Returns
/// `()` for no arguments, `('a',)` for one, `('a', 42)` for several.
pub fn render_args(args: &[CacheValue]) -> String {
    match args {
        [] => "()".to_string(),
        [single] => format!("({single},)"),
        many => {
            let parts: Vec<String> = many.iter().map(|arg| arg.to_string()).collect();
            format!("({})", parts.join(", "))
        }
    }
}

// == Rendering Helpers ==
/// Decimal rendering for a float, with `.0` appended when the default
/// rendering would look like an integer.
fn render_float(value: f64) -> String {
    let rendered = value.to_string();
    if rendered.contains('.') || rendered.contains("inf") || rendered == "NaN" {
        rendered
    } else {
        format!("{rendered}.0")
    }
}

/// Single-quoted text literal, escaping backslashes, quotes and control
/// characters. A recorded entry never spans lines, so one replay line is
/// always one call.
fn quote_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if ch.is_control() => out.push_str(&format!("\\x{:02x}", ch as u32)),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}

/// Byte-string literal, keeping printable ASCII and hex-escaping the rest.
fn quote_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 3);
    out.push_str("b'");
    for &byte in bytes {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'\'' => out.push_str("\\'"),
            0x20..=0x7e => out.push(byte as char),
            _ => out.push_str(&format!("\\x{byte:02x}")),
        }
    }
    out.push('\'');
    out
}
