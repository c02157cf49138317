//! Cache Module
//!
//! Provides the instrumented key-value cache: a scalar value model, byte
//! decoders and the store facade whose calls are counted and recorded.

pub mod decode;
mod instrumented;
mod value;


// Re-export public types
pub use instrumented::{Cache, STORE_METHOD};
pub use value::{render_args, CacheValue};
