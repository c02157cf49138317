//! Track Module
//!
//! Provides call counting, call history recording and replay for tracked
//! methods, layered around an operation as interceptors.

mod count;
mod history;
mod identity;
mod interceptor;
mod replay;

// Re-export public types
pub use count::CallCount;
pub use history::CallHistory;
pub use identity::MethodId;
pub use interceptor::{Interceptor, Next, Operation, TrackedCall};
pub use replay::{replay, CallPair, ReplayReport};
