//! Administrator credential handling

mod context;
mod session;

pub use context::*;
pub use session::*;
