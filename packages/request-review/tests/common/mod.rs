// Common test utilities

pub mod fake_backend;
pub mod fixtures;

pub use fake_backend::*;
pub use fixtures::*;
