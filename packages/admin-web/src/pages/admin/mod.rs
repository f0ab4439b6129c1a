//! Admin pages

mod requests;

pub use requests::*;
