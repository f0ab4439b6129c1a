//! Application pages

pub mod admin;
