//! Reusable UI components

mod admin_layout;
mod admin_nav;
mod confirm_modal;
mod error_banner;
mod loading;
mod pagination_bar;

pub use admin_layout::*;
pub use admin_nav::*;
pub use confirm_modal::*;
pub use error_banner::*;
pub use loading::*;
pub use pagination_bar::*;
