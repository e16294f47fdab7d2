//! Read models
//!
//! View-optimized structs derived from the domain records.

pub mod card_view;

pub use card_view::CardView;
