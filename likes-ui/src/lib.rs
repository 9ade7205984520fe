//! likes-ui - UI types and components for the liked content page
//!
//! Contains display types, stores, and pure view components. Views read
//! state through stores and report clicks through callbacks; they never
//! mutate state or navigate on their own.

pub mod components;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use display_types::*;
