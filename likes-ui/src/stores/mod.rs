//! Store types for UI state management
//!
//! These stores hold the state the liked content page reads. Each store
//! derives `Store` for fine-grained reactivity via lensing.

pub mod app;
pub mod liked;
pub mod playback;

pub use app::*;
pub use liked::*;
pub use playback::*;
