//! likes-app - Host application for the liked content page
//!
//! Loads configuration and fixture data, owns the application store, and
//! wires likes-ui views to routing and intent handling.

pub mod app;
pub mod app_service;
pub mod components;
pub mod config;
pub mod fixtures;
pub mod pages;

pub use app::*;
