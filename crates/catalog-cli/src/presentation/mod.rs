//! Presentation layer
//!
//! ## Flow:
//! `Catalog` (engine state) → presenters → view models → views/renderers
//!
//! - Presenters are the only place that reads engine state
//! - View models are plain, serializable data
//! - Views (ratatui widgets or `Display` impls) only map view models to output

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;
