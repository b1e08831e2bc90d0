//! Platform-agnostic dashboard logic. Nothing in here touches the DOM.

pub mod aggregate;
pub mod config;
pub mod curve;
pub mod dataset;
pub mod error;
pub mod format;
pub mod platform;
pub mod record;
pub mod scale;
pub mod sort;
pub mod timing;
pub mod tooltip;
