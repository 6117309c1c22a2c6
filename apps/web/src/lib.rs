//! Headless page controller for the portfolio site.
//!
//! The browser page is modeled as a [`document::Document`] plus one small
//! state type per behavior. [`controller::PageController`] owns all of them
//! and is the only place that talks to the content API.

pub mod client;
pub mod config;
pub mod controller;
pub mod document;
pub mod form;
pub mod modal;
pub mod nav;
pub mod render;
pub mod reveal;
pub mod store;
pub mod theme;
pub mod timing;

pub use client::{ApiClient, ClientError};
pub use config::WebConfig;
pub use controller::{LoadReport, PageController, PageState, SubmitOutcome};
pub use store::{FileStore, MemoryStore, PreferenceStore};
