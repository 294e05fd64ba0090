#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Linklift admin UI.
//!
//! A Yew single-page app for managing campaign tracking links: campaign
//! CRUD with search/pagination/filtering, a session-gated shell, and a
//! detail view surfacing the most recently generated URL per campaign.
//! Pure logic and state reducers live outside the wasm gate so they test
//! natively; components and browser services are wasm-only.

pub mod core;
pub mod features;
pub mod models;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
pub mod services;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
