//! URL shortener service implementation.
//!
//! This crate provides [`UrlShortener`], the minify/expand orchestrator.
//! Core types are re-exported from `urlmini_core`.

pub mod service;

pub use service::UrlShortener;
pub use urlmini_core::{Alias, AliasScheme, Shortener, ShortenerError, ShortenerSettings};
