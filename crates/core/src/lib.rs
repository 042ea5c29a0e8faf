//! Core types and traits for sessionstore.
//!
//! This crate holds the backend-agnostic pieces: the [`session::Session`]
//! and [`session::SessionStore`] contracts, the [`cache::Cache`] backend
//! abstraction, error types, and pure helpers for identifiers, expiry and
//! data encoding. It performs no I/O.

pub mod cache;
pub mod session;
