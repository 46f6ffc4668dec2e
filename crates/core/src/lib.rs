//! Core types for attribstore.
//!
//! Defines the request context, the partition-key generator strategies, the
//! persistence adapter trait and its error taxonomy. Store backends live in
//! the `attribstore` crate and implement the traits defined here.

pub mod context;
pub mod partition;
pub mod persistence;
