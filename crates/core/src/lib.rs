//! Domain types for the music catalog.
//!
//! Holds the four catalog documents (tracks, albums, sample packs, sounds),
//! their create/update inputs and the pure-logic validation applied before
//! anything reaches the document store. No database or HTTP dependencies.

pub mod document;
pub mod error;
pub mod media;
pub mod models;
pub mod types;
pub mod validation;
