//! LexiOps Core - Shared types library.
//!
//! This crate provides common types used across all LexiOps components:
//! - `site` - Public-facing product site (marketing, auth, chat)
//! - `admin` - Internal administration panel
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP,
//! no template rendering. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, byte sizes,
//!   prices, and statuses
//! - [`listview`] - The generic filter/sort/paginate engine backing the
//!   admin list pages

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod listview;
pub mod types;

pub use types::*;
