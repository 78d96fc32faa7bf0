//! Integration tests for LexiOps.
//!
//! The product keeps every collection in process memory, so these tests
//! exercise the crates directly as libraries: no server, no database, no
//! fixtures beyond the seeds the binaries themselves start with.
//!
//! # Test Categories
//!
//! - `list_pipeline` - the filter/sort/paginate engine over the seeded
//!   admin collections
//! - `admin_stores` - record store CRUD and the permission grant set
//! - `site_auth` - registration, login, and password reset
//! - `chat_reply` - the deferred chat reply timer, under paused time
//!
//! Run with: `cargo test -p lexiops-integration-tests`
