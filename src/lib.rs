//! Symptom triage and hospital routing.
//!
//! Free-text symptom descriptions are matched to clinical departments, and
//! hospitals offering a department are ranked by a blend of distance, live
//! A&E congestion, and operational status. Congestion scores come from the
//! public accident & emergency waiting-time feed, refreshed in the
//! background and applied atomically to an in-memory hospital directory.

pub mod config;
pub mod directory;
pub mod feed;
pub mod geo;
pub mod models;
pub mod seed;
pub mod text;
pub mod triage;
