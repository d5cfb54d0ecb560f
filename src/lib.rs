//! # Incremental Profile
//!
//! Per-user behavioral embeddings maintained as a rating-weighted centroid
//! of rated item embeddings, updated one insert/delete/update at a time,
//! and blended with a static interest embedding into a profile embedding.

pub mod cli;
pub mod codec;
pub mod commands;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod request;
pub mod ui;
