//! Test helpers shared across crates.
//!
//! This crate provides settings fixtures backed by in-memory provider data
//! and text helpers for asserting on rendered summaries.

pub mod fixtures;
pub mod text;
