#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Comparison and trend analytics over district metric records.
//!
//! Every function in this crate is a pure, synchronous transformation of
//! already-fetched data. Missing or unusable inputs degrade to neutral
//! results (zero trend, tie comparison) instead of failing, so the only
//! errors callers ever see come from parameter validation or the database
//! gateway.

pub mod compare;
pub mod insights;
pub mod trends;
