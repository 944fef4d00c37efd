//! Workload generator and benchmark utilities for heapfind.
//!
//! This crate provides deterministic generation of value lists and edge lists
//! for benchmarking and property-based testing of `heapfind-core`.

pub mod correctness;
pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, Workload, generate_workload};
