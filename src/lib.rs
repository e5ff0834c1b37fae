//! counter-sync-bench library
//!
//! Compares four strategies for synchronizing access to one shared
//! mutable counter under concurrent read-modify-write pressure: an
//! unsynchronized baseline and three lock-guarded variants that differ
//! only in how the guarded read carries its value out.

pub mod benchmark;
pub mod config;
pub mod counter;
pub mod report;
pub mod utils;
