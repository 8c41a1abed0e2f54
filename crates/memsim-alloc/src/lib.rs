//! memsim allocator — fixed-partition placement.
//!
//! Given process sizes and fixed partition capacities, assigns each
//! process to at most one partition under First-Fit, Best-Fit or
//! Worst-Fit, and reports per-partition assignments plus the processes
//! that fit nowhere.
//!
//! # Components
//!
//! - **`strategy`** — Working order and slot selection per algorithm
//! - **`allocator`** — Per-process placement loop and aggregation
//! - **`report`** — Allocation report, wire projection, summary, text view

pub mod allocator;
pub mod report;
pub mod strategy;

pub use allocator::{allocate, allocate_named};
pub use report::{AllocationReport, AllocationSummary, PartitionReport};
pub use strategy::{PartitionSlot, select_slot, working_order};
