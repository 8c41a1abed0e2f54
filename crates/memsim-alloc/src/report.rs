//! Allocation report and its projections.
//!
//! The report keeps partition identity (caller index) so that equal
//! capacities stay distinguishable. [`AllocationReport::to_groups`]
//! projects it onto the `[key, item, ...]` wire format.

use memsim_core::{Algorithm, Group};
use serde::Serialize;

/// Key of the unallocated group and the "nothing assigned" placeholder.
pub const SENTINEL: u64 = 0;

/// Final state of one caller-supplied partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartitionReport {
    /// Position in the caller-supplied partition list.
    pub index: usize,
    pub capacity: u64,
    pub remaining: u64,
    /// Process sizes in placement order.
    pub processes: Vec<u64>,
}

impl PartitionReport {
    pub fn used(&self) -> u64 {
        self.capacity - self.remaining
    }

    pub fn to_group(&self) -> Group {
        keyed_group(self.capacity, &self.processes)
    }
}

/// Result of one allocation run, partitions in caller order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationReport {
    pub algorithm: Algorithm,
    pub partitions: Vec<PartitionReport>,
    /// Rejected process sizes, in rejection order.
    pub unallocated: Vec<u64>,
}

/// Aggregate figures for a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationSummary {
    pub placed: usize,
    pub unallocated: usize,
    pub total_capacity: u64,
    pub used: u64,
    pub free: u64,
    /// `used / total_capacity`, 0.0 when there is no capacity.
    pub utilization: f64,
}

impl AllocationReport {
    /// Wire groups: one per partition in caller order, then the
    /// unallocated group.
    pub fn to_groups(&self) -> Vec<Group> {
        let mut groups: Vec<Group> = self.partitions.iter().map(PartitionReport::to_group).collect();
        groups.push(self.unallocated_group());
        groups
    }

    pub fn unallocated_group(&self) -> Group {
        keyed_group(SENTINEL, &self.unallocated)
    }

    pub fn summary(&self) -> AllocationSummary {
        let placed = self.partitions.iter().map(|p| p.processes.len()).sum();
        let total_capacity = self
            .partitions
            .iter()
            .fold(0u64, |acc, p| acc.saturating_add(p.capacity));
        let used = self
            .partitions
            .iter()
            .fold(0u64, |acc, p| acc.saturating_add(p.used()));
        let utilization = if total_capacity > 0 {
            used as f64 / total_capacity as f64
        } else {
            0.0
        };

        AllocationSummary {
            placed,
            unallocated: self.unallocated.len(),
            total_capacity,
            used,
            free: total_capacity.saturating_sub(used),
            utilization,
        }
    }

    /// Human-readable rendering for terminals.
    pub fn format_text(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("{} allocation\n\n", self.algorithm));
        out.push_str(&format!(
            "  {:>3}  {:>10}  {:>10}  processes\n",
            "#", "capacity", "free"
        ));

        for p in &self.partitions {
            let procs = if p.processes.is_empty() {
                "-".to_string()
            } else {
                join(&p.processes)
            };
            out.push_str(&format!(
                "  {:>3}  {:>10}  {:>10}  {procs}\n",
                p.index, p.capacity, p.remaining
            ));
        }

        out.push('\n');
        if self.unallocated.is_empty() {
            out.push_str("  unallocated: none\n");
        } else {
            out.push_str(&format!("  unallocated: {}\n", join(&self.unallocated)));
        }

        let s = self.summary();
        out.push_str(&format!(
            "\n  placed {}/{} processes, {} of {} units used ({:.1}%)\n",
            s.placed,
            s.placed + s.unallocated,
            s.used,
            s.total_capacity,
            s.utilization * 100.0
        ));

        out
    }
}

fn keyed_group(key: u64, items: &[u64]) -> Group {
    let mut group = Vec::with_capacity(items.len().max(1) + 1);
    group.push(key);
    if items.is_empty() {
        group.push(SENTINEL);
    } else {
        group.extend_from_slice(items);
    }
    group
}

fn join(values: &[u64]) -> String {
    values.iter().map(u64::to_string).collect::<Vec<_>>().join(", ")
}
