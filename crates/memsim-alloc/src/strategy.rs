//! Placement strategy: working order and slot selection.
//!
//! Best-Fit and Worst-Fit scan partitions in ascending capacity order;
//! First-Fit scans them in caller order. Within a scan the first
//! qualifying slot wins every tie.

use memsim_core::Algorithm;

/// One partition's state for the duration of a single allocation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionSlot {
    /// Position in the caller-supplied partition list.
    pub index: usize,
    pub capacity: u64,
    pub remaining: u64,
}

impl PartitionSlot {
    pub fn fits(&self, size: u64) -> bool {
        self.remaining >= size
    }
}

/// Build the working order for `algorithm`.
///
/// The sort is stable, so equal capacities keep their caller order.
pub fn working_order(partitions: &[u64], algorithm: Algorithm) -> Vec<PartitionSlot> {
    let mut slots: Vec<PartitionSlot> = partitions
        .iter()
        .enumerate()
        .map(|(index, &capacity)| PartitionSlot {
            index,
            capacity,
            remaining: capacity,
        })
        .collect();

    if algorithm.sorts_partitions() {
        slots.sort_by_key(|s| s.capacity);
    }
    slots
}

/// Pick the working-order position that receives a process of `size`.
///
/// Returns `None` when no slot has enough remaining capacity.
pub fn select_slot(working: &[PartitionSlot], size: u64, algorithm: Algorithm) -> Option<usize> {
    let mut candidates = working.iter().enumerate().filter(|(_, s)| s.fits(size));

    match algorithm {
        Algorithm::FirstFit => candidates.next().map(|(pos, _)| pos),
        Algorithm::BestFit => candidates
            .fold(None, |best: Option<(usize, u64)>, (pos, s)| match best {
                Some((_, rem)) if s.remaining >= rem => best,
                _ => Some((pos, s.remaining)),
            })
            .map(|(pos, _)| pos),
        Algorithm::WorstFit => candidates
            .fold(None, |worst: Option<(usize, u64)>, (pos, s)| match worst {
                Some((_, rem)) if s.remaining <= rem => worst,
                _ => Some((pos, s.remaining)),
            })
            .map(|(pos, _)| pos),
    }
}
