//! Allocation engine — one pass over the processes, in arrival order.
//!
//! 1. Build the working order for the algorithm (see `strategy`)
//! 2. Place each process into one slot, or reject it
//! 3. Aggregate placements per partition, then restore caller order

use memsim_core::{AllocResult, Algorithm};
use tracing::debug;

use crate::report::{AllocationReport, PartitionReport};
use crate::strategy::{select_slot, working_order};

/// Allocate `processes` into fixed `partitions` under `algorithm`.
///
/// Pure and deterministic: identical input always yields an identical
/// report. A process is never split and never retried once rejected.
pub fn allocate(processes: &[u64], partitions: &[u64], algorithm: Algorithm) -> AllocationReport {
    let mut working = working_order(partitions, algorithm);

    // Placements per working-order position, in placement order.
    let mut placed: Vec<Vec<u64>> = vec![Vec::new(); working.len()];
    let mut unallocated = Vec::new();

    for &size in processes {
        match select_slot(&working, size, algorithm) {
            Some(pos) => {
                let slot = &mut working[pos];
                slot.remaining -= size;
                placed[pos].push(size);
                debug!(
                    %algorithm,
                    process = size,
                    partition = slot.index,
                    capacity = slot.capacity,
                    remaining = slot.remaining,
                    "placed process"
                );
            }
            None => {
                unallocated.push(size);
                debug!(%algorithm, process = size, "no partition can hold process");
            }
        }
    }

    let mut reports: Vec<PartitionReport> = working
        .iter()
        .zip(placed)
        .map(|(slot, processes)| PartitionReport {
            index: slot.index,
            capacity: slot.capacity,
            remaining: slot.remaining,
            processes,
        })
        .collect();

    // Working order is sorted for Best/Worst-Fit; callers expect theirs.
    reports.sort_by_key(|r| r.index);

    let report = AllocationReport {
        algorithm,
        partitions: reports,
        unallocated,
    };

    debug!(
        %algorithm,
        processes = processes.len(),
        partitions = partitions.len(),
        unallocated = report.unallocated.len(),
        "allocation complete"
    );

    report
}

/// Like [`allocate`], but takes the algorithm as its wire token.
///
/// An unrecognized token is a contract violation and is returned as
/// [`memsim_core::AllocError::UnknownAlgorithm`]; no policy is assumed.
pub fn allocate_named(
    processes: &[u64],
    partitions: &[u64],
    algorithm: &str,
) -> AllocResult<AllocationReport> {
    let algorithm: Algorithm = algorithm.parse()?;
    Ok(allocate(processes, partitions, algorithm))
}

#[cfg(test)]
mod tests {
    use memsim_core::AllocError;

    use super::*;

    const PROCESSES: [u64; 4] = [234, 417, 322, 122];
    const PARTITIONS: [u64; 5] = [600, 500, 300, 100, 200];

    #[test]
    fn first_fit_classic_example() {
        let report = allocate(&PROCESSES, &PARTITIONS, Algorithm::FirstFit);

        assert_eq!(
            report.to_groups(),
            vec![
                vec![600, 234, 122],
                vec![500, 417],
                vec![300, 0],
                vec![100, 0],
                vec![200, 0],
                vec![0, 322],
            ]
        );
    }

    #[test]
    fn best_fit_classic_example() {
        // Sorted: 100 200 300 500 600.
        // 234 -> 300 (66), 417 -> 500 (83), 322 -> 600 (278), 122 -> 200 (78).
        let report = allocate(&PROCESSES, &PARTITIONS, Algorithm::BestFit);

        assert_eq!(
            report.to_groups(),
            vec![
                vec![600, 322],
                vec![500, 417],
                vec![300, 234],
                vec![100, 0],
                vec![200, 122],
                vec![0, 0],
            ]
        );
    }

    #[test]
    fn worst_fit_classic_example() {
        // 234 -> 600 (366), 417 -> 500 (83), 322 -> 600 (44), 122 -> 300 (178).
        let report = allocate(&PROCESSES, &PARTITIONS, Algorithm::WorstFit);

        assert_eq!(
            report.to_groups(),
            vec![
                vec![600, 234, 322],
                vec![500, 417],
                vec![300, 122],
                vec![100, 0],
                vec![200, 0],
                vec![0, 0],
            ]
        );
    }

    #[test]
    fn remaining_capacity_tracks_placements() {
        let report = allocate(&PROCESSES, &PARTITIONS, Algorithm::FirstFit);
        assert_eq!(report.partitions[0].remaining, 600 - 234 - 122);
        assert_eq!(report.partitions[1].remaining, 83);
        assert_eq!(report.partitions[2].remaining, 300);
    }

    #[test]
    fn rejected_process_is_not_retried() {
        // Only 250 is left when 300 arrives.
        let report = allocate(&[100, 300, 50], &[350], Algorithm::FirstFit);
        assert_eq!(report.to_groups(), vec![vec![350, 100, 50], vec![0, 300]]);
    }

    #[test]
    fn empty_processes() {
        for algorithm in Algorithm::ALL {
            let report = allocate(&[], &[300, 100], algorithm);
            assert_eq!(report.to_groups(), vec![vec![300, 0], vec![100, 0], vec![0, 0]]);
        }
    }

    #[test]
    fn empty_partitions() {
        for algorithm in Algorithm::ALL {
            let report = allocate(&[5, 7, 5], &[], algorithm);
            assert_eq!(report.to_groups(), vec![vec![0, 5, 7, 5]]);
        }
    }

    #[test]
    fn both_empty() {
        let report = allocate(&[], &[], Algorithm::BestFit);
        assert_eq!(report.to_groups(), vec![vec![0, 0]]);
    }

    #[test]
    fn duplicate_capacities_report_separately() {
        let report = allocate(&[60, 60, 60], &[100, 100], Algorithm::FirstFit);
        assert_eq!(
            report.to_groups(),
            vec![vec![100, 60], vec![100, 60], vec![0, 60]]
        );
        assert_eq!(report.partitions[0].index, 0);
        assert_eq!(report.partitions[1].index, 1);
    }

    #[test]
    fn best_fit_tie_prefers_earlier_duplicate() {
        let report = allocate(&[40], &[500, 100, 100], Algorithm::BestFit);
        assert_eq!(report.partitions[1].processes, vec![40]);
        assert!(report.partitions[2].processes.is_empty());
    }

    #[test]
    fn worst_fit_tie_prefers_smaller_sorted_position() {
        // Both 300s tie as largest; index 1 precedes index 2 after the stable sort.
        let report = allocate(&[10], &[100, 300, 300], Algorithm::WorstFit);
        assert_eq!(report.partitions[1].processes, vec![10]);
        assert!(report.partitions[2].processes.is_empty());
    }

    #[test]
    fn zero_capacity_partition() {
        // A zero-size process fits a zero-capacity partition.
        let report = allocate(&[0, 50, 10], &[0, 50], Algorithm::FirstFit);
        assert_eq!(report.partitions[0].processes, vec![0]);
        assert_eq!(report.partitions[1].processes, vec![50]);
        assert_eq!(report.unallocated, vec![10]);
        assert_eq!(
            report.to_groups(),
            vec![vec![0, 0], vec![50, 50], vec![0, 10]]
        );
    }

    #[test]
    fn zero_capacity_partition_stays_in_caller_position() {
        let report = allocate(&[], &[100, 0, 50], Algorithm::BestFit);
        let caps: Vec<u64> = report.partitions.iter().map(|p| p.capacity).collect();
        assert_eq!(caps, vec![100, 0, 50]);
        assert_eq!(report.to_groups().last(), Some(&vec![0, 0]));
    }

    #[test]
    fn deterministic() {
        for algorithm in Algorithm::ALL {
            let a = allocate(&PROCESSES, &PARTITIONS, algorithm);
            let b = allocate(&PROCESSES, &PARTITIONS, algorithm);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn named_allocation_parses_token() {
        let report = allocate_named(&PROCESSES, &PARTITIONS, "Worst-Fit").unwrap();
        assert_eq!(report.algorithm, Algorithm::WorstFit);
    }

    #[test]
    fn named_allocation_rejects_unknown_token() {
        let err = allocate_named(&PROCESSES, &PARTITIONS, "Next-Fit").unwrap_err();
        assert_eq!(err, AllocError::UnknownAlgorithm("Next-Fit".to_string()));
    }
}
