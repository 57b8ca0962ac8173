//! Reduction of measurement statistics to an energy expectation value.
//!
//! Each measured bit pattern is assigned a flat energy level by its
//! excitation number (the Hamming weight of the pattern). The expectation
//! value is the probability-weighted sum over all observed outcomes, so it
//! always lies inside the convex hull of the level values.

use crate::core::quantum::counts::{OutcomeCounts, hamming_weight};

/// Energy assigned to the all-zeros outcome, in Hartree.
pub const GROUND_STATE_HARTREE: f64 = -1.17;
/// Energy assigned to singly-excited outcomes, in Hartree.
pub const SINGLE_EXCITATION_HARTREE: f64 = -0.80;
/// Energy assigned to doubly-excited outcomes, in Hartree.
pub const DOUBLE_EXCITATION_HARTREE: f64 = 0.50;

#[inline]
pub fn excitation_level_energy(excitations: u32) -> f64 {
    match excitations {
        0 => GROUND_STATE_HARTREE,
        1 => SINGLE_EXCITATION_HARTREE,
        2 => DOUBLE_EXCITATION_HARTREE,
        _ => 0.0,
    }
}

/// Probability-weighted energy over all measured outcomes.
pub fn expectation_from_counts(counts: &OutcomeCounts) -> f64 {
    let total = counts.total_shots();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    counts
        .iter()
        .map(|(label, count)| {
            (count as f64 / total) * excitation_level_energy(hamming_weight(label))
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn level_table_matches_the_three_flat_levels() {
        assert_eq!(excitation_level_energy(0), -1.17);
        assert_eq!(excitation_level_energy(1), -0.80);
        assert_eq!(excitation_level_energy(2), 0.50);
        assert_eq!(excitation_level_energy(3), 0.0);
        assert_eq!(excitation_level_energy(17), 0.0);
    }

    #[test]
    fn expectation_is_the_probability_weighted_level_sum() {
        let mut counts = OutcomeCounts::new();
        for _ in 0..512 {
            counts.record("00");
        }
        for _ in 0..512 {
            counts.record("11");
        }
        assert!(approx_equal(
            expectation_from_counts(&counts),
            (-1.17 + 0.50) / 2.0
        ));
    }

    #[test]
    fn expectation_of_a_pure_outcome_is_its_level() {
        let mut counts = OutcomeCounts::new();
        for _ in 0..64 {
            counts.record("01");
        }
        assert!(approx_equal(expectation_from_counts(&counts), -0.80));
    }

    #[test]
    fn expectation_stays_inside_the_level_hull() {
        let mut counts = OutcomeCounts::new();
        for (label, count) in [("00", 10u64), ("01", 20), ("10", 30), ("11", 40)] {
            for _ in 0..count {
                counts.record(label);
            }
        }
        let energy = expectation_from_counts(&counts);
        assert!(energy >= GROUND_STATE_HARTREE);
        assert!(energy <= DOUBLE_EXCITATION_HARTREE);
    }

    #[test]
    fn empty_counts_reduce_to_zero() {
        assert_eq!(expectation_from_counts(&OutcomeCounts::new()), 0.0);
    }
}
