//! Hardy-Weinberg equilibrium yield math.
//!
//! Under random mating, genotype frequencies follow p², 2pq, q² where q is
//! the alternate allele frequency and p = 1 − q. Expected counts are the
//! genotype frequency times the cohort size, truncated toward zero.

/// Expected carriers (heterozygous + homozygous alt) in a cohort of `n`:
/// trunc((2pq + q²) · n).
///
/// `allele_frequency` is not range-checked; values outside [0, 1] produce
/// mathematically consistent results, which can be negative, hence the
/// signed return type.
pub fn hwe_carriers(allele_frequency: f64, cohort_size: u64) -> i64 {
    let q = allele_frequency;
    let p = 1.0 - q;
    let carrier_freq = 2.0 * p * q + q * q;
    truncate(carrier_freq * cohort_to_f64(cohort_size))
}

/// Expected homozygous-alt individuals in a cohort of `n`: trunc(q² · n).
pub fn hwe_homozygotes(allele_frequency: f64, cohort_size: u64) -> i64 {
    let q = allele_frequency;
    truncate(q * q * cohort_to_f64(cohort_size))
}

/// Truncation toward zero, not rounding: 1900.9 expected carriers is 1900
/// recallable individuals.
#[inline]
fn truncate(expected: f64) -> i64 {
    #[allow(clippy::cast_possible_truncation)]
    {
        expected.trunc() as i64
    }
}

/// Safely convert a cohort size to f64.
///
/// Cohorts are far inside the f64 mantissa range (biobanks top out in the
/// millions), so the precision loss the lint guards against cannot occur.
#[inline]
fn cohort_to_f64(cohort_size: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        cohort_size as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hwe_carriers() {
        // q=0.1, n=10000: (2*0.9*0.1 + 0.01) * 10000 = 1900
        assert_eq!(hwe_carriers(0.1, 10_000), 1900);
    }

    #[test]
    fn test_hwe_homozygotes() {
        // q=0.1, n=10000: 0.01 * 10000 = 100
        assert_eq!(hwe_homozygotes(0.1, 10_000), 100);
    }

    #[test]
    fn test_truncation_not_rounding() {
        // q=0.123, n=999: q²·n = 15.113... -> 15
        assert_eq!(hwe_homozygotes(0.123, 999), 15);
        // carriers = (2*0.877*0.123 + 0.015129)*999 = 230.63... -> 230
        assert_eq!(hwe_carriers(0.123, 999), 230);
    }

    #[test]
    fn test_homozygotes_never_exceed_carriers_in_range() {
        for step in 0..=100 {
            let q = f64::from(step) / 100.0;
            for n in [0u64, 1, 100, 10_000, 1_000_000] {
                assert!(
                    hwe_homozygotes(q, n) <= hwe_carriers(q, n),
                    "q={q}, n={n}"
                );
            }
        }
    }

    #[test]
    fn test_boundary_frequencies() {
        assert_eq!(hwe_carriers(0.0, 10_000), 0);
        assert_eq!(hwe_homozygotes(0.0, 10_000), 0);
        // q=1: everyone is a homozygous-alt carrier
        assert_eq!(hwe_carriers(1.0, 10_000), 10_000);
        assert_eq!(hwe_homozygotes(1.0, 10_000), 10_000);
    }

    #[test]
    fn test_out_of_range_frequency_is_not_an_error() {
        // q=-0.5: 2*1.5*(-0.5) + 0.25 = -1.25 per individual
        assert_eq!(hwe_carriers(-0.5, 1000), -1250);
        assert_eq!(hwe_homozygotes(-0.5, 1000), 250);
        // q=1.5 overshoots the cohort
        assert_eq!(hwe_carriers(1.5, 1000), 750);
        assert_eq!(hwe_homozygotes(1.5, 1000), 2250);
    }
}
