//! Power series for the lower incomplete gamma function.
//!
//! γ(a,x) = x^a e^{−x} Σ_{n≥0} x^n / (a (a+1) ⋯ (a+n)),
//!
//! which converges for every x but is only efficient for x ≲ a + 1.

use crate::{Lane, LaneMask};

/// Lower incomplete gamma by power series.
///
/// Returns γ(a,x), or P(a,x) when `NORMALIZE` is set, on lanes where
/// `active & a > 0 & x ≥ 0`; every other lane is `0`. Lanes stop
/// accumulating once the latest term drops below ε·|sum|. The loop ends when
/// all lanes have converged or after `MAX_TERMS` terms, whichever comes
/// first. Non-convergence is not reported.
pub(crate) fn lower_series<L: Lane, const MAX_TERMS: usize, const NORMALIZE: bool>(
    a: L,
    x: L,
    active: L::Mask,
) -> L {
    let zero = L::zero();
    let mask = active & x.cmp_ge(zero) & a.cmp_gt(zero);
    if mask.none() {
        return zero;
    }

    let eps = L::epsilon();
    let mut ap = a;
    let mut term = L::select(mask, a.recip(), zero);
    let mut sum = term;
    let mut converged = !mask;

    for _ in 1..=MAX_TERMS {
        if converged.all() {
            break;
        }
        ap += L::one();
        term *= L::select(converged, zero, x / ap);
        sum += term;
        converged |= term.abs().cmp_lt(sum.abs() * eps);
    }

    let norm = if NORMALIZE { a.lgamma() } else { zero };
    let prefactor = (a * x.ln() - x - norm).exp();
    L::select(mask, sum * prefactor, zero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Packet;

    #[test]
    fn exponential_case() {
        // P(1, x) = 1 − e^{−x}
        for &x in &[0.0_f64, 0.1, 0.5, 1.0, 1.9] {
            let p = lower_series::<f64, 100, true>(1.0, x, true);
            assert!((p - (1.0 - (-x).exp())).abs() < 1e-14, "x={x}: {p}");
        }
    }

    #[test]
    fn unnormalized_scales_by_gamma() {
        let a = 3.5_f64;
        let x = 2.0;
        let g = lower_series::<f64, 100, false>(a, x, true);
        let p = lower_series::<f64, 100, true>(a, x, true);
        assert!((g / crate::special::gamma(a) - p).abs() < 1e-14);
    }

    #[test]
    fn inactive_and_invalid_lanes_are_zero() {
        let a = Packet::new([2.0_f64, -1.0, 2.0, 0.0]);
        let x = Packet::new([1.0_f64, 1.0, -0.5, 1.0]);
        let active = crate::PacketMask::new([true, true, true, true]);
        let r = lower_series::<_, 100, true>(a, x, active);
        assert!(r[0] > 0.0);
        assert_eq!(r[1], 0.0);
        assert_eq!(r[2], 0.0);
        assert_eq!(r[3], 0.0);

        let off = crate::PacketMask::new([false, true, true, true]);
        assert_eq!(lower_series::<_, 100, true>(a, x, off)[0], 0.0);
    }

    #[test]
    fn term_limit_truncates() {
        // One term: sum = 1/a, so γ ≈ x^a e^{-x} / a
        let a = 2.0_f64;
        let x = 1.0;
        let g = lower_series::<f64, 0, false>(a, x, true);
        assert!((g - (-1.0_f64).exp() / 2.0).abs() < 1e-15);
    }
}
