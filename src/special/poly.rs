//! Polynomial helpers shared by the gamma evaluators.

use crate::Lane;

/// Broadcast an `f64` literal to a lane.
#[inline(always)]
pub(crate) fn lit<L: Lane>(value: f64) -> L {
    L::from_f64(value)
}

/// Horner evaluation of `c[0] + c[1]·x + … + c[n−1]·x^{n−1}`.
///
/// An empty coefficient slice evaluates to zero. Callers truncate a longer
/// table with `&table[..n]` to use only its first `n` coefficients.
#[inline]
pub(crate) fn horner<L: Lane>(x: L, coeffs: &[f64]) -> L {
    let mut acc = L::zero();
    for &c in coeffs.iter().rev() {
        acc = acc * x + L::from_f64(c);
    }
    acc
}

/// Horner evaluation with lane-valued coefficients.
#[inline]
pub(crate) fn horner_lanes<L: Lane>(x: L, coeffs: &[L]) -> L {
    let mut acc = L::zero();
    for &c in coeffs.iter().rev() {
        acc = acc * x + c;
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Packet;

    #[test]
    fn horner_matches_expanded() {
        // 1 + 2x + 3x² at x = 2
        assert_eq!(horner(2.0_f64, &[1.0, 2.0, 3.0]), 17.0);
        assert_eq!(horner(2.0_f64, &[]), 0.0);
        // truncated to 1 + 2x
        assert_eq!(horner(2.0_f64, &[1.0, 2.0, 3.0][..2]), 5.0);
    }

    #[test]
    fn horner_lanes_per_lane() {
        let x = Packet::new([0.0_f64, 1.0, -1.0, 0.5]);
        let c = [Packet::splat(1.0), Packet::new([1.0, 2.0, 3.0, 4.0])];
        let r = horner_lanes(x, &c);
        assert_eq!(r.to_array(), [1.0, 3.0, -2.0, 3.0]);
    }
}
