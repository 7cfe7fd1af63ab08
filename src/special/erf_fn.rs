//! Error function and complementary error function.
//!
//! erf(x) = P(½, x²) and erfc(x) = Q(½, x²) for x ≥ 0, so both are computed
//! with the crate's own series and continued fraction at a = ½. Temme's
//! expansion is never involved, since it calls back into `erfc`.

use super::contfrac::upper_contfrac;
use super::series::lower_series;
use crate::ScalarLane;

/// Term budget for the a = ½ evaluators.
const ERF_MAX_TERMS: usize = 200;

/// Below this |x| the Taylor series of erf is used directly.
const TAYLOR_LIMIT: f64 = 0.5;

/// `(P(½, x²), Q(½, x²))` for `x2 = x² ≥ 0`.
fn half_pq<T: ScalarLane>(x2: T) -> (T, T) {
    let one = T::one();
    let a = T::from_f64(0.5);
    if x2 <= a + one {
        let p = lower_series::<T, ERF_MAX_TERMS, true>(a, x2, true);
        (p, one - p)
    } else {
        let q = upper_contfrac::<T, ERF_MAX_TERMS, true>(a, x2, true);
        (one - q, q)
    }
}

/// erf(x) = 2/√π Σ (−1)^n x^{2n+1} / (n! (2n+1)) for small |x|.
fn erf_taylor<T: ScalarLane>(x: T) -> T {
    let x2 = x * x;
    let eps = T::epsilon();
    let mut power = x;
    let mut sum = x;
    let mut n = 1.0_f64;
    while n < 40.0 {
        power *= -x2 / T::from_f64(n);
        let term = power / T::from_f64(2.0 * n + 1.0);
        sum += term;
        if term.abs() <= sum.abs() * eps {
            break;
        }
        n += 1.0;
    }
    T::from_f64(core::f64::consts::FRAC_2_SQRT_PI) * sum
}

/// Error function erf(x).
///
/// Saturates to ±1 for |x| > 6. NaN propagates.
///
/// # Example
///
/// ```
/// use incgamma::special::erf;
///
/// assert_eq!(erf(0.0_f64), 0.0);
/// assert!((erf(1.0_f64) - 0.8427007929497149).abs() < 1e-14);
/// assert!((erf(-1.0_f64) + 0.8427007929497149).abs() < 1e-14);
/// ```
pub fn erf<T: ScalarLane>(x: T) -> T {
    if !x.cmp_eq(x) {
        return x;
    }
    let ax = x.abs();
    if ax > T::from_f64(6.0) {
        return x.signum();
    }
    if ax < T::from_f64(TAYLOR_LIMIT) {
        return erf_taylor(x);
    }
    let (p, _) = half_pq(x * x);
    x.signum() * p
}

/// Complementary error function erfc(x) = 1 − erf(x).
///
/// Computed directly from the upper tail for positive arguments, so it keeps
/// full relative accuracy where `1 − erf(x)` would cancel. Saturates to 0
/// above 27 and to 2 below −27. NaN propagates.
///
/// # Example
///
/// ```
/// use incgamma::special::erfc;
///
/// assert_eq!(erfc(0.0_f64), 1.0);
/// assert!((erfc(3.0_f64) - 2.209049699858544e-5).abs() < 1e-17);
/// ```
pub fn erfc<T: ScalarLane>(x: T) -> T {
    if !x.cmp_eq(x) {
        return x;
    }
    let ax = x.abs();
    if ax > T::from_f64(27.0) {
        return if x > T::zero() {
            T::zero()
        } else {
            T::from_f64(2.0)
        };
    }
    if ax < T::from_f64(TAYLOR_LIMIT) {
        return T::one() - erf_taylor(x);
    }
    let (p, q) = half_pq(x * x);
    if x > T::zero() {
        q
    } else {
        T::one() + p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        let cases = [
            (0.1_f64, 0.1124629160182849),
            (0.5, 0.5204998778130465),
            (1.0, 0.8427007929497149),
            (2.0, 0.9953222650189527),
        ];
        for (x, e) in cases {
            assert!((erf(x) - e).abs() < 4e-15, "erf({x})={}", erf(x));
            assert!((erfc(x) - (1.0 - e)).abs() < 4e-15);
        }
    }

    #[test]
    fn far_tail_relative_accuracy() {
        // erfc(5) = 1.5374597944280349e-12
        let e = 1.5374597944280349e-12_f64;
        assert!(((erfc(5.0_f64) - e) / e).abs() < 1e-12);
    }

    #[test]
    fn saturation_and_nan() {
        assert_eq!(erf(7.0_f64), 1.0);
        assert_eq!(erf(-7.0_f64), -1.0);
        assert_eq!(erfc(30.0_f64), 0.0);
        assert_eq!(erfc(-30.0_f64), 2.0);
        assert!(erf(f64::NAN).is_nan());
        assert!(erfc(f64::NAN).is_nan());
    }

    #[test]
    fn single_precision() {
        assert!((erf(1.0_f32) - 0.842_700_8).abs() < 1e-6);
        assert!((erfc(2.0_f32) - 0.004_677_735).abs() < 1e-7);
    }
}
