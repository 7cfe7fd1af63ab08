//! Incomplete gamma functions γ(a,x), Γ(a,x), P(a,x) and Q(a,x).
//!
//! All entry points are generic over [`Lane`]. Each lane is classified
//! independently; the three evaluators only run when at least one lane needs
//! them, and only on the lanes that do.

use super::contfrac::upper_contfrac;
use super::series::lower_series;
use super::temme;
use super::SpecialError;
use crate::{Lane, LaneMask, ScalarLane};

/// Default term budget for the series and continued fraction.
pub const DEFAULT_MAX_TERMS: usize = 100;

/// Evaluate both tails on every lane.
///
/// Lanes with `a ≤ 0`, `x < 0` or a NaN input give `(0, 0)`. Lanes with
/// `x = +∞` give `(total, 0)`, where `total` is 1 when normalizing and Γ(a)
/// otherwise. The remaining lanes take the first matching regime:
///
/// 1. Temme's expansion ([`temme::is_large`]),
/// 2. series when `x ≤ a + 1`,
/// 3. continued fraction.
///
/// Each regime computes its native tail and the other one is `total − native`.
fn dispatch<L: Lane, const MAX_TERMS: usize, const NORMALIZE: bool>(a: L, x: L) -> (L, L) {
    let zero = L::zero();
    let valid = a.cmp_gt(zero) & x.cmp_ge(zero);
    if valid.none() {
        return (zero, zero);
    }

    let total = if NORMALIZE {
        L::one()
    } else {
        L::select(valid, a.tgamma(), zero)
    };

    let at_infinity = valid & x.cmp_eq(L::infinity());
    let mut lower = L::select(at_infinity, total, zero);
    let mut upper = zero;
    let mut todo = valid & !at_infinity;
    if todo.none() {
        return (lower, upper);
    }

    let large = todo & temme::is_large(a, x);
    if large.any() {
        todo &= !large;
        let (p, q) = temme::regularized_pq(a, x);
        let (p, q) = if NORMALIZE { (p, q) } else { (p * total, q * total) };
        lower = L::select(large, p, lower);
        upper = L::select(large, q, upper);
        if todo.none() {
            return (lower, upper);
        }
    }

    let by_series = todo & x.cmp_le(a + L::one());
    if by_series.any() {
        todo &= !by_series;
        let g = lower_series::<L, MAX_TERMS, NORMALIZE>(a, x, by_series);
        lower = L::select(by_series, g, lower);
        upper = L::select(by_series, total - g, upper);
        if todo.none() {
            return (lower, upper);
        }
    }

    let g = upper_contfrac::<L, MAX_TERMS, NORMALIZE>(a, x, todo);
    lower = L::select(todo, total - g, lower);
    upper = L::select(todo, g, upper);
    (lower, upper)
}

/// Lower incomplete gamma function γ(a,x) = ∫₀ˣ t^{a−1} e^{−t} dt.
///
/// Lanes with a ≤ 0 or x < 0 yield 0.
///
/// # Example
///
/// ```
/// use incgamma::special::tgamma_lower;
///
/// // γ(2, x) = 1 − (1 + x) e^{−x}
/// let x = 3.0_f64;
/// let expected = 1.0 - (1.0 + x) * (-x).exp();
/// assert!((tgamma_lower(2.0, x) - expected).abs() < 1e-14);
/// ```
#[inline]
pub fn tgamma_lower<L: Lane>(a: L, x: L) -> L {
    tgamma_lower_with::<L, DEFAULT_MAX_TERMS>(a, x)
}

/// [`tgamma_lower`] with an explicit term budget.
#[inline]
pub fn tgamma_lower_with<L: Lane, const MAX_TERMS: usize>(a: L, x: L) -> L {
    dispatch::<L, MAX_TERMS, false>(a, x).0
}

/// Upper incomplete gamma function Γ(a,x) = ∫ₓ^∞ t^{a−1} e^{−t} dt.
///
/// Lanes with a ≤ 0 or x < 0 yield 0.
///
/// # Example
///
/// ```
/// use incgamma::special::tgamma;
///
/// // Γ(a, 0) = Γ(a)
/// assert!((tgamma(4.0_f64, 0.0) - 6.0).abs() < 1e-13);
/// ```
#[inline]
pub fn tgamma<L: Lane>(a: L, x: L) -> L {
    tgamma_with::<L, DEFAULT_MAX_TERMS>(a, x)
}

/// [`tgamma`] with an explicit term budget.
#[inline]
pub fn tgamma_with<L: Lane, const MAX_TERMS: usize>(a: L, x: L) -> L {
    dispatch::<L, MAX_TERMS, false>(a, x).1
}

/// Regularized lower incomplete gamma function P(a,x) = γ(a,x)/Γ(a).
///
/// Lanes with a ≤ 0 or x < 0 yield 0; `x = +∞` yields 1.
///
/// # Example
///
/// ```
/// use incgamma::special::gamma_p;
///
/// assert_eq!(gamma_p(2.0_f64, 0.0), 0.0);
/// assert_eq!(gamma_p(2.0_f64, f64::INFINITY), 1.0);
/// assert_eq!(gamma_p(-1.0_f64, 1.0), 0.0);
/// ```
#[inline]
pub fn gamma_p<L: Lane>(a: L, x: L) -> L {
    gamma_p_with::<L, DEFAULT_MAX_TERMS>(a, x)
}

/// [`gamma_p`] with an explicit term budget.
#[inline]
pub fn gamma_p_with<L: Lane, const MAX_TERMS: usize>(a: L, x: L) -> L {
    dispatch::<L, MAX_TERMS, true>(a, x).0
}

/// Regularized upper incomplete gamma function Q(a,x) = Γ(a,x)/Γ(a).
///
/// Lanes with a ≤ 0 or x < 0 yield 0 (not 1); `x = 0` yields 1.
///
/// # Example
///
/// ```
/// use incgamma::special::gamma_q;
///
/// // Q(1, x) = e^{−x}
/// assert!((gamma_q(1.0_f64, 10.0) - (-10.0_f64).exp()).abs() < 1e-18);
/// ```
#[inline]
pub fn gamma_q<L: Lane>(a: L, x: L) -> L {
    gamma_q_with::<L, DEFAULT_MAX_TERMS>(a, x)
}

/// [`gamma_q`] with an explicit term budget.
#[inline]
pub fn gamma_q_with<L: Lane, const MAX_TERMS: usize>(a: L, x: L) -> L {
    dispatch::<L, MAX_TERMS, true>(a, x).1
}

/// `(P(a,x), Q(a,x))` from a single evaluation.
///
/// On valid lanes `P + Q = 1` up to rounding in the subtraction.
#[inline]
pub fn gamma_pq<L: Lane>(a: L, x: L) -> (L, L) {
    gamma_pq_with::<L, DEFAULT_MAX_TERMS>(a, x)
}

/// [`gamma_pq`] with an explicit term budget.
#[inline]
pub fn gamma_pq_with<L: Lane, const MAX_TERMS: usize>(a: L, x: L) -> (L, L) {
    dispatch::<L, MAX_TERMS, true>(a, x)
}

#[inline]
fn check_domain<T: ScalarLane>(a: T, x: T) -> Result<(), SpecialError> {
    if a.cmp_gt(T::zero()) && x.cmp_ge(T::zero()) {
        Ok(())
    } else {
        Err(SpecialError::DomainError)
    }
}

/// Checked scalar P(a,x).
///
/// Unlike [`gamma_p`], out-of-domain input is reported instead of mapped
/// to 0.
///
/// # Errors
///
/// [`SpecialError::DomainError`] if `a ≤ 0`, `x < 0` or either is NaN.
///
/// # Example
///
/// ```
/// use incgamma::special::{gamma_inc, SpecialError};
///
/// // P(1, x) = 1 − e^{−x}
/// let x = 1.5_f64;
/// let expected = 1.0 - (-x).exp();
/// assert!((gamma_inc(1.0, x).unwrap() - expected).abs() < 1e-14);
///
/// assert_eq!(gamma_inc(0.0_f64, 1.0), Err(SpecialError::DomainError));
/// ```
pub fn gamma_inc<T: ScalarLane>(a: T, x: T) -> Result<T, SpecialError> {
    check_domain(a, x)?;
    Ok(gamma_p(a, x))
}

/// Checked scalar Q(a,x).
///
/// # Errors
///
/// [`SpecialError::DomainError`] if `a ≤ 0`, `x < 0` or either is NaN.
///
/// # Example
///
/// ```
/// use incgamma::special::gamma_inc_upper;
///
/// // Q(a, 0) = 1 for any a > 0
/// assert_eq!(gamma_inc_upper(2.0_f64, 0.0).unwrap(), 1.0);
/// ```
pub fn gamma_inc_upper<T: ScalarLane>(a: T, x: T) -> Result<T, SpecialError> {
    check_domain(a, x)?;
    Ok(gamma_q(a, x))
}
