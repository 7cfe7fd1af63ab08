//! Continued fraction for the upper incomplete gamma function.
//!
//! Legendre's fraction
//!
//! Γ(a,x) = x^a e^{−x} · 1/(x+1−a− 1·(1−a)/(x+3−a− 2·(2−a)/(x+5−a− ⋯)))
//!
//! evaluated with the modified Lentz algorithm. Converges quickly for
//! x > a + 1.

use super::poly::lit;
use crate::{Lane, LaneMask};

/// Upper incomplete gamma by continued fraction.
///
/// Returns Γ(a,x), or Q(a,x) when `NORMALIZE` is set, on lanes where
/// `active & a > 0 & x ≥ 0`; every other lane is `0`. A lane freezes its
/// value once a Lentz update differs from one by at most ε. At most
/// `MAX_TERMS − 1` updates are performed.
pub(crate) fn upper_contfrac<L: Lane, const MAX_TERMS: usize, const NORMALIZE: bool>(
    a: L,
    x: L,
    active: L::Mask,
) -> L {
    let zero = L::zero();
    let one = L::one();
    let mask = active & x.cmp_ge(zero) & a.cmp_gt(zero);
    if mask.none() {
        return zero;
    }

    let two = lit::<L>(2.0);
    let eps = L::epsilon();
    let tiny = L::min_positive() / eps;

    let mut b = x + one - a;
    let mut c = tiny.recip();
    let mut d = b.recip();
    let mut frac = d;
    let mut converged = !mask;

    for k in 1..MAX_TERMS {
        if converged.all() {
            break;
        }
        let kf = lit::<L>(k as f64);
        let an = kf * (a - kf);
        b += two;

        d = b + an * d;
        d = L::select(d.abs().cmp_lt(tiny), tiny, d);
        c = b + an / c;
        c = L::select(c.abs().cmp_lt(tiny), tiny, c);
        d = d.recip();

        let delta = c * d;
        frac = L::select(converged, frac, frac * delta);
        converged |= (delta - one).abs().cmp_le(eps);
    }

    let norm = if NORMALIZE { a.lgamma() } else { zero };
    let prefactor = (a * x.ln() - x - norm).exp();
    L::select(mask, prefactor * frac, zero)
}
