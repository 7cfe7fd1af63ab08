//! Initial guesses for the inverse incomplete gamma function.
//!
//! DiDonato & Morris, "Computation of the Incomplete Gamma Function Ratios
//! and their Inverse", ACM TOMS 12 (1986). Equation numbers below refer to
//! that paper. Every helper takes the lane mask it is responsible for and
//! returns 0 on all other lanes (or when no lane is set).

use super::poly::{horner, horner_lanes, lit};
use crate::{Lane, LaneMask};

const EULER_GAMMA: f64 = 0.577_215_664_901_532_860_6;

/// a < 1, b = qΓ(a) large.
fn eq21<L: Lane>(a: L, p: L, q: L, gamma: L, b: L, todo: L::Mask) -> L {
    if todo.none() {
        return L::zero();
    }
    let one = L::one();
    let mut u = L::zero();
    let direct = todo & (b * q).cmp_gt(lit(1e-8)) & q.cmp_gt(lit(1e-5));
    let rest = todo & !direct;
    if direct.any() {
        u = L::select(direct, (p * gamma * a).powf(a.recip()), u);
    }
    if rest.any() {
        u = L::select(rest, (-q / a - lit(EULER_GAMMA)).exp(), u);
    }
    u / (one - u / (a + one))
}

/// a < 0.3, 0.35 ≤ b ≤ 0.6.
fn eq22<L: Lane>(b: L) -> L {
    let t = (-b - lit(EULER_GAMMA)).exp();
    let u = t * t.exp();
    t * u.exp()
}

/// 0.15 ≤ b < 0.35, or a ≥ 0.3 and b < 0.45.
fn eq23<L: Lane>(a: L, y: L) -> L {
    let one = L::one();
    let u = y - (one - a) * y.ln();
    y - (one - a) * u.ln() - (one + (one - a) / (one + u)).ln()
}

/// 0.1 < b < 0.15.
fn eq24<L: Lane>(a: L, y: L) -> L {
    let one = L::one();
    let two = lit::<L>(2.0);
    let three = lit::<L>(3.0);
    let u = y - (one - a) * y.ln();
    let num = horner_lanes(u, &[(two - a) * (three - a), two * (three - a), one]);
    let den = horner_lanes(u, &[two, lit::<L>(5.0) - a, one]);
    y - (one - a) * u.ln() - (num / den).ln()
}

/// Asymptotic series in 1/y for very small b (or huge −ln b when a > 1).
fn eq25<L: Lane>(a: L, y: L) -> L {
    let one = L::one();
    let a2 = a * a;
    let a3 = a2 * a;
    let am1 = a - one;

    let c1 = am1 * y.ln();
    let c2 = am1 * (one + c1);
    let c3 = am1
        * horner_lanes(
            c1,
            &[lit::<L>(0.5) * (lit::<L>(3.0) * a - lit(5.0)), a - lit(2.0), lit(-0.5)],
        );
    let c4 = am1
        * horner_lanes(
            c1,
            &[
                (lit::<L>(11.0) * a2 - lit::<L>(46.0) * a + lit(47.0)) / lit(6.0),
                a2 - lit::<L>(6.0) * a + lit(7.0),
                lit::<L>(-0.5) * (lit::<L>(3.0) * a - lit(5.0)),
                lit(1.0 / 3.0),
            ],
        );
    let c5 = am1
        * horner_lanes(
            c1,
            &[
                (lit::<L>(25.0) * a3 - lit::<L>(195.0) * a2 + lit::<L>(477.0) * a - lit(379.0))
                    / lit(12.0),
                (lit::<L>(2.0) * a3 - lit::<L>(25.0) * a2 + lit::<L>(72.0) * a - lit(61.0))
                    * lit(0.5),
                lit::<L>(-3.0) * a2 + lit::<L>(13.0) * a - lit(13.0),
                (lit::<L>(11.0) * a - lit(17.0)) / lit(6.0),
                lit(-0.25),
            ],
        );

    y + horner_lanes(y.recip(), &[c1, c2, c3, c4, c5])
}

/// Normal deviate s with Q(a,x) ≈ ½ erfc(s/√2), minimax rational fit.
fn eq32<L: Lane>(p: L, q: L) -> L {
    let lower = p.cmp_lt(lit(0.5));
    let t = (lit::<L>(-2.0) * L::select(lower, p, q).ln()).sqrt();
    let num = horner(
        t,
        &[3.31125922108741, 11.6616720288968, 4.28342155967104, 0.213623493715853],
    );
    let den = horner(
        t,
        &[1.0, 6.61053765625462, 6.40691597760039, 1.27364489782223, 0.3611708101884203e-1],
    );
    let s = t - num / den;
    L::select(lower, -s, s)
}

/// Six-term Cornish–Fisher expansion of x around the normal deviate.
fn eq31<L: Lane>(a: L, p: L, q: L) -> L {
    let ra = a.sqrt();
    let s = eq32(p, q);
    let one_third = lit::<L>(1.0 / 3.0);
    horner_lanes(
        s,
        &[
            a - one_third + lit::<L>(16.0) / (lit::<L>(810.0) * a),
            ra - lit::<L>(7.0) / (lit::<L>(36.0) * ra)
                - lit::<L>(433.0) / (lit::<L>(38880.0) * a * ra),
            one_third - lit::<L>(7.0) / (lit::<L>(810.0) * a),
            (lit::<L>(36.0) * ra).recip() + lit::<L>(256.0) / (lit::<L>(38880.0) * a * ra),
            lit::<L>(-3.0) / (lit::<L>(810.0) * a),
            lit::<L>(9.0) / (lit::<L>(38880.0) * a * ra),
        ],
    )
}

/// Two fixed-point steps for p > ½ starting from the Cornish–Fisher guess w.
fn eq33<L: Lane>(a: L, y: L, w: L) -> L {
    let one = L::one();
    let u = y + (a - one) * w.ln() - (one + (one - a) / (one + w)).ln();
    y + (a - one) * u.ln() - (one + (one - a) / (one + u)).ln()
}

/// S_N(x) = 1 + Σ_{i=1}^{N} x^i / ((a+1)⋯(a+i)), truncated once a term
/// drops to `tolerance` or below.
fn partial_sum<L: Lane>(x: L, a: L, terms: usize, tolerance: L) -> L {
    let zero = L::zero();
    let mut sum = L::one();
    let mut partial = L::one();
    let mut live = partial.cmp_gt(tolerance);
    for i in 1..=terms {
        if live.none() {
            break;
        }
        partial *= L::select(live, x / (a + lit(i as f64)), zero);
        sum += partial;
        live = partial.cmp_gt(tolerance);
    }
    sum
}

/// F_N(x) = exp((v + x − ln S_N(x)) / a).
#[inline]
fn fixed_point<L: Lane>(x: L, a: L, v: L, terms: usize) -> L {
    ((v + x - partial_sum(x, a, terms, L::zero()).ln()) / a).exp()
}

/// a > 1, p < ½, w < 0.15(a+1): four fixed-point refinements.
fn eq35<L: Lane>(a: L, p: L, w: L) -> L {
    let v = p.ln() + (a + L::one()).lgamma();
    let u1 = fixed_point(w, a, v, 0);
    let u2 = fixed_point(u1, a, v, 1);
    let u3 = fixed_point(u2, a, v, 2);
    fixed_point(u3, a, v, 3)
}

/// a > 1, p < ½, 0.01(a+1) ≤ z ≤ 0.7(a+1).
fn eq36<L: Lane>(a: L, p: L, z: L) -> L {
    let one = L::one();
    let ln_sn = partial_sum(z, a, 100, lit(1e-4)).ln();
    let v = p.ln() + (a + one).lgamma();
    let zbar = ((v + z - ln_sn) / a).exp();
    zbar * (one - (a * zbar.ln() - z - v + ln_sn) / (a - zbar))
}

fn a_less_one<L: Lane>(a: L, p: L, q: L, mut todo: L::Mask) -> L {
    if todo.none() {
        return L::zero();
    }
    let gamma = a.tgamma();
    let b = q * gamma;

    let mask = todo & (b.cmp_gt(lit(0.6)) | (b.cmp_ge(lit(0.45)) & a.cmp_ge(lit(0.3))));
    todo &= !mask;
    let mut x = L::select(mask, eq21(a, p, q, gamma, b, mask), L::zero());
    if todo.none() {
        return x;
    }

    let mask = todo & a.cmp_lt(lit(0.3)) & b.cmp_ge(lit(0.35));
    todo &= !mask;
    if mask.any() {
        x = L::select(mask, eq22(b), x);
    }
    if todo.none() {
        return x;
    }

    let y = -b.ln();
    let mask = todo & (b.cmp_ge(lit(0.15)) | a.cmp_ge(lit(0.3)));
    todo &= !mask;
    if mask.any() {
        x = L::select(mask, eq23(a, y), x);
    }
    if todo.none() {
        return x;
    }

    let mask = todo & b.cmp_gt(lit(0.1));
    todo &= !mask;
    if mask.any() {
        x = L::select(mask, eq24(a, y), x);
    }
    if todo.none() {
        return x;
    }

    L::select(todo, eq25(a, y), x)
}

fn p_greater_half<L: Lane>(a: L, q: L, w: L, mut todo: L::Mask) -> L {
    if todo.none() {
        return L::zero();
    }

    let mask = todo & w.cmp_lt(lit::<L>(3.0) * a);
    todo &= !mask;
    let mut x = L::select(mask, w, L::zero());
    if todo.none() {
        return x;
    }

    let d = (a * (a - L::one())).max(lit(2.0));
    let lb = q.ln() + a.lgamma();
    let mask = todo & lb.cmp_le(-d * lit(2.3));
    todo &= !mask;
    if mask.any() {
        x = L::select(mask, eq25(a, -lb), x);
    }
    if todo.none() {
        return x;
    }

    L::select(todo, eq33(a, -lb, w), x)
}

fn p_less_half<L: Lane>(a: L, p: L, w: L, mut todo: L::Mask, converged: &mut L::Mask) -> L {
    if todo.none() {
        return L::zero();
    }
    let ap1 = a + L::one();

    let mask = todo & w.cmp_lt(lit::<L>(0.15) * ap1);
    let mut z = w;
    if mask.any() {
        z = L::select(mask, eq35(a, p, w), z);
    }

    let mask = todo & (z.cmp_lt(lit::<L>(0.01) * ap1) | z.cmp_gt(lit::<L>(0.7) * ap1));
    todo &= !mask;
    *converged |= mask & z.cmp_le(lit::<L>(0.002) * ap1);
    let x = L::select(mask, z, L::zero());
    if todo.none() {
        return x;
    }

    L::select(todo, eq36(a, p, z), x)
}

fn a_greater_one<L: Lane>(
    a: L,
    p: L,
    q: L,
    mut todo: L::Mask,
    converged: &mut L::Mask,
) -> L {
    if todo.none() {
        return L::zero();
    }
    let w = eq31(a, p, q);

    let mask = todo & a.cmp_ge(lit(500.0)) & (L::one() - w / a).abs().cmp_lt(lit(1e-6));
    todo &= !mask;
    *converged |= mask;
    let mut x = L::select(mask, w, L::zero());
    if todo.none() {
        return x;
    }

    let mask = todo & p.cmp_gt(lit(0.5));
    todo &= !mask;
    if mask.any() {
        x = L::select(mask, p_greater_half(a, q, w, mask), x);
    }
    if todo.none() {
        return x;
    }

    L::select(todo, p_less_half(a, p, w, todo, converged), x)
}

/// Starting point for Newton refinement on the `active` lanes.
///
/// Sets `converged` on lanes whose estimate is already accurate (a = 1 is
/// exact; some large-`a` and far-tail cases are good to about ten digits).
/// Inactive lanes come back as 0.
pub(crate) fn estimate<L: Lane>(
    a: L,
    p: L,
    q: L,
    active: L::Mask,
    converged: &mut L::Mask,
) -> L {
    let one = L::one();
    let mut x = L::zero();

    let unit = active & a.cmp_eq(one);
    *converged |= unit;
    if unit.any() {
        x = L::select(unit, -q.ln(), x);
    }

    let below = active & a.cmp_lt(one);
    if below.any() {
        x = L::select(below, a_less_one(a, p, q, below), x);
    }

    let above = active & a.cmp_gt(one);
    if above.any() {
        x = L::select(above, a_greater_one(a, p, q, above, converged), x);
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::special::gamma_p;

    fn rough(a: f64, p: f64) -> f64 {
        let mut converged = false;
        estimate(a, p, 1.0 - p, true, &mut converged)
    }

    #[test]
    fn exponential_is_exact() {
        let mut converged = false;
        let x = estimate(1.0_f64, 0.75, 0.25, true, &mut converged);
        assert!(converged);
        assert!((x - 4.0_f64.ln()).abs() < 1e-15);
    }

    #[test]
    fn estimates_land_near_the_root() {
        // every branch should get P within a few percent of the target
        let shapes = [0.1_f64, 0.25, 0.5, 0.9, 1.5, 3.0, 10.0, 50.0, 700.0];
        let targets = [1e-6_f64, 0.01, 0.2, 0.5, 0.8, 0.99];
        for &a in &shapes {
            for &p in &targets {
                let x = rough(a, p);
                assert!(x > 0.0 && x.is_finite(), "a={a} p={p}: x={x}");
                let got = gamma_p(a, x);
                assert!((got - p).abs() < 0.05 * p.max(1.0 - p), "a={a} p={p}: P={got}");
            }
        }
    }

    #[test]
    fn inactive_lanes_are_zero() {
        let mut converged = false;
        assert_eq!(estimate(3.0_f64, 0.5, 0.5, false, &mut converged), 0.0);
        assert!(!converged);
    }

    #[test]
    fn cornish_fisher_median() {
        // s = 0 at p = ½, so w = a − 1/3 + 16/(810a)
        let a = 100.0_f64;
        let w = eq31(a, 0.5, 0.5);
        assert!((w - (a - 1.0 / 3.0 + 16.0 / 81000.0)).abs() < 1e-3);
    }
}
