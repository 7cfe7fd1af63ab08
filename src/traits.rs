use core::fmt::Debug;
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, Div, Mul, MulAssign, Neg, Not, Sub,
    SubAssign,
};
use num_traits::Float;

/// Trait for real floating-point scalars (`f32`, `f64`).
///
/// Blanket-implemented for all types satisfying the bounds. This is the
/// element type that a [`Lane`] is built from.
pub trait FloatScalar: Float + Debug + 'static {}

impl<T: Float + Debug + 'static> FloatScalar for T {}

/// Per-lane boolean produced by [`Lane`] comparisons.
///
/// Used both to pick between two computed values ([`Lane::select`]) and to
/// track which lanes of an iteration have already converged.
pub trait LaneMask:
    Copy
    + Debug
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
    + BitAndAssign
    + BitOrAssign
{
    /// Mask with every lane set to `value`.
    fn splat(value: bool) -> Self;

    /// True if at least one lane is set.
    fn any(self) -> bool;

    /// True if every lane is set.
    fn all(self) -> bool;

    /// True if no lane is set.
    #[inline]
    fn none(self) -> bool {
        !self.any()
    }
}

impl LaneMask for bool {
    #[inline]
    fn splat(value: bool) -> Self {
        value
    }

    #[inline]
    fn any(self) -> bool {
        self
    }

    #[inline]
    fn all(self) -> bool {
        self
    }
}

/// Numeric lane contract.
///
/// A `Lane` is either a single scalar or a fixed number of independent
/// values that all undergo the same arithmetic. Comparisons return a
/// [`LaneMask`] instead of a `bool`, and conditional logic is written as
/// "compute both, then [`select`](Lane::select)", so the same generic code
/// runs on `f64` and on [`Packet<f64, 8>`](crate::Packet).
///
/// The comparison methods carry a `cmp_` prefix so they never shadow
/// [`PartialOrd`] on scalar types.
pub trait Lane:
    Copy
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
{
    /// Element type of a single lane.
    type Scalar: FloatScalar;
    /// Mask type returned by comparisons.
    type Mask: LaneMask;

    /// Number of independent lanes.
    const LANES: usize;
    /// Binary digits in the significand of [`Self::Scalar`] (24 for `f32`,
    /// 53 for `f64`). Selects precision-dependent coefficient sets.
    const MANTISSA_DIGITS: u32;

    /// Broadcast a scalar to every lane.
    fn splat(value: Self::Scalar) -> Self;

    /// Broadcast an `f64` constant to every lane (rounded to `Self::Scalar`).
    fn from_f64(value: f64) -> Self;

    #[inline]
    fn zero() -> Self {
        Self::from_f64(0.0)
    }

    #[inline]
    fn one() -> Self {
        Self::from_f64(1.0)
    }

    /// Machine epsilon of the lane element type.
    #[inline]
    fn epsilon() -> Self {
        Self::splat(<Self::Scalar as Float>::epsilon())
    }

    /// Smallest positive normal value of the lane element type.
    #[inline]
    fn min_positive() -> Self {
        Self::splat(<Self::Scalar as Float>::min_positive_value())
    }

    #[inline]
    fn infinity() -> Self {
        Self::splat(<Self::Scalar as Float>::infinity())
    }

    /// Per-lane `if mask { if_true } else { if_false }`.
    fn select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self;

    fn cmp_lt(self, rhs: Self) -> Self::Mask;
    fn cmp_le(self, rhs: Self) -> Self::Mask;
    fn cmp_gt(self, rhs: Self) -> Self::Mask;
    fn cmp_ge(self, rhs: Self) -> Self::Mask;
    fn cmp_eq(self, rhs: Self) -> Self::Mask;

    fn abs(self) -> Self;
    /// `+1` for `+0.0` and positive values, `-1` for `-0.0` and negative values.
    fn signum(self) -> Self;
    fn min(self, rhs: Self) -> Self;
    fn max(self, rhs: Self) -> Self;

    #[inline]
    fn recip(self) -> Self {
        Self::one() / self
    }

    fn ln(self) -> Self;
    fn exp(self) -> Self;
    fn sqrt(self) -> Self;
    fn powf(self, n: Self) -> Self;

    /// Complementary error function.
    fn erfc(self) -> Self;
    /// Ordinary (complete) gamma function Γ(x).
    fn tgamma(self) -> Self;
    /// ln Γ(x).
    fn lgamma(self) -> Self;
}

/// A scalar float that is its own single-lane [`Lane`] (`f32`, `f64`).
///
/// Used as the element bound of [`Packet`](crate::Packet) and by the scalar
/// convenience APIs (checked functions, distributions).
pub trait ScalarLane: Lane<Scalar = Self, Mask = bool> + PartialOrd {}

impl<T: Lane<Scalar = T, Mask = bool> + PartialOrd> ScalarLane for T {}

// Scalar floats delegate straight to `Float` and the scalar special functions.
macro_rules! impl_lane_scalar_real {
    ($($t:ty),*) => {
        $(
            impl Lane for $t {
                type Scalar = $t;
                type Mask = bool;

                const LANES: usize = 1;
                const MANTISSA_DIGITS: u32 = <$t>::MANTISSA_DIGITS;

                #[inline] fn splat(value: $t) -> $t { value }
                #[inline] fn from_f64(value: f64) -> $t { value as $t }

                #[inline]
                fn select(mask: bool, if_true: $t, if_false: $t) -> $t {
                    if mask { if_true } else { if_false }
                }

                #[inline] fn cmp_lt(self, rhs: $t) -> bool { self < rhs }
                #[inline] fn cmp_le(self, rhs: $t) -> bool { self <= rhs }
                #[inline] fn cmp_gt(self, rhs: $t) -> bool { self > rhs }
                #[inline] fn cmp_ge(self, rhs: $t) -> bool { self >= rhs }
                #[inline] fn cmp_eq(self, rhs: $t) -> bool { self == rhs }

                #[inline] fn abs(self) -> $t { Float::abs(self) }
                #[inline] fn signum(self) -> $t { Float::signum(self) }
                #[inline] fn min(self, rhs: $t) -> $t { Float::min(self, rhs) }
                #[inline] fn max(self, rhs: $t) -> $t { Float::max(self, rhs) }
                #[inline] fn recip(self) -> $t { Float::recip(self) }
                #[inline] fn ln(self) -> $t { Float::ln(self) }
                #[inline] fn exp(self) -> $t { Float::exp(self) }
                #[inline] fn sqrt(self) -> $t { Float::sqrt(self) }
                #[inline] fn powf(self, n: $t) -> $t { Float::powf(self, n) }

                #[inline] fn erfc(self) -> $t { crate::special::erfc(self) }
                #[inline] fn tgamma(self) -> $t { crate::special::gamma(self) }
                #[inline] fn lgamma(self) -> $t { crate::special::lgamma(self) }
            }
        )*
    };
}

impl_lane_scalar_real!(f32, f64);
