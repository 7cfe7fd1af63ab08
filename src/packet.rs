//! Fixed-width lane vectors.
//!
//! [`Packet<T, W>`] holds `W` independent values of a scalar float in a
//! stack-allocated `[T; W]` and implements [`Lane`] elementwise, with
//! [`PacketMask<W>`] as its mask type. Arithmetic is written as straight
//! loops over the array so the compiler can vectorize it; transcendental
//! functions are applied lane by lane through the scalar implementation.
//!
//! # Example
//!
//! ```
//! use incgamma::{Lane, LaneMask, Packet};
//!
//! let a = Packet::new([1.0_f64, 2.0, -3.0, 4.0]);
//! let b = Packet::splat(2.0);
//! let m = a.cmp_lt(b);
//! assert!(m.any() && !m.all());
//!
//! // Replace negative lanes with zero.
//! let c = Packet::select(a.cmp_lt(Packet::zero()), Packet::zero(), a * b);
//! assert_eq!(c.to_array(), [2.0, 4.0, 0.0, 8.0]);
//! ```

use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, Div, DivAssign, Index, IndexMut, Mul,
    MulAssign, Neg, Not, Sub, SubAssign,
};

use crate::traits::{FloatScalar, Lane, LaneMask, ScalarLane};

/// `W` independent floating-point lanes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Packet<T, const W: usize> {
    pub(crate) data: [T; W],
}

/// Per-lane boolean mask for a [`Packet`] of width `W`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketMask<const W: usize> {
    pub(crate) data: [bool; W],
}

impl<T: Copy, const W: usize> Packet<T, W> {
    /// Create a packet from an array of lanes.
    #[inline]
    pub const fn new(data: [T; W]) -> Self {
        Self { data }
    }

    /// Build a packet by evaluating `f(lane_index)` for every lane.
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self {
            data: core::array::from_fn(f),
        }
    }

    /// Load up to `W` values from `src`; lanes past `src.len()` are set to `pad`.
    #[inline]
    pub fn from_slice_padded(src: &[T], pad: T) -> Self {
        Self::from_fn(|i| if i < src.len() { src[i] } else { pad })
    }

    /// Store the first `min(W, dst.len())` lanes into `dst`.
    #[inline]
    pub fn write_to_slice(&self, dst: &mut [T]) {
        let n = dst.len().min(W);
        dst[..n].copy_from_slice(&self.data[..n]);
    }

    /// Lanes as an array.
    #[inline]
    pub const fn to_array(self) -> [T; W] {
        self.data
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Apply `f` to every lane.
    #[inline]
    pub fn map(self, mut f: impl FnMut(T) -> T) -> Self {
        Self::from_fn(|i| f(self.data[i]))
    }

    /// Combine two packets lane by lane.
    #[inline]
    pub fn zip_map(self, rhs: Self, mut f: impl FnMut(T, T) -> T) -> Self {
        Self::from_fn(|i| f(self.data[i], rhs.data[i]))
    }

    /// Number of lanes.
    #[inline]
    pub const fn lanes(&self) -> usize {
        W
    }
}

impl<T, const W: usize> Index<usize> for Packet<T, W> {
    type Output = T;

    #[inline]
    fn index(&self, lane: usize) -> &T {
        &self.data[lane]
    }
}

impl<T, const W: usize> IndexMut<usize> for Packet<T, W> {
    #[inline]
    fn index_mut(&mut self, lane: usize) -> &mut T {
        &mut self.data[lane]
    }
}

impl<T: Copy, const W: usize> From<[T; W]> for Packet<T, W> {
    #[inline]
    fn from(data: [T; W]) -> Self {
        Self::new(data)
    }
}

// ── Element-wise arithmetic ─────────────────────────────────────────

macro_rules! impl_packet_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<T: ScalarLane, const W: usize> $Op for Packet<T, W> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self {
                let mut out = self;
                for i in 0..W {
                    out.data[i] = $Op::$op(self.data[i], rhs.data[i]);
                }
                out
            }
        }

        impl<T: ScalarLane, const W: usize> $OpAssign for Packet<T, W> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                for i in 0..W {
                    self.data[i] = $Op::$op(self.data[i], rhs.data[i]);
                }
            }
        }
    };
}

impl_packet_binop!(Add, add, AddAssign, add_assign);
impl_packet_binop!(Sub, sub, SubAssign, sub_assign);
impl_packet_binop!(Mul, mul, MulAssign, mul_assign);
impl_packet_binop!(Div, div, DivAssign, div_assign);

impl<T: ScalarLane, const W: usize> Neg for Packet<T, W> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

// ── Masks ───────────────────────────────────────────────────────────

impl<const W: usize> PacketMask<W> {
    #[inline]
    pub const fn new(data: [bool; W]) -> Self {
        Self { data }
    }

    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> bool) -> Self {
        Self {
            data: core::array::from_fn(f),
        }
    }

    #[inline]
    pub const fn to_array(self) -> [bool; W] {
        self.data
    }

    /// Number of set lanes.
    #[inline]
    pub fn count(self) -> usize {
        self.data.iter().filter(|&&b| b).count()
    }
}

impl<const W: usize> Index<usize> for PacketMask<W> {
    type Output = bool;

    #[inline]
    fn index(&self, lane: usize) -> &bool {
        &self.data[lane]
    }
}

macro_rules! impl_mask_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<const W: usize> $Op for PacketMask<W> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self {
                Self::from_fn(|i| $Op::$op(self.data[i], rhs.data[i]))
            }
        }

        impl<const W: usize> $OpAssign for PacketMask<W> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                for i in 0..W {
                    self.data[i] = $Op::$op(self.data[i], rhs.data[i]);
                }
            }
        }
    };
}

impl_mask_binop!(BitAnd, bitand, BitAndAssign, bitand_assign);
impl_mask_binop!(BitOr, bitor, BitOrAssign, bitor_assign);

impl<const W: usize> Not for PacketMask<W> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self::from_fn(|i| !self.data[i])
    }
}

impl<const W: usize> LaneMask for PacketMask<W> {
    #[inline]
    fn splat(value: bool) -> Self {
        Self { data: [value; W] }
    }

    #[inline]
    fn any(self) -> bool {
        self.data.iter().any(|&b| b)
    }

    #[inline]
    fn all(self) -> bool {
        self.data.iter().all(|&b| b)
    }
}

// ── Lane contract ───────────────────────────────────────────────────

macro_rules! lanewise_cmp {
    ($name:ident) => {
        #[inline]
        fn $name(self, rhs: Self) -> PacketMask<W> {
            PacketMask::from_fn(|i| self.data[i].$name(rhs.data[i]))
        }
    };
}

macro_rules! lanewise_unary {
    ($name:ident) => {
        #[inline]
        fn $name(self) -> Self {
            self.map(<T as Lane>::$name)
        }
    };
}

impl<T: ScalarLane + FloatScalar, const W: usize> Lane for Packet<T, W> {
    type Scalar = T;
    type Mask = PacketMask<W>;

    const LANES: usize = W;
    const MANTISSA_DIGITS: u32 = <T as Lane>::MANTISSA_DIGITS;

    #[inline]
    fn splat(value: T) -> Self {
        Self { data: [value; W] }
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        Self::splat(<T as Lane>::from_f64(value))
    }

    #[inline]
    fn select(mask: PacketMask<W>, if_true: Self, if_false: Self) -> Self {
        Self::from_fn(|i| {
            if mask.data[i] {
                if_true.data[i]
            } else {
                if_false.data[i]
            }
        })
    }

    lanewise_cmp!(cmp_lt);
    lanewise_cmp!(cmp_le);
    lanewise_cmp!(cmp_gt);
    lanewise_cmp!(cmp_ge);
    lanewise_cmp!(cmp_eq);

    lanewise_unary!(abs);
    lanewise_unary!(signum);
    lanewise_unary!(recip);
    lanewise_unary!(ln);
    lanewise_unary!(exp);
    lanewise_unary!(sqrt);
    lanewise_unary!(erfc);
    lanewise_unary!(tgamma);
    lanewise_unary!(lgamma);

    #[inline]
    fn min(self, rhs: Self) -> Self {
        self.zip_map(rhs, <T as Lane>::min)
    }

    #[inline]
    fn max(self, rhs: Self) -> Self {
        self.zip_map(rhs, <T as Lane>::max)
    }

    #[inline]
    fn powf(self, n: Self) -> Self {
        self.zip_map(n, <T as Lane>::powf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type P4 = Packet<f64, 4>;

    #[test]
    fn arithmetic_is_lanewise() {
        let a = P4::new([1.0, 2.0, 3.0, 4.0]);
        let b = P4::new([4.0, 3.0, 2.0, 1.0]);
        assert_eq!((a + b).to_array(), [5.0; 4]);
        assert_eq!((a - b).to_array(), [-3.0, -1.0, 1.0, 3.0]);
        assert_eq!((a * b).to_array(), [4.0, 6.0, 6.0, 4.0]);
        assert_eq!((a / b).to_array(), [0.25, 2.0 / 3.0, 1.5, 4.0]);
        assert_eq!((-a).to_array(), [-1.0, -2.0, -3.0, -4.0]);

        let mut c = a;
        c += b;
        c *= P4::splat(2.0);
        assert_eq!(c.to_array(), [10.0; 4]);
    }

    #[test]
    fn comparisons_and_reductions() {
        let a = P4::new([1.0, 2.0, 3.0, 4.0]);
        let m = a.cmp_gt(P4::splat(2.0));
        assert_eq!(m.to_array(), [false, false, true, true]);
        assert!(m.any());
        assert!(!m.all());
        assert!(!m.none());
        assert_eq!(m.count(), 2);
        assert!((!m | m).all());
        assert!((!m & m).none());
        assert!(a.cmp_eq(a).all());
        assert!(a.cmp_le(a).all() && a.cmp_ge(a).all());
        assert!(a.cmp_lt(a).none());
    }

    #[test]
    fn select_blends_lanes() {
        let a = P4::new([1.0, 2.0, 3.0, 4.0]);
        let b = P4::splat(-1.0);
        let m = PacketMask::new([true, false, true, false]);
        assert_eq!(P4::select(m, a, b).to_array(), [1.0, -1.0, 3.0, -1.0]);
    }

    #[test]
    fn transcendentals_match_scalar() {
        let a = P4::new([0.5, 1.0, 2.5, 7.0]);
        let e = a.exp();
        let l = a.ln();
        let g = a.tgamma();
        for i in 0..4 {
            assert_eq!(e[i], a[i].exp());
            assert_eq!(l[i], a[i].ln());
            assert_eq!(g[i], crate::special::gamma(a[i]));
        }
        assert_eq!(a.powf(P4::splat(2.0))[2], 6.25);
        assert_eq!(a.max(P4::splat(2.0)).to_array(), [2.0, 2.0, 2.5, 7.0]);
        assert_eq!(a.min(P4::splat(2.0)).to_array(), [0.5, 1.0, 2.0, 2.0]);
    }

    #[test]
    fn signum_of_zero_is_positive() {
        let a = P4::new([0.0, -0.0, 3.0, -2.0]);
        assert_eq!(a.signum().to_array(), [1.0, -1.0, 1.0, -1.0]);
    }

    fn count_positive<T: ScalarLane + FloatScalar, const W: usize>(p: Packet<T, W>) -> usize {
        p.cmp_gt(<Packet<T, W> as Lane>::zero()).count()
    }

    #[test]
    fn generic_element_type() {
        assert_eq!(count_positive(Packet::new([1.0_f32, -2.0, 0.0, 4.0])), 2);
        assert_eq!(count_positive(P4::new([1.0, 2.0, 3.0, -4.0])), 3);
        assert_eq!(<Packet<f32, 8> as Lane>::MANTISSA_DIGITS, 24);
    }

    #[test]
    fn slice_load_store() {
        let src = [1.0_f64, 2.0, 3.0];
        let p = P4::from_slice_padded(&src, 9.0);
        assert_eq!(p.to_array(), [1.0, 2.0, 3.0, 9.0]);

        let mut dst = [0.0_f64; 2];
        p.write_to_slice(&mut dst);
        assert_eq!(dst, [1.0, 2.0]);
        assert_eq!(p.lanes(), 4);
        assert_eq!(P4::LANES, 4);
        assert_eq!(P4::MANTISSA_DIGITS, 53);
    }
}
