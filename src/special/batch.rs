//! Slice-level evaluation on top of the lane API.
//!
//! Inputs are cut into chunks of [`BATCH_LANES`] and evaluated as
//! [`Packet`]s. The final partial chunk is padded with `a = 0`, which is
//! outside the domain, so the padding lanes skip all iterative work and
//! never reach the output.

use log::trace;

use super::incgamma::{gamma_p, gamma_q};
use super::invgamma::{gamma_p_inv, gamma_q_inv};
use super::SpecialError;
use crate::{FloatScalar, Lane, Packet, ScalarLane};

/// Lanes per packet used by the slice functions.
pub const BATCH_LANES: usize = 8;

fn map_pairs<T, F>(
    name: &str,
    a: &[T],
    b: &[T],
    out: &mut [T],
    kernel: F,
) -> Result<(), SpecialError>
where
    T: ScalarLane + FloatScalar,
    F: Fn(Packet<T, BATCH_LANES>, Packet<T, BATCH_LANES>) -> Packet<T, BATCH_LANES>,
{
    if a.len() != b.len() || a.len() != out.len() {
        return Err(SpecialError::LengthMismatch);
    }
    trace!(
        "{}: {} elements in {} packets of {} lanes",
        name,
        a.len(),
        a.len().div_ceil(BATCH_LANES),
        BATCH_LANES
    );

    let pad = <T as Lane>::zero();
    for ((ca, cb), co) in a
        .chunks(BATCH_LANES)
        .zip(b.chunks(BATCH_LANES))
        .zip(out.chunks_mut(BATCH_LANES))
    {
        let pa = Packet::from_slice_padded(ca, pad);
        let pb = Packet::from_slice_padded(cb, pad);
        kernel(pa, pb).write_to_slice(co);
    }
    Ok(())
}

/// `out[i] = P(a[i], x[i])`.
///
/// # Errors
///
/// [`SpecialError::LengthMismatch`] if the three slices differ in length.
///
/// # Example
///
/// ```
/// use incgamma::special::{gamma_p, gamma_p_slice};
///
/// let a = [0.5_f64, 1.0, 2.0, 3.0, 30.0, 0.1, 7.0, 4.0, 9.0, 12.0];
/// let x = [0.3_f64, 1.0, 5.0, 0.5, 31.0, 2.0, 6.0, 9.0, 1.0, 12.5];
/// let mut p = [0.0; 10];
/// gamma_p_slice(&a, &x, &mut p).unwrap();
/// for i in 0..a.len() {
///     assert_eq!(p[i], gamma_p(a[i], x[i]));
/// }
/// ```
pub fn gamma_p_slice<T: ScalarLane + FloatScalar>(a: &[T], x: &[T], out: &mut [T]) -> Result<(), SpecialError> {
    map_pairs("gamma_p_slice", a, x, out, gamma_p::<Packet<T, BATCH_LANES>>)
}

/// `out[i] = Q(a[i], x[i])`.
///
/// # Errors
///
/// [`SpecialError::LengthMismatch`] if the three slices differ in length.
pub fn gamma_q_slice<T: ScalarLane + FloatScalar>(a: &[T], x: &[T], out: &mut [T]) -> Result<(), SpecialError> {
    map_pairs("gamma_q_slice", a, x, out, gamma_q::<Packet<T, BATCH_LANES>>)
}

/// `out[i] = P⁻¹(a[i], p[i])`.
///
/// # Errors
///
/// [`SpecialError::LengthMismatch`] if the three slices differ in length.
pub fn gamma_p_inv_slice<T: ScalarLane + FloatScalar>(
    a: &[T],
    p: &[T],
    out: &mut [T],
) -> Result<(), SpecialError> {
    map_pairs("gamma_p_inv_slice", a, p, out, gamma_p_inv::<Packet<T, BATCH_LANES>>)
}

/// `out[i] = Q⁻¹(a[i], q[i])`.
///
/// # Errors
///
/// [`SpecialError::LengthMismatch`] if the three slices differ in length.
pub fn gamma_q_inv_slice<T: ScalarLane + FloatScalar>(
    a: &[T],
    q: &[T],
    out: &mut [T],
) -> Result<(), SpecialError> {
    map_pairs("gamma_q_inv_slice", a, q, out, gamma_q_inv::<Packet<T, BATCH_LANES>>)
}
