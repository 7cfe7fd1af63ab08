//! # incgamma
//!
//! Lane-parallel incomplete gamma functions and their inverses, no-std
//! compatible. Every evaluator is written once against the [`Lane`] contract
//! and runs unchanged on plain `f32`/`f64` and on fixed-width [`Packet`]s of
//! independent values.
//!
//! ## Quick start
//!
//! ```
//! use incgamma::special::{gamma_p, gamma_q, gamma_p_inv};
//! use incgamma::Packet;
//!
//! // Scalar
//! let p = gamma_p(2.0_f64, 3.0);
//! let q = gamma_q(2.0_f64, 3.0);
//! assert!((p + q - 1.0).abs() < 1e-15);
//!
//! // Four lanes in one call
//! let a = Packet::new([0.5_f64, 2.0, 25.0, 400.0]);
//! let x = Packet::new([0.1_f64, 3.0, 26.0, 390.0]);
//! let p = gamma_p(a, x);
//! assert_eq!(p[1], gamma_p(2.0, 3.0));
//!
//! // Inverse
//! let x = gamma_p_inv(2.0_f64, p[1]);
//! assert!((x - 3.0).abs() < 1e-10);
//! ```
//!
//! ## Modules
//!
//! - [`traits`]: the numeric contract.
//!   - [`FloatScalar`] is the element type (`f32`, `f64`).
//!   - [`Lane`] is one value or a group of values that undergo identical
//!     arithmetic, with comparisons returning a [`LaneMask`].
//!   - [`ScalarLane`] marks floats that are their own single lane.
//!
//! - [`packet`]: [`Packet<T, W>`], a `[T; W]` array implementing [`Lane`]
//!   lane by lane, and its mask [`PacketMask<W>`].
//!
//! - [`special`]: γ(a,x), Γ(a,x), P(a,x), Q(a,x), their inverses, checked
//!   scalar wrappers, slice evaluation, plus the supporting Γ, ln Γ, erf and
//!   erfc.
//!
//! - [`stats`]: Gamma, chi-squared, exponential and Poisson distributions
//!   whose CDFs and quantiles are built on the incomplete gamma functions.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm, `std::error::Error` impls |
//! | `libm`  | no       | Marker only; the pure-Rust float fallback is always compiled in |
//!
//! Logging goes through the [`log`](https://docs.rs/log) facade at `trace`
//! level from the slice API; install any logger to see it.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod packet;
pub mod special;
pub mod stats;
pub mod traits;

pub use packet::{Packet, PacketMask};
pub use traits::{FloatScalar, Lane, LaneMask, ScalarLane};
