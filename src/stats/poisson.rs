use super::{DiscreteDistribution, StatsError};
use crate::special::{gamma_p, gamma_q};
use crate::ScalarLane;

/// Poisson distribution with rate λ.
///
/// P(X = k) = λ^k e^{−λ} / k! for k = 0, 1, 2, …
///
/// # Example
///
/// ```
/// use incgamma::stats::{Poisson, DiscreteDistribution};
///
/// let p = Poisson::new(3.0_f64).unwrap();
/// assert!((p.mean() - 3.0).abs() < 1e-14);
/// assert!((p.variance() - 3.0).abs() < 1e-14);
/// // P(X ≤ 0) = e^{−λ}
/// assert!((p.cdf(0) - (-3.0_f64).exp()).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Poisson<T> {
    lambda: T,
}

impl<T: ScalarLane> Poisson<T> {
    /// Create a Poisson distribution with rate `lambda`. Requires `lambda > 0`.
    pub fn new(lambda: T) -> Result<Self, StatsError> {
        if !(lambda > T::zero() && lambda < T::infinity()) {
            return Err(StatsError::InvalidParameter);
        }
        Ok(Self { lambda })
    }

    #[inline]
    fn shape_for(k: u64) -> T {
        T::from_f64(k as f64 + 1.0)
    }
}

impl<T: ScalarLane> DiscreteDistribution<T> for Poisson<T> {
    fn pmf(&self, k: u64) -> T {
        self.ln_pmf(k).exp()
    }

    fn ln_pmf(&self, k: u64) -> T {
        let kf = T::from_f64(k as f64);
        kf * self.lambda.ln() - self.lambda - Self::shape_for(k).lgamma()
    }

    fn cdf(&self, k: u64) -> T {
        // P(X ≤ k) = Q(k+1, λ)
        gamma_q(Self::shape_for(k), self.lambda)
    }

    fn sf(&self, k: u64) -> T {
        // P(X > k) = P(k+1, λ)
        gamma_p(Self::shape_for(k), self.lambda)
    }

    fn mean(&self) -> T {
        self.lambda
    }

    fn variance(&self) -> T {
        self.lambda
    }
}
