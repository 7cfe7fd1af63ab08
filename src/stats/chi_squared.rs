use super::{is_probability, ContinuousDistribution, StatsError};
use crate::special::{gamma_p, gamma_p_inv, gamma_q};
use crate::ScalarLane;

/// Chi-squared distribution with k degrees of freedom.
///
/// Special case of Gamma(k/2, 1/2).
///
/// # Example
///
/// ```
/// use incgamma::stats::{ChiSquared, ContinuousDistribution};
///
/// let chi2 = ChiSquared::new(3.0_f64).unwrap();
/// assert!((chi2.mean() - 3.0).abs() < 1e-14);
/// assert!((chi2.variance() - 6.0).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ChiSquared<T> {
    k: T, // degrees of freedom
}

impl<T: ScalarLane> ChiSquared<T> {
    /// Create a chi-squared distribution with `k` degrees of freedom. Requires `k > 0`.
    pub fn new(k: T) -> Result<Self, StatsError> {
        if !(k > T::zero() && k < T::infinity()) {
            return Err(StatsError::InvalidParameter);
        }
        Ok(Self { k })
    }

    pub fn dof(&self) -> T {
        self.k
    }
}

impl<T: ScalarLane> ContinuousDistribution<T> for ChiSquared<T> {
    fn pdf(&self, x: T) -> T {
        if x <= T::zero() {
            return T::zero();
        }
        self.ln_pdf(x).exp()
    }

    fn ln_pdf(&self, x: T) -> T {
        if x <= T::zero() {
            return -T::infinity();
        }
        let one = T::one();
        let two = one + one;
        let half_k = self.k / two;
        (half_k - one) * x.ln() - x / two - half_k * two.ln() - half_k.lgamma()
    }

    fn cdf(&self, x: T) -> T {
        if x <= T::zero() {
            return T::zero();
        }
        let two = T::one() + T::one();
        gamma_p(self.k / two, x / two)
    }

    fn sf(&self, x: T) -> T {
        if x <= T::zero() {
            return T::one();
        }
        let two = T::one() + T::one();
        gamma_q(self.k / two, x / two)
    }

    fn quantile(&self, p: T) -> T {
        if !is_probability(p) {
            return T::from_f64(f64::NAN);
        }
        let two = T::one() + T::one();
        two * gamma_p_inv(self.k / two, p)
    }

    fn mean(&self) -> T {
        self.k
    }

    fn variance(&self) -> T {
        let two = T::one() + T::one();
        two * self.k
    }
}
