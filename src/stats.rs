use statrs::function::erf::erf_inv;

const PVALUE_EPS: f64 = 1e-16;
const SIGMA_CLAMP: f64 = 7.4;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StatsError {
    #[error("p-value must lie in [0, 1], got {0}")]
    InvalidPValue(f64),
}

/// Square root of the sum of squares.
pub fn quadrature<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().map(|v| v * v).sum::<f64>().sqrt()
}

/// One-sided Gaussian significance for a p-value, clamped to +/-7.4 at the
/// edges of double precision.
pub fn sigma_from_pvalue(pvalue: f64) -> Result<f64, StatsError> {
    if !(0.0..=1.0).contains(&pvalue) {
        return Err(StatsError::InvalidPValue(pvalue));
    }
    if pvalue > 1.0 - PVALUE_EPS {
        return Ok(-SIGMA_CLAMP);
    }
    if pvalue < PVALUE_EPS {
        return Ok(SIGMA_CLAMP);
    }
    Ok(erf_inv(1.0 - 2.0 * pvalue) * std::f64::consts::SQRT_2)
}

pub fn symmetrize(up: f64, down: f64) -> f64 {
    0.5 * (up.abs() + down.abs())
}

/// Statistical error and symmetrized up/down variation added in quadrature.
pub fn total_error(stat: f64, up: f64, down: f64) -> f64 {
    quadrature([stat, symmetrize(up, down)])
}
