use crate::CoreError;

/// Integer type for capacities and flows (discrete shippable units).
///
/// Signed so residual edges can carry negated flow.
pub type Units = i64;

pub fn ensure_non_negative(v: Units, what: &'static str) -> Result<Units, CoreError> {
    if v >= 0 {
        Ok(v)
    } else {
        Err(CoreError::Negative { what, value: v })
    }
}

/// `round(value * numer / denom)` in exact integer arithmetic.
///
/// Halves round away from zero. Inputs must be non-negative; returns `None`
/// when `denom <= 0` or the result does not fit in `Units`.
pub fn mul_div_round(value: Units, numer: Units, denom: Units) -> Option<Units> {
    if denom <= 0 || value < 0 || numer < 0 {
        return None;
    }
    let product = i128::from(value) * i128::from(numer);
    let denom = i128::from(denom);
    let rounded = (2 * product + denom) / (2 * denom);
    Units::try_from(rounded).ok()
}
