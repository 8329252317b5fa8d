use crate::utils::error::{ReportError, Result};

/// Adds up `numbers`. An empty slice sums to zero.
pub fn sum_numbers(numbers: &[i64]) -> Result<i64> {
    numbers.iter().try_fold(0i64, |acc, &n| {
        acc.checked_add(n).ok_or_else(|| ReportError::ProcessingError {
            message: format!("sum overflows a 64-bit integer after adding {}", n),
        })
    })
}
