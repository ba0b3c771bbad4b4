//! Summary statistics over slices of numbers.

/// Exactly rounded floating-point sum.
///
/// Keeps a list of non-overlapping partial sums (Shewchuk's algorithm) so the
/// result does not depend on the order of the inputs.
pub fn fsum(values: &[f64]) -> f64 {
    let mut partials: Vec<f64> = Vec::new();
    for &value in values {
        let mut x = value;
        let mut kept = 0;
        for i in 0..partials.len() {
            let mut y = partials[i];
            if x.abs() < y.abs() {
                std::mem::swap(&mut x, &mut y);
            }
            let hi = x + y;
            let lo = y - (hi - x);
            if lo != 0.0 {
                partials[kept] = lo;
                kept += 1;
            }
            x = hi;
        }
        partials.truncate(kept);
        partials.push(x);
    }
    partials.iter().sum()
}

/// Integer sum.
pub fn isum(values: &[i64]) -> i64 {
    values.iter().sum()
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(fsum(values) / values.len() as f64)
}

/// Population standard deviation.
pub fn std_dev(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    let squares: Vec<f64> = values.iter().map(|v| (v - avg).powi(2)).collect();
    Some((fsum(&squares) / values.len() as f64).sqrt())
}

/// Relative standard deviation in percent; `None` when the mean is zero.
pub fn pct_rsd(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    if avg == 0.0 {
        return None;
    }
    Some(std_dev(values)? / avg * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fsum_cancels_exactly() {
        assert_eq!(fsum(&[1e100, 1.0, -1e100]), 1.0);
        assert_eq!(fsum(&[0.1; 10]), 1.0);
        assert_eq!(fsum(&[]), 0.0);
    }

    #[test]
    fn population_statistics() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&data), Some(5.0));
        assert_eq!(std_dev(&data), Some(2.0));
        assert_eq!(pct_rsd(&data), Some(40.0));
        assert_eq!(isum(&[1, 2, 3, -4]), 2);
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(mean(&[]), None);
        assert_eq!(std_dev(&[]), None);
        assert_eq!(pct_rsd(&[-1.0, 1.0]), None);
    }
}
