/// Indices of the entries that are exactly zero, in order.
pub fn zero_amplitude_indices(amplitudes: &[f64]) -> Vec<usize> {
    amplitudes
        .iter()
        .enumerate()
        .filter(|(_, &a)| a == 0.0)
        .map(|(i, _)| i)
        .collect()
}

/// Indices of the entries that are not zero, in order.
pub fn non_zero_amplitude_indices(amplitudes: &[f64]) -> Vec<usize> {
    amplitudes
        .iter()
        .enumerate()
        .filter(|(_, &a)| a != 0.0)
        .map(|(i, _)| i)
        .collect()
}

pub fn count_non_zero(amplitudes: &[f64]) -> usize {
    amplitudes.iter().filter(|&&a| a != 0.0).count()
}
