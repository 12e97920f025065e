mod amplitudes;
mod data_set;
mod sampler;

pub use amplitudes::{count_non_zero, non_zero_amplitude_indices, zero_amplitude_indices};
pub use data_set::{DataSet, Point};
pub use sampler::{
    harmonic_value, points_for_harmonic, sample_harmonic, sample_sum, SampleGrid, WaveContext,
    DEFAULT_SUM_POINTS,
};
