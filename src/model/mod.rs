mod domain;
mod fourier_series;
mod harmonic;
mod range;

pub use domain::{Domain, SeriesType};
pub use fourier_series::{FourierSeries, Term, MAX_HARMONICS};
pub use harmonic::{Harmonic, DEFAULT_MAX_AMPLITUDE};
pub use range::NumericRange;
