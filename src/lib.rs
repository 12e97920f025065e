pub mod axis;
pub mod chart;
pub mod config;
pub mod emphasis;
pub mod error;
pub mod game;
pub mod model;
pub mod sampling;
pub mod utils;
pub mod wave_packet;
pub mod waveform;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use axis::{AxisDescription, AxisLadder};
pub use chart::ChartSnapshot;
pub use config::{load_config, SimulationConfig};
pub use emphasis::EmphasisSet;
pub use error::{FourierError, FourierResult};
pub use game::{AmplitudeGenerator, Challenge, WaveGameLevel};
pub use model::{Domain, FourierSeries, Harmonic, NumericRange, SeriesType};
pub use sampling::{sample_harmonic, sample_sum, DataSet, SampleGrid, WaveContext};
pub use utils::*;
pub use wave_packet::WavePacket;
pub use waveform::Waveform;

#[cfg(feature = "wasm")]
pub use wasm::{WasmAmplitudeGenerator, WasmEmphasisSet, WaveSimulation};
