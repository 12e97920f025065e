mod challenge;
mod generator;
mod level;

pub use challenge::Challenge;
pub use generator::{
    AmplitudeGenerator, GeneratedAmplitudes, DEFAULT_AMPLITUDE_STEP, DEFAULT_MAX_ATTEMPTS,
};
pub use level::{WaveGameLevel, NUMBER_OF_LEVELS, POINTS_PER_CHALLENGE};
