// src/game/level.rs

use rand::Rng;

use super::{AmplitudeGenerator, Challenge};
use crate::config::SimulationConfig;

pub const NUMBER_OF_LEVELS: usize = 5;
pub const POINTS_PER_CHALLENGE: usize = 1;

/// One level of the wave game: level `n` asks for `n` non-zero harmonics.
#[derive(Debug, Clone)]
pub struct WaveGameLevel {
    level_number: usize,
    number_of_non_zero_harmonics: usize,
    score: usize,
    challenge: Challenge,
    // Set once the current challenge has been scored.
    solved: bool,
    config: SimulationConfig,
}

impl WaveGameLevel {
    pub fn new<R: Rng>(
        level_number: usize,
        config: &SimulationConfig,
        generator: &mut AmplitudeGenerator<R>,
    ) -> Self {
        assert!(
            (1..=NUMBER_OF_LEVELS).contains(&level_number),
            "level must be in [1, {}], got {}",
            NUMBER_OF_LEVELS,
            level_number
        );
        assert!(
            level_number <= config.max_harmonics,
            "level {} needs more harmonics than the {} configured",
            level_number,
            config.max_harmonics
        );

        let mut level = Self {
            level_number,
            number_of_non_zero_harmonics: level_number,
            score: 0,
            challenge: Challenge::new(config.fourier_series()),
            solved: false,
            config: config.clone(),
        };
        level.new_challenge(generator);
        level
    }

    pub fn level_number(&self) -> usize {
        self.level_number
    }

    pub fn number_of_non_zero_harmonics(&self) -> usize {
        self.number_of_non_zero_harmonics
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    pub fn challenge_mut(&mut self) -> &mut Challenge {
        &mut self.challenge
    }

    /// Replaces the challenge with one whose answer differs from the current answer
    /// when possible. Returns false if the generator gave up and repeated it.
    pub fn new_challenge<R: Rng>(&mut self, generator: &mut AmplitudeGenerator<R>) -> bool {
        let previous = self.challenge.answer().amplitudes();
        let previous = if previous.iter().all(|&a| a == 0.0) {
            None
        } else {
            Some(previous)
        };

        let generated = generator.generate_avoiding_similarity(
            self.config.max_harmonics,
            self.number_of_non_zero_harmonics,
            self.config.max_amplitude,
            self.config.amplitude_step,
            previous.as_deref(),
        );

        let mut answer = self.config.fourier_series();
        answer.set_amplitudes(&generated.amplitudes);
        self.challenge = Challenge::new(answer);
        self.solved = false;
        !generated.similar_to_previous
    }

    /// Scores the current guess. Each challenge awards points at most once.
    pub fn check_answer(&mut self) -> bool {
        let solved = self.challenge.is_solved(self.config.answer_threshold);
        if solved && !self.solved {
            self.solved = true;
            self.score += POINTS_PER_CHALLENGE;
        }
        solved
    }

    /// Reveals the answer without awarding points for it.
    pub fn show_answer(&mut self) {
        self.challenge.show_answer();
        self.solved = true;
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.challenge.reset_guess();
        self.solved = false;
    }
}
