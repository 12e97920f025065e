use crate::model::FourierSeries;

/// A target series the player must reproduce and the player's current attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct Challenge {
    answer: FourierSeries,
    guess: FourierSeries,
}

impl Challenge {
    /// The guess starts with the answer's layout and every amplitude at zero.
    pub fn new(answer: FourierSeries) -> Self {
        let mut guess = answer.clone();
        guess.set_all_zero();
        Self { answer, guess }
    }

    pub fn answer(&self) -> &FourierSeries {
        &self.answer
    }

    pub fn guess(&self) -> &FourierSeries {
        &self.guess
    }

    pub fn guess_mut(&mut self) -> &mut FourierSeries {
        &mut self.guess
    }

    /// True when every guessed amplitude is within `threshold` of the answer's.
    pub fn is_solved(&self, threshold: f64) -> bool {
        self.answer
            .harmonics()
            .iter()
            .zip(self.guess.harmonics())
            .all(|(a, g)| (a.amplitude() - g.amplitude()).abs() <= threshold)
    }

    pub fn show_answer(&mut self) {
        self.guess.set_amplitudes(&self.answer.amplitudes());
    }

    pub fn reset_guess(&mut self) {
        self.guess.set_all_zero();
    }
}
