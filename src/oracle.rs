//! Magic ball oracle.

use crate::constants::SHAKE_DURATION_SECS;
use crate::error::Rejected;
use crate::random::RandomSource;

/// The twenty classic answers.
pub const ANSWERS: [&str; 20] = [
    "It is certain",
    "It is decidedly so",
    "Without a doubt",
    "Yes definitely",
    "You may rely on it",
    "As I see it, yes",
    "Most likely",
    "Outlook good",
    "Yes",
    "Signs point to yes",
    "Reply hazy, try again",
    "Ask again later",
    "Better not tell you now",
    "Cannot predict now",
    "Concentrate and ask again",
    "Don't count on it",
    "My reply is no",
    "My sources say no",
    "Outlook not so good",
    "Very doubtful",
];

/// Shake flag and the last answer shown.
#[derive(Debug, Clone, Default)]
pub struct MagicBall {
    shaking: bool,
    answer: Option<&'static str>,
}

impl MagicBall {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start shaking. Returns the shake duration in seconds.
    pub fn shake(&mut self) -> Result<f32, Rejected> {
        if self.shaking {
            return Err(Rejected::AlreadyShaking);
        }
        self.shaking = true;
        self.answer = None;
        log::debug!("Magic ball shaking");
        Ok(SHAKE_DURATION_SECS)
    }

    /// Stop shaking and pick an answer.
    pub fn reveal(&mut self, rng: &mut dyn RandomSource) -> Result<&'static str, Rejected> {
        if !self.shaking {
            return Err(Rejected::NotShaking);
        }
        let last = ANSWERS.len() as u32 - 1;
        let answer = ANSWERS[rng.range_inclusive(0, last) as usize];
        self.shaking = false;
        self.answer = Some(answer);
        log::info!("Magic ball says '{}'", answer);
        Ok(answer)
    }

    pub fn is_shaking(&self) -> bool {
        self.shaking
    }

    pub fn answer(&self) -> Option<&'static str> {
        self.answer
    }

    pub fn status(&self) -> &'static str {
        if self.shaking {
            "CONSULTING THE VOID..."
        } else {
            "CLICK THE ORB TO SEEK WISDOM"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{FixedSource, Roller};

    #[test]
    fn test_shake_reveal_cycle() {
        let mut ball = MagicBall::new();
        assert_eq!(ball.shake(), Ok(SHAKE_DURATION_SECS));
        assert_eq!(ball.shake(), Err(Rejected::AlreadyShaking));
        assert_eq!(ball.answer(), None);

        let mut rng = FixedSource::new(&[0.0]);
        assert_eq!(ball.reveal(&mut rng), Ok("It is certain"));
        assert_eq!(ball.answer(), Some("It is certain"));
        assert!(!ball.is_shaking());
    }

    #[test]
    fn test_reveal_without_shake() {
        let mut ball = MagicBall::new();
        let mut rng = FixedSource::new(&[0.0]);
        assert_eq!(ball.reveal(&mut rng), Err(Rejected::NotShaking));
    }

    #[test]
    fn test_shake_clears_previous_answer() {
        let mut ball = MagicBall::new();
        let mut rng = FixedSource::new(&[0.99]);
        ball.shake().unwrap();
        assert_eq!(ball.reveal(&mut rng), Ok("Very doubtful"));
        ball.shake().unwrap();
        assert_eq!(ball.answer(), None);
        assert_eq!(ball.status(), "CONSULTING THE VOID...");
    }

    #[test]
    fn test_answers_come_from_fixed_list() {
        let mut ball = MagicBall::new();
        let mut rng = Roller::from_seed(5);
        for _ in 0..100 {
            ball.shake().unwrap();
            let answer = ball.reveal(&mut rng).unwrap();
            assert!(ANSWERS.contains(&answer));
        }
    }
}
