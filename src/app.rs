//! Terminal front-end for Chaos Kit.
//!
//! Stands in for the graphical renderer: it owns the three tools, waits
//! out each animation and reports the result as text.

use std::io::{self, BufRead, Write};

use web_time::{Duration, Instant};

use crate::config::AppConfig;
use crate::dice::DiceRoller;
use crate::error::Rejected;
use crate::message::{HELP, Message};
use crate::oracle::MagicBall;
use crate::random::{RandomSource, Roller};
use crate::wheel::ChaosWheel;

/// Application state for the terminal front-end.
pub struct ChaosApp {
    wheel: ChaosWheel,
    dice: DiceRoller,
    ball: MagicBall,
    rng: Box<dyn RandomSource>,
    /// Multiplier for animation waits
    animation_speed: f32,
}

/// Whether the input loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl ChaosApp {
    /// Build the app from configuration.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            wheel: ChaosWheel::from_config(&config.wheel),
            dice: DiceRoller::new(config.dice.default_die),
            ball: MagicBall::new(),
            rng: Box::new(Roller::from_optional_seed(config.preferences.seed)),
            animation_speed: config.preferences.animation_speed,
        }
    }

    /// Replace the random source.
    pub fn with_rng(mut self, rng: Box<dyn RandomSource>) -> Self {
        self.rng = rng;
        self
    }

    pub fn wheel(&self) -> &ChaosWheel {
        &self.wheel
    }

    pub fn dice(&self) -> &DiceRoller {
        &self.dice
    }

    pub fn ball(&self) -> &MagicBall {
        &self.ball
    }

    /// Apply one message, writing feedback to `out`.
    pub fn update(&mut self, msg: Message, out: &mut dyn Write) -> io::Result<Flow> {
        match msg {
            Message::AddOption(text) => match self.wheel.add(&text) {
                Ok(item) => writeln!(out, "added [{}] {}", item.id, item.label)?,
                Err(e) => report(out, e)?,
            },
            Message::RemoveOption(id) => match self.wheel.remove(id) {
                Ok(item) => writeln!(out, "removed [{}] {}", item.id, item.label)?,
                Err(e) => report(out, e)?,
            },
            Message::ListOptions => self.write_options(out)?,
            Message::Spin => self.spin(out)?,
            Message::SelectDie(die) => match self.dice.select(die) {
                Ok(()) => writeln!(out, "selected {}", die)?,
                Err(e) => report(out, e)?,
            },
            Message::Roll => self.roll(out)?,
            Message::Ask => self.ask(out)?,
            Message::Help => writeln!(out, "{}", HELP)?,
            Message::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Read commands line by line until EOF or `quit`.
    pub fn run(&mut self, input: &mut dyn BufRead, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.wheel.status())?;
        let mut line = String::new();
        loop {
            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Message>() {
                Ok(msg) => {
                    log::debug!("📨 {:?}", msg);
                    if self.update(msg, out)? == Flow::Quit {
                        break;
                    }
                }
                Err(e) => writeln!(out, "{}", e)?,
            }
            out.flush()?;
        }
        Ok(())
    }

    fn write_options(&self, out: &mut dyn Write) -> io::Result<()> {
        let items = self.wheel.items();
        writeln!(out, "CHAOS OPTIONS ({}/{})", items.len(), crate::constants::MAX_ITEMS)?;
        if items.is_empty() {
            writeln!(out, "  Add items to spin!")?;
        }
        for item in items {
            writeln!(
                out,
                "  [{}] {:<20} {:<8} {}",
                item.id,
                item.label,
                item.color.name(),
                item.color.hex()
            )?;
        }
        Ok(())
    }

    fn spin(&mut self, out: &mut dyn Write) -> io::Result<()> {
        let outcome = match self.wheel.spin(self.rng.as_mut()) {
            Ok(outcome) => outcome,
            Err(e) => return report(out, e),
        };
        writeln!(out, "{}", self.wheel.status())?;
        let started = Instant::now();
        self.wait(outcome.duration_secs);

        match self.wheel.complete_spin() {
            Ok(result) => {
                log::debug!(
                    "🎡 Settled at {:.1}° after {:?}",
                    outcome.target_rotation_degrees,
                    started.elapsed()
                );
                writeln!(out, "winner: {}", result.winner_label)
            }
            Err(e) => report(out, e),
        }
    }

    fn roll(&mut self, out: &mut dyn Write) -> io::Result<()> {
        let duration = match self.dice.roll() {
            Ok(duration) => duration,
            Err(e) => return report(out, e),
        };
        writeln!(out, "{}", self.dice.status())?;
        self.wait(duration);

        match self.dice.settle(self.rng.as_mut()) {
            Ok(value) => writeln!(out, "{}: {}", self.dice.die(), value),
            Err(e) => report(out, e),
        }
    }

    fn ask(&mut self, out: &mut dyn Write) -> io::Result<()> {
        let duration = match self.ball.shake() {
            Ok(duration) => duration,
            Err(e) => return report(out, e),
        };
        writeln!(out, "{}", self.ball.status())?;
        self.wait(duration);

        match self.ball.reveal(self.rng.as_mut()) {
            Ok(answer) => writeln!(out, "{}", answer),
            Err(e) => report(out, e),
        }
    }

    fn wait(&self, secs: f32) {
        let scaled = secs * self.animation_speed;
        if scaled <= 0.0 {
            return;
        }
        match Duration::try_from_secs_f32(scaled) {
            Ok(duration) => std::thread::sleep(duration),
            Err(e) => log::warn!("Skipping animation wait of {}s: {}", scaled, e),
        }
    }
}

fn report(out: &mut dyn Write, rejected: Rejected) -> io::Result<()> {
    log::debug!("🚫 {} ({})", rejected, rejected.code());
    writeln!(out, "{}", rejected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::DieType;
    use crate::random::FixedSource;

    fn instant_app(units: &[f64]) -> ChaosApp {
        let mut config = AppConfig::default();
        config.preferences.animation_speed = 0.0;
        ChaosApp::new(&config).with_rng(Box::new(FixedSource::new(units)))
    }

    fn run_script(app: &mut ChaosApp, script: &str) -> String {
        let mut input = script.as_bytes();
        let mut out = Vec::new();
        app.run(&mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_spin_session() {
        let mut app = instant_app(&[0.25]);
        let output = run_script(&mut app, "spin\n");
        assert!(output.contains("SPINNING..."));
        // Yes / No wheel turned by 1890°: slice 1 is under the pointer
        assert!(output.contains("winner: No"));
        assert_eq!(app.wheel().winner(), Some("No"));
    }

    #[test]
    fn test_add_list_remove() {
        let mut app = instant_app(&[0.0]);
        let output = run_script(&mut app, "add <Maybe>\nlist\nrm 1\nrm 1\n");
        assert!(output.contains("added [3] Maybe"));
        assert!(output.contains("CHAOS OPTIONS (3/10)"));
        assert!(output.contains("removed [1] Yes"));
        assert!(output.contains("No option with id 1"));
        assert_eq!(app.wheel().registry().labels(), vec!["No", "Maybe"]);
    }

    #[test]
    fn test_dice_and_ball() {
        let mut app = instant_app(&[0.99]);
        let output = run_script(&mut app, "die 4\nroll\nask\n");
        assert!(output.contains("selected d4"));
        assert!(output.contains("d4: 4"));
        assert!(output.contains("Very doubtful"));
        assert_eq!(app.dice().die(), DieType::D4);
        assert_eq!(app.ball().answer(), Some("Very doubtful"));
    }

    #[test]
    fn test_options_list_shows_colors() {
        let mut app = instant_app(&[0.0]);
        let output = run_script(&mut app, "list
");
        assert!(output.contains("coral"));
        assert!(output.contains("#FF6F61"));
        assert!(output.contains("zest"));
    }

    #[test]
    fn test_oversized_speed_does_not_panic() {
        let mut config = AppConfig::default();
        config.preferences.animation_speed = 1e30;
        let mut app = ChaosApp::new(&config).with_rng(Box::new(FixedSource::new(&[0.0])));
        let mut out = Vec::new();
        app.update(Message::Roll, &mut out).unwrap();
        assert_eq!(app.dice().result(), Some(1));
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut app = instant_app(&[0.0]);
        let output = run_script(&mut app, "quit\nadd never\n");
        assert!(!output.contains("added"));
        assert_eq!(app.wheel().items().len(), 2);
    }

    #[test]
    fn test_bad_commands_are_reported() {
        let mut app = instant_app(&[0.0]);
        let output = run_script(&mut app, "dance\nadd ;;;\n");
        assert!(output.contains("Unknown command 'dance'"));
        assert!(output.contains("Label is empty after sanitizing"));
    }
}
