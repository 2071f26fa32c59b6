//! The bot's inner monologue: a log of what it decided and why.

use crate::strategy::Game;
use std::collections::VecDeque;

/// How many log lines to keep around for inspection.
const LOG_CAPACITY: usize = 250;

pub struct EEG {
    current_time: f32,
    pub log: VecDeque<String>,
    /// Decisions made during the current tick.
    pub events: Vec<Event>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Event {
    Kickoff,
    Atba,
    Shot,
    GetBoost,
    ShortShot,
    Retreat,
    RetreatBoost,
}

impl EEG {
    pub fn new() -> Self {
        Self {
            current_time: 0.0,
            log: VecDeque::new(),
            events: Vec::new(),
        }
    }

    pub fn begin(&mut self, game: &Game) {
        self.current_time = game.time;
        self.events.clear();
    }

    pub fn log(&mut self, source: &str, message: impl Into<String>) {
        let message = message.into();

        log::info!("{:>8.3} {}: {}", self.current_time, source, message);

        self.log.push_back(message);

        // Limit RAM usage
        while self.log.len() > LOG_CAPACITY {
            self.log.pop_front();
        }
    }

    pub fn track(&mut self, event: Event) {
        log::debug!("{:>8.3} event {:?}", self.current_time, event);
        self.events.push(event);
    }
}

impl Default for EEG {
    fn default() -> Self {
        Self::new()
    }
}
