//! Game clock: elapsed seconds, quarter, offense alternation.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameClock {
    pub elapsed: u32,
    pub quarter: u8,
    next_quarter_at: u32,
    quarter_seconds: u32,
    game_seconds: u32,
    block_seconds: u32,
}

impl GameClock {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            elapsed: 0,
            quarter: 1,
            next_quarter_at: config.quarter_seconds,
            quarter_seconds: config.quarter_seconds,
            game_seconds: config.game_seconds,
            block_seconds: config.possession_block_seconds,
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = 0;
        self.quarter = 1;
        self.next_quarter_at = self.quarter_seconds;
    }

    pub fn is_over(&self) -> bool {
        self.elapsed >= self.game_seconds
    }

    /// Team A has the ball in even blocks of elapsed time.
    pub fn team_a_has_ball(&self) -> bool {
        (self.elapsed / self.block_seconds) % 2 == 0
    }

    /// Runs the clock. Returns the new quarter when a boundary inside
    /// regulation was crossed.
    pub fn advance(&mut self, seconds: u32) -> Option<u8> {
        self.elapsed += seconds;
        let mut started = None;
        while self.elapsed >= self.next_quarter_at && self.next_quarter_at < self.game_seconds {
            self.quarter += 1;
            self.next_quarter_at += self.quarter_seconds;
            started = Some(self.quarter);
        }
        started
    }

    /// `Q2 07:41` style label, counting down within the quarter.
    pub fn label(&self) -> String {
        let into_quarter = self.elapsed.saturating_sub((self.quarter as u32 - 1) * self.quarter_seconds);
        let left = self.quarter_seconds.saturating_sub(into_quarter);
        format!("Q{} {:02}:{:02}", self.quarter, left / 60, left % 60)
    }
}
