use crate::{board::Symbol, win::Winner};

/// Results of the games played in this process
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct Scoreboard {
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, winner: Winner) {
        match winner {
            Winner::Won(Symbol::X) => self.x_wins += 1,
            Winner::Won(Symbol::O) => self.o_wins += 1,
            Winner::Draw => self.draws += 1,
        }
    }

    pub fn wins(&self, symbol: Symbol) -> usize {
        match symbol {
            Symbol::X => self.x_wins,
            Symbol::O => self.o_wins,
        }
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Number of finished games
    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}
