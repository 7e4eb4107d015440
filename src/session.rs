use blackjack::{play_round, Deck, Error, PlayerInput, RoundEnd, TableView, Wager};
use rand::Rng;

pub const DEFAULT_BANKROLL: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    Broke,
}

/// Screen hooks the session needs between rounds.
pub trait SessionView {
    fn show_bankroll(&mut self, bankroll: u64) -> Result<(), Error>;
    fn farewell(&mut self, end: SessionEnd) -> Result<(), Error>;
}

/// Runs rounds back to back against one bankroll until the player quits or
/// runs out of money. Each round gets a freshly shuffled deck.
pub struct Session<G> {
    bankroll: u64,
    rounds: u32,
    rng: G,
}

impl<G: Rng> Session<G> {
    pub fn new(bankroll: u64, rng: G) -> Self {
        Self {
            bankroll,
            rounds: 0,
            rng,
        }
    }

    pub fn bankroll(&self) -> u64 {
        self.bankroll
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn run<T>(&mut self, table: &mut T) -> Result<SessionEnd, Error>
    where
        T: PlayerInput + TableView + SessionView + ?Sized,
    {
        let end = self.play(table)?;
        table.farewell(end)?;
        Ok(end)
    }

    fn play<T>(&mut self, table: &mut T) -> Result<SessionEnd, Error>
    where
        T: PlayerInput + TableView + SessionView + ?Sized,
    {
        loop {
            if self.bankroll == 0 {
                return Ok(SessionEnd::Broke);
            }

            table.show_bankroll(self.bankroll)?;
            let bet = match table.request_bet(self.bankroll)? {
                Wager::Amount(bet) => bet,
                Wager::Quit => return Ok(SessionEnd::Quit),
            };

            let mut deck = Deck::new(&mut self.rng);
            match play_round(&mut deck, self.bankroll, bet, table)? {
                RoundEnd::Settled(settlement) => {
                    self.rounds += 1;
                    self.bankroll = settlement.bankroll;
                    if let Ok(json) = serde_json::to_string(&settlement) {
                        log::info!("round {} settled: {}", self.rounds, json);
                    }
                }
                RoundEnd::Quit => return Ok(SessionEnd::Quit),
            }
        }
    }
}
