//! Line-based terminal front end: prompts on one stream, text on another.

use std::io::{BufRead, Write};

use blackjack::{
    Error, Hand, HandOutcome, Move, PlayerInput, PlayerTurn, TableEvent, TableView, Wager,
    BLACKJACK,
};

use crate::render::render_hand;
use crate::session::{SessionEnd, SessionView};

pub const RULES: &str = "\
Rules:
  Try to get as close to 21 without going over.
  Kings, Queens, and Jacks are 10 points.
  Aces are worth 1 or 11 points.
  Cards 2 through 10 are worth their face value.
  (H)it to take another card.
  (S)tand to stop taking cards.
  On your first play you can (D)ouble down to increase your bet
  but must hit exactly one more time before standing.
  In case of a tie, the bet is returned to the player.
  The dealer stops hitting at 17.";

pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    pub fn show_rules(&mut self) -> Result<(), Error> {
        writeln!(self.output, "{}", RULES)?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `prompt` and reads one line. `None` means the input is closed.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>, Error> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_uppercase()))
    }
}

impl<R: BufRead, W: Write> PlayerInput for Console<R, W> {
    fn request_bet(&mut self, max: u64) -> Result<Wager, Error> {
        loop {
            writeln!(self.output, "How much do you want to bet? (1-{}, or QUIT)", max)?;
            let Some(answer) = self.prompt("> ")? else {
                return Ok(Wager::Quit);
            };
            if answer == "QUIT" {
                return Ok(Wager::Quit);
            }
            match answer.parse::<u64>() {
                Ok(bet) if (1..=max).contains(&bet) => return Ok(Wager::Amount(bet)),
                _ => log::debug!("rejected bet input {:?}", answer),
            }
        }
    }

    fn request_move(&mut self, turn: &PlayerTurn) -> Result<Move, Error> {
        let legal = turn.legal_moves();
        let labels: Vec<&str> = legal
            .iter()
            .map(|mv| match mv {
                Move::Hit => "(H)it",
                Move::Stand => "(S)tand",
                Move::DoubleDown => "(D)ouble down",
            })
            .collect();
        let prompt = format!("{}> ", labels.join(", "));

        loop {
            let Some(answer) = self.prompt(&prompt)? else {
                return Err(Error::Io("input closed while waiting for a move".to_string()));
            };
            let mv = match answer.as_str() {
                "H" => Move::Hit,
                "S" => Move::Stand,
                "D" => Move::DoubleDown,
                _ => continue,
            };
            if legal.contains(&mv) {
                return Ok(mv);
            }
            log::debug!("rejected move {:?}", mv);
        }
    }
}

impl<R: BufRead, W: Write> TableView for Console<R, W> {
    fn show_hands(&mut self, player: &Hand, dealer: &Hand, reveal_dealer: bool) -> Result<(), Error> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "{}",
            render_hand("DEALER", dealer, !reveal_dealer, self.color)
        )?;
        writeln!(
            self.output,
            "{}",
            render_hand("PLAYER", player, false, self.color)
        )?;
        writeln!(self.output)?;
        Ok(())
    }

    fn announce(&mut self, event: &TableEvent) -> Result<(), Error> {
        match event {
            TableEvent::BetPlaced { bet } => writeln!(self.output, "Bet: {}", bet)?,
            TableEvent::BetIncreased { bet } => {
                writeln!(self.output, "Bet increased to {}.", bet)?;
                writeln!(self.output, "Bet: {}", bet)?;
            }
            TableEvent::PlayerDrew(card) => writeln!(
                self.output,
                "You drew a {} of {}.",
                card.rank.symbol(),
                card.suit.symbol()
            )?,
            TableEvent::PlayerBusted { value } => writeln!(self.output, "You bust with {}!", value)?,
            TableEvent::DealerHits => writeln!(self.output, "Dealer hits...")?,
            TableEvent::Settled(settlement) => match settlement.outcome {
                HandOutcome::Win if settlement.player_blackjack => {
                    writeln!(self.output, "Blackjack! You win ${}!", settlement.bet)?
                }
                HandOutcome::Win if settlement.dealer_value > BLACKJACK => {
                    writeln!(self.output, "Dealer busts! You win ${}!", settlement.bet)?
                }
                HandOutcome::Win => writeln!(self.output, "You win ${}!", settlement.bet)?,
                HandOutcome::Loss => writeln!(self.output, "You lost!")?,
                HandOutcome::Push => {
                    writeln!(self.output, "It's a tie, the bet is returned to you.")?
                }
            },
        }
        Ok(())
    }

    fn pause(&mut self) -> Result<(), Error> {
        self.prompt("Press Enter to continue...")?;
        writeln!(self.output, "\n")?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> SessionView for Console<R, W> {
    fn show_bankroll(&mut self, bankroll: u64) -> Result<(), Error> {
        writeln!(self.output, "Money: {}", bankroll)?;
        Ok(())
    }

    fn farewell(&mut self, end: SessionEnd) -> Result<(), Error> {
        if end == SessionEnd::Broke {
            writeln!(self.output, "You're broke!")?;
        }
        writeln!(self.output, "Thanks for playing!")?;
        Ok(())
    }
}
