use serde::{Deserialize, Serialize};

use crate::{Card, Deck, Error, Hand};

/// Where the player's turn currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    AwaitingMove,
    Busted,
    Standing,
}

impl TurnState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TurnState::AwaitingMove)
    }
}

/// A move as the player chooses it at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Hit,
    Stand,
    DoubleDown,
}

/// A move with everything needed to apply it. Doubling carries the extra
/// wager the player committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Hit,
    Stand,
    DoubleDown { extra: u64 },
}

impl Action {
    pub fn as_move(&self) -> Move {
        match self {
            Action::Hit => Move::Hit,
            Action::Stand => Move::Stand,
            Action::DoubleDown { .. } => Move::DoubleDown,
        }
    }
}

/// The player's side of one round: their hand, their wager and the bankroll
/// backing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerTurn {
    hand: Hand,
    bet: u64,
    bankroll: u64,
    state: TurnState,
}

impl PlayerTurn {
    pub fn new(hand: Hand, bet: u64, bankroll: u64) -> Result<Self, Error> {
        if bet == 0 || bet > bankroll {
            return Err(Error::InvalidBet {
                amount: bet,
                max: bankroll,
            });
        }
        let mut turn = Self {
            hand,
            bet,
            bankroll,
            state: TurnState::AwaitingMove,
        };
        turn.enter_awaiting();
        Ok(turn)
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn bet(&self) -> u64 {
        self.bet
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Bankroll not yet committed to this hand.
    pub fn uncommitted(&self) -> u64 {
        self.bankroll - self.bet
    }

    pub fn can_double(&self) -> bool {
        self.state == TurnState::AwaitingMove && self.hand.len() == 2 && self.uncommitted() > 0
    }

    /// Largest extra wager a double-down may add.
    pub fn double_limit(&self) -> u64 {
        self.bet.min(self.uncommitted())
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        if self.state.is_terminal() {
            return Vec::new();
        }
        let mut moves = vec![Move::Hit, Move::Stand];
        if self.can_double() {
            moves.push(Move::DoubleDown);
        }
        moves
    }

    /// Applies one action and returns the resulting state. The drawn card, if
    /// any, is the last card of `hand()` afterwards.
    pub fn apply(&mut self, action: Action, deck: &mut Deck) -> Result<TurnState, Error> {
        let mv = action.as_move();
        if !self.legal_moves().contains(&mv) {
            return Err(Error::InvalidMove {
                mv,
                state: self.state,
            });
        }

        match action {
            Action::Hit => {
                self.take_card(deck)?;
                self.enter_awaiting();
            }
            Action::Stand => {
                self.state = TurnState::Standing;
            }
            Action::DoubleDown { extra } => {
                let max = self.double_limit();
                if extra == 0 || extra > max {
                    return Err(Error::InvalidBet { amount: extra, max });
                }
                self.take_card(deck)?;
                self.bet += extra;
                // one card only, whatever it does to the total
                self.state = TurnState::Standing;
            }
        }

        log::debug!(
            "player {:?} -> {:?} (value {}, bet {})",
            mv,
            self.state,
            self.hand.value(),
            self.bet
        );
        Ok(self.state)
    }

    pub fn into_parts(self) -> (Hand, u64) {
        (self.hand, self.bet)
    }

    fn take_card(&mut self, deck: &mut Deck) -> Result<Card, Error> {
        let card = deck.draw()?;
        self.hand.add_card(card);
        Ok(card)
    }

    fn enter_awaiting(&mut self) {
        self.state = if self.hand.is_busted() {
            TurnState::Busted
        } else {
            TurnState::AwaitingMove
        };
    }
}
