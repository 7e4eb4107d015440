//! One round at the table, from the deal to settlement.
//!
//! The engine talks to the outside world through two collaborators:
//! [`PlayerInput`] for the player's bets and moves, [`TableView`] for
//! everything shown on screen. A terminal implements both on one value.

use serde::{Deserialize, Serialize};

use crate::{
    play_dealer, settle, Action, Card, Deck, Error, Hand, Move, PlayerTurn, Settlement, TurnState,
};

/// A wager as the player answers a bet prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wager {
    Amount(u64),
    Quit,
}

/// Something worth telling the player about while a round plays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableEvent {
    BetPlaced { bet: u64 },
    BetIncreased { bet: u64 },
    PlayerDrew(Card),
    PlayerBusted { value: u8 },
    DealerHits,
    Settled(Settlement),
}

pub trait PlayerInput {
    /// Asks for a wager between 1 and `max`. Implementations re-prompt on bad
    /// input and only return amounts inside that range.
    fn request_bet(&mut self, max: u64) -> Result<Wager, Error>;

    /// Asks for the next move. Only moves in `turn.legal_moves()` may be
    /// returned.
    fn request_move(&mut self, turn: &PlayerTurn) -> Result<Move, Error>;
}

pub trait TableView {
    /// Shows both hands. Unless `reveal_dealer` is set the dealer's first
    /// card and total stay hidden.
    fn show_hands(&mut self, player: &Hand, dealer: &Hand, reveal_dealer: bool)
        -> Result<(), Error>;

    fn announce(&mut self, event: &TableEvent) -> Result<(), Error>;

    /// Waits for the player before moving on.
    fn pause(&mut self) -> Result<(), Error> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEnd {
    Settled(Settlement),
    /// The player quit at the double-down prompt.
    Quit,
}

/// Plays a full round with `bet` already taken from the player. `table` is
/// both the player's input and the screen.
pub fn play_round<T>(deck: &mut Deck, bankroll: u64, bet: u64, table: &mut T) -> Result<RoundEnd, Error>
where
    T: PlayerInput + TableView + ?Sized,
{
    let mut dealer = Hand::from(vec![deck.draw()?, deck.draw()?]);
    let player = Hand::from(vec![deck.draw()?, deck.draw()?]);
    let mut turn = PlayerTurn::new(player, bet, bankroll)?;

    table.announce(&TableEvent::BetPlaced { bet })?;
    table.show_hands(turn.hand(), &dealer, false)?;

    while turn.state() == TurnState::AwaitingMove {
        let mv = table.request_move(&turn)?;
        let action = match mv {
            Move::Hit => Action::Hit,
            Move::Stand => Action::Stand,
            Move::DoubleDown => {
                if !turn.can_double() {
                    return Err(Error::InvalidMove {
                        mv,
                        state: turn.state(),
                    });
                }
                match table.request_bet(turn.double_limit())? {
                    Wager::Amount(extra) => Action::DoubleDown { extra },
                    Wager::Quit => return Ok(RoundEnd::Quit),
                }
            }
        };

        turn.apply(action, deck)?;

        if let Action::DoubleDown { .. } = action {
            table.announce(&TableEvent::BetIncreased { bet: turn.bet() })?;
        }
        if let Some(card) = drawn_card(&action, turn.hand()) {
            table.announce(&TableEvent::PlayerDrew(card))?;
        }
        if action == Action::Hit {
            table.show_hands(turn.hand(), &dealer, false)?;
        }
    }

    let (player, bet) = turn.into_parts();

    // Gate on the hand itself: a double-down that busts ends in Standing but
    // must not send the dealer drawing.
    if player.is_busted() {
        table.announce(&TableEvent::PlayerBusted {
            value: player.value(),
        })?;
    } else {
        play_dealer(&mut dealer, deck, |hand| {
            table.announce(&TableEvent::DealerHits)?;
            table.show_hands(&player, hand, false)?;
            if !hand.is_busted() {
                table.pause()?;
            }
            Ok(())
        })?;
    }

    table.show_hands(&player, &dealer, true)?;

    let settlement = settle(&player, &dealer, bet, bankroll);
    log::info!(
        "round settled: {:?} {} vs {} (bet {}, bankroll {} -> {})",
        settlement.outcome,
        settlement.player_value,
        settlement.dealer_value,
        bet,
        bankroll,
        settlement.bankroll
    );
    table.announce(&TableEvent::Settled(settlement))?;
    table.pause()?;

    Ok(RoundEnd::Settled(settlement))
}

fn drawn_card(action: &Action, hand: &Hand) -> Option<Card> {
    match action {
        Action::Stand => None,
        Action::Hit | Action::DoubleDown { .. } => hand.cards.last().copied(),
    }
}
