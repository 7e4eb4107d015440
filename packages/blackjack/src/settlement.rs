use serde::{Deserialize, Serialize};

use crate::{Hand, HandOutcome, BLACKJACK};

/// Result of settling one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub outcome: HandOutcome,
    pub bet: u64,
    pub player_value: u8,
    pub dealer_value: u8,
    pub bankroll: u64,
    /// The player's first two cards made 21. Pays like any other win.
    pub player_blackjack: bool,
}

pub fn determine_outcome(player_value: u8, dealer_value: u8) -> HandOutcome {
    if dealer_value > BLACKJACK {
        HandOutcome::Win
    } else if player_value > BLACKJACK || player_value < dealer_value {
        HandOutcome::Loss
    } else if player_value == dealer_value {
        HandOutcome::Push
    } else {
        HandOutcome::Win
    }
}

/// Compares the final hands and moves `bet` in or out of `bankroll`.
///
/// A busted dealer pays out before the player's own total is looked at. The
/// round driver never lets a busted player reach the dealer's turn, so the
/// two busts do not meet in play.
pub fn settle(player: &Hand, dealer: &Hand, bet: u64, bankroll: u64) -> Settlement {
    let player_value = player.value();
    let dealer_value = dealer.value();
    let outcome = determine_outcome(player_value, dealer_value);

    let bankroll = match outcome {
        HandOutcome::Win => bankroll.saturating_add(bet),
        HandOutcome::Loss => bankroll.saturating_sub(bet),
        HandOutcome::Push => bankroll,
    };

    Settlement {
        outcome,
        bet,
        player_value,
        dealer_value,
        bankroll,
        player_blackjack: player.is_blackjack(),
    }
}
