use crate::Card;
use serde::{Deserialize, Serialize};

pub const BLACKJACK: u8 = 21;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandOutcome {
    Win,
    Loss,
    Push,
}

/// Calculate the value of a blackjack hand.
///
/// Every ace starts at 1; each ace is then promoted to 11 in turn if that
/// keeps the total at or under 21.
pub fn calculate_hand_value(cards: &[Card]) -> u8 {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank.is_ace() {
            aces += 1;
        } else {
            total = total.saturating_add(card.rank.points());
        }
    }

    total = total.saturating_add(aces);
    for _ in 0..aces {
        if total.saturating_add(10) <= BLACKJACK {
            total += 10;
        }
    }

    total
}

pub fn is_busted(cards: &[Card]) -> bool {
    calculate_hand_value(cards) > BLACKJACK
}

/// Check if a hand is blackjack (21 with 2 cards)
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && calculate_hand_value(cards) == BLACKJACK
}

/// What a viewer sees of one card slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFace {
    Up(Card),
    Down,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn value(&self) -> u8 {
        calculate_hand_value(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        is_busted(&self.cards)
    }

    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Presentation view of the hand, with the first card turned face down
    /// when `hide_first` is set.
    pub fn faces(&self, hide_first: bool) -> Vec<CardFace> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, card)| {
                if hide_first && i == 0 {
                    CardFace::Down
                } else {
                    CardFace::Up(*card)
                }
            })
            .collect()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
