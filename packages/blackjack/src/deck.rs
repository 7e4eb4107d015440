use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Card, Error};

pub const DECK_SIZE: usize = 52;

/// A single 52-card deck. The top of the deck is the end of `cards`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds every rank/suit combination and shuffles it with `rng`.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards: Vec<Card> = (0..DECK_SIZE).map(Card::from_index).collect();
        cards.shuffle(rng);
        Self { cards }
    }

    pub fn shuffled() -> Self {
        Self::new(&mut rand::thread_rng())
    }

    /// A deck that deals `cards` in the given order, first element first.
    pub fn stacked(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        cards.reverse();
        Self { cards }
    }

    pub fn draw(&mut self) -> Result<Card, Error> {
        let card = self.cards.pop().ok_or(Error::EmptyDeck)?;
        log::debug!("drew {} ({} left)", card.to_display(), self.cards.len());
        Ok(card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
