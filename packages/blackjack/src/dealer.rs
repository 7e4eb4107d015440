use crate::{Deck, Error, Hand};

/// The dealer draws below this value and stands at or above it.
pub const DEALER_STANDS_ON: u8 = 17;

pub fn dealer_should_hit(hand: &Hand) -> bool {
    hand.value() < DEALER_STANDS_ON
}

/// Draws for the dealer until the hand reaches 17 or busts. `on_hit` sees
/// the hand after every draw. Returns how many cards were drawn.
pub fn play_dealer<F>(hand: &mut Hand, deck: &mut Deck, mut on_hit: F) -> Result<usize, Error>
where
    F: FnMut(&Hand) -> Result<(), Error>,
{
    let mut drawn = 0;
    while dealer_should_hit(hand) {
        hand.add_card(deck.draw()?);
        drawn += 1;
        log::debug!("dealer hits, now {}", hand.value());
        on_hit(hand)?;
    }
    Ok(drawn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, Rank, Suit};

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Clubs)
    }

    #[test]
    fn test_dealer_should_hit() {
        let mut hand = Hand::from(vec![card(Rank::Ten), card(Rank::Six)]);
        assert!(dealer_should_hit(&hand)); // 16

        hand.add_card(card(Rank::Five));
        assert!(!dealer_should_hit(&hand)); // 21
    }

    #[test]
    fn test_dealer_stands_on_soft_17() {
        let hand = Hand::from(vec![card(Rank::Ace), card(Rank::Six)]);
        assert!(!dealer_should_hit(&hand));
    }

    #[test]
    fn test_dealer_stands_on_hard_17_without_drawing() {
        let mut hand = Hand::from(vec![card(Rank::Ten), card(Rank::Seven)]);
        let mut deck = Deck::stacked([card(Rank::Two)]);
        assert_eq!(play_dealer(&mut hand, &mut deck, |_| Ok(())).unwrap(), 0);
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_dealer_stops_at_first_qualifying_card() {
        let mut hand = Hand::from(vec![card(Rank::Two), card(Rank::Three)]);
        let mut deck = Deck::stacked([
            card(Rank::Four),
            card(Rank::Eight),
            card(Rank::Two),
            card(Rank::King),
        ]);
        let mut seen = Vec::new();
        let drawn = play_dealer(&mut hand, &mut deck, |h| {
            seen.push(h.value());
            Ok(())
        }).unwrap();

        // 5 -> 9 -> 17, leaving the two and the king in the deck
        assert_eq!(drawn, 2);
        assert_eq!(seen, vec![9, 17]);
        assert_eq!(hand.value(), 17);
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_dealer_bust_ends_loop() {
        let mut hand = Hand::from(vec![card(Rank::Ten), card(Rank::Six)]);
        let mut deck = Deck::stacked([card(Rank::Queen), card(Rank::Two)]);
        play_dealer(&mut hand, &mut deck, |_| Ok(())).unwrap();
        assert!(hand.is_busted());
        assert_eq!(hand.len(), 3);
    }

    #[test]
    fn test_dealer_loop_invariant_over_shuffled_decks() {
        for _ in 0..200 {
            let mut deck = Deck::shuffled();
            let mut hand = Hand::from(vec![deck.draw().unwrap(), deck.draw().unwrap()]);
            let before = hand.len();
            let drawn = play_dealer(&mut hand, &mut deck, |_| Ok(())).unwrap();

            assert!(hand.value() >= DEALER_STANDS_ON);
            assert_eq!(hand.len(), before + drawn);
            // the hand was still drawing before its last card
            if drawn > 0 {
                let prior = Hand::from(hand.cards[..hand.len() - 1].to_vec());
                assert!(dealer_should_hit(&prior));
            }
        }
    }

    #[test]
    fn test_dealer_empty_deck() {
        let mut hand = Hand::from(vec![card(Rank::Two), card(Rank::Three)]);
        let mut deck = Deck::stacked([]);
        assert_eq!(play_dealer(&mut hand, &mut deck, |_| Ok(())), Err(Error::EmptyDeck));
    }
}
