mod card;
mod dealer;
mod deck;
mod error;
mod hand;
mod round;
mod settlement;
mod turn;

pub use card::{Card, Rank, Suit};
pub use dealer::{dealer_should_hit, play_dealer, DEALER_STANDS_ON};
pub use deck::{Deck, DECK_SIZE};
pub use error::Error;
pub use hand::{calculate_hand_value, is_blackjack, is_busted, CardFace, Hand, HandOutcome, BLACKJACK};
pub use round::{play_round, PlayerInput, RoundEnd, TableEvent, TableView, Wager};
pub use settlement::{determine_outcome, settle, Settlement};
pub use turn::{Action, Move, PlayerTurn, TurnState};
