//! Text art for hands of cards.

use blackjack::{Card, CardFace, Hand};
use crossterm::style::Stylize;

/// Renders a row of cards as four lines of text. Face-down cards show their
/// back.
pub fn render_cards(faces: &[CardFace], color: bool) -> String {
    let mut rows = [String::new(), String::new(), String::new(), String::new()];

    for face in faces {
        rows[0].push_str(" ___  ");
        match face {
            CardFace::Down => {
                rows[1].push_str("|## | ");
                rows[2].push_str("|###| ");
                rows[3].push_str("|_##| ");
            }
            CardFace::Up(card) => {
                let rank = card.rank.symbol();
                rows[1].push_str(&format!("|{:<2} | ", rank));
                rows[2].push_str(&format!("| {} | ", suit_glyph(card, color)));
                rows[3].push_str(&format!("|_{:_>2}| ", rank));
            }
        }
    }

    rows.iter()
        .map(|row| row.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Header line and art for one side of the table.
pub fn render_hand(label: &str, hand: &Hand, hide_first: bool, color: bool) -> String {
    let value = if hide_first {
        "???".to_string()
    } else {
        hand.value().to_string()
    };
    format!(
        "{}: {}\n{}",
        label,
        value,
        render_cards(&hand.faces(hide_first), color)
    )
}

fn suit_glyph(card: &Card, color: bool) -> String {
    let symbol = card.suit.symbol();
    if color && card.suit.is_red() {
        symbol.red().to_string()
    } else {
        symbol.to_string()
    }
}
