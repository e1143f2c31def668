//! Terminal table display for the round engine.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Card, DealerHand, Rank, RoundOutcome, Seat, Suit, Table, TableOptions};

fn main() {
    println!("Blackjack table ('h' hit, 's' stand, 'r' restart, 'q' quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let seats = vec![
        Seat::human("You"),
        Seat::automated("AI Bot 1"),
        Seat::automated("AI Bot 2"),
    ];

    let mut table = match Table::new(TableOptions::default(), seats, seed) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("Could not seat the table: {err}");
            return;
        }
    };
    table.deal();

    loop {
        print_table(&table);

        match prompt_line("> ").as_str() {
            "h" | "hit" => {
                table.hit();
            }
            "s" | "stand" => {
                table.stand();
            }
            "r" | "restart" => {
                table.reset();
                table.deal();
            }
            "q" | "quit" => return,
            _ => println!("Unknown input."),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(table: &Table) {
    println!();
    for seat in table.seats() {
        let soft = if seat.hand().is_soft() { " soft" } else { "" };
        println!(
            "{}: {} |{} {}",
            seat.name(),
            format_hand(seat.hand().cards()),
            soft,
            seat.value()
        );
    }

    let dealer = table.dealer();
    println!(
        "Dealer: {} | {}",
        format_dealer(dealer),
        dealer.visible_value()
    );

    println!("{}", table.status());

    if let Some(summary) = table.summary() {
        let code = match summary.outcome {
            RoundOutcome::Win => "32",
            RoundOutcome::Lose => "31",
            RoundOutcome::Push => "33",
        };
        println!("{}", colorize(&summary.message, code));
        println!("Press 'r' for a new round.");
    }
    println!();
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    if dealer.is_hole_revealed() {
        return format_hand(dealer.cards());
    }

    let mut parts = Vec::new();
    if let Some(card) = dealer.up_card() {
        parts.push(format_card(card));
    }
    if dealer.len() > 1 {
        parts.push("??".to_string());
    }
    parts.join(" ")
}

fn format_hand(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        Rank::Ace => "A".to_string(),
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        numeric => numeric.point_value().to_string(),
    };

    format!("{rank}{}", colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
