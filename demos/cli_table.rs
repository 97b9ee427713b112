//! CLI demo: solo blackjack and the Hi-Lo counting trainer.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Card, CountingTrainer, SoloRound};

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    println!("twentyone demo");
    loop {
        match prompt_line("Play (b)lackjack, (c)ounting trainer, or (q)uit: ").as_str() {
            "b" | "blackjack" => play_solo(seed),
            "c" | "counting" => run_trainer(seed),
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            other => println!("Unknown choice: {other}"),
        }
    }
}

fn play_solo(seed: u64) {
    let round = SoloRound::new(seed);

    loop {
        show_table(&round);

        if let Some(outcome) = round.outcome() {
            println!("Result: {outcome}");
            match prompt_line("Another round? (y/n): ").as_str() {
                "y" | "yes" => round.new_round(),
                _ => break,
            }
            continue;
        }

        match prompt_line("(h)it or (s)tand: ").as_str() {
            "h" | "hit" => match round.hit() {
                Ok(Some(card)) => println!("You drew {card}"),
                Ok(None) => println!("The deck is empty."),
                Err(err) => println!("{err}"),
            },
            "s" | "stand" => {
                if let Err(err) = round.stand() {
                    println!("{err}");
                }
            }
            other => println!("Unknown action: {other}"),
        }
    }
}

fn show_table(round: &SoloRound) {
    let dealer = round.dealer_cards();
    if round.is_hole_hidden() {
        let up = dealer.first().map_or_else(String::new, |c| c.to_string());
        println!("Dealer: {up} ??");
    } else {
        println!(
            "Dealer: {} ({})",
            format_cards(&dealer),
            twentyone::hand_value(&dealer)
        );
    }

    let player = round.player_cards();
    println!(
        "You:    {} ({})",
        format_cards(&player),
        twentyone::hand_value(&player)
    );
}

fn run_trainer(seed: u64) {
    let trainer = CountingTrainer::new(seed);
    println!("Hi-Lo trainer: (n)ext card, (g)uess the count, (r)eset, (d)one");

    loop {
        match prompt_line("> ").as_str() {
            "n" | "next" => match trainer.reveal_next() {
                Some(card) => println!("{card}  ({} revealed)", trainer.revealed_cards().len()),
                None => println!("Every card has been revealed."),
            },
            "g" | "guess" => {
                let guess = prompt_line("Running count? ");
                println!("{}", trainer.submit_guess(&guess));
            }
            "r" | "reset" => {
                trainer.reset();
                println!("Fresh deck.");
            }
            "d" | "done" => break,
            other => println!("Unknown command: {other}"),
        }
    }
}

fn format_cards(cards: &[Card]) -> String {
    let labels: Vec<String> = cards.iter().map(ToString::to_string).collect();
    labels.join(" ")
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::from("q");
    }
    line.trim().to_lowercase()
}
