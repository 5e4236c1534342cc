//! Console blackjack for any number of players at one table.

use std::collections::HashMap;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use shoebox::input::parse_count;
use shoebox::{Action, Card, Game, GameOptions, GameState, SlotView, Suit, TableView};

fn main() {
    env_logger::init();
    println!("Blackjack (type 'q' at any prompt to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let mut game = Game::new(options, seed);

    let seats = game.max_players();
    let count = parse_count(&prompt_line(&format!("Number of players (1-{seats}): ")), 1);
    let count = count.clamp(1, seats);
    for _ in 0..count {
        if let Err(err) = game.join_default() {
            println!("{err}");
            break;
        }
    }

    loop {
        let mut bets = HashMap::new();
        for &player_id in game.players() {
            let chips = game.get_chips(player_id).unwrap_or(0);
            let default = game.get_bet(player_id).unwrap_or(game.options.min_bet);
            let input = prompt_line(&format!(
                "Player {player_id} bet (chips {chips}, default {default}): "
            ));
            if input == "q" {
                return;
            }
            bets.insert(player_id, parse_count(&input, default));
        }

        let view = match game.start_round(&bets) {
            Ok(view) => view,
            Err(err) => {
                println!("Cannot start round: {err}");
                return;
            }
        };
        print_notices(&view);

        if game.state() == GameState::DealerPlay && game.dealer_hand().is_blackjack() {
            println!("Dealer Blackjack!");
        }

        while !game.is_round_over() {
            let view = game.view();
            print_table(&view);

            let legal = game.legal_actions();
            let names: Vec<_> = legal.iter().map(|action| action.name()).collect();
            println!("Options: {}", names.join(" | "));

            let input = prompt_line("What would you like to do? >> ");
            if input == "q" {
                return;
            }
            let Ok(action) = input.parse::<Action>() else {
                continue;
            };

            if let Err(err) = game.apply_action(action) {
                println!("{err}");
            }
        }

        match game.settle() {
            Ok(result) => {
                print_table(&game.view());
                for player in result.players {
                    println!(
                        "Player {}: net {:+}, chips {}",
                        player.player_id, player.net, player.balance
                    );
                }
            }
            Err(err) => {
                println!("Settlement failed: {err}");
                return;
            }
        }

        if prompt_line("Reveal the count? (y/n) >> ").starts_with('y') {
            println!("Count: {}", game.reveal_count());
        }
        if prompt_line("Would you like to quit? (y/n) >> ").starts_with('y') {
            break;
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

fn print_notices(view: &TableView) {
    if view.reshuffled {
        println!("Deck shuffled!");
    }
    for player_id in &view.rebought {
        println!("Player {player_id} rebought!");
    }
    for player_id in &view.clamped {
        println!("Player {player_id}'s bet was set to the table minimum.");
    }
}

fn print_table(view: &TableView) {
    let hidden = if view.state == GameState::InProgress {
        " | ?"
    } else {
        ""
    };
    println!(
        "\nDealer: {}{hidden} ({})",
        format_cards(&view.dealer_cards),
        view.dealer_total
    );

    for (index, slot) in view.slots.iter().enumerate() {
        let marker = if view.active_slot == Some(index) { "*" } else { " " };
        println!("{marker} {}", format_slot(slot));
    }
    println!();
}

fn format_slot(slot: &SlotView) -> String {
    let doubled = if slot.doubled { " x2" } else { "" };
    format!(
        "Player {}: {} ({}) bet {}{doubled} {}",
        slot.owner,
        format_cards(&slot.cards),
        slot.total,
        slot.bet,
        slot.message
    )
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    format!("\u{1b}[{color_code}m{}{}\u{1b}[0m", card.rank.symbol(), card.suit.symbol())
}
