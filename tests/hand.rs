//! Hand evaluation, rank tables, and input parsing.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use shoebox::hand::{count_value, is_blackjack, is_soft, total};
use shoebox::input::{parse_count, parse_number};
use shoebox::{Action, Card, DealerHand, Hand, HandStatus, InputError, Rank, Suit};

fn cards(symbols: &str) -> Vec<Card> {
    symbols
        .chars()
        .map(|symbol| Card::new(Suit::Hearts, Rank::from_symbol(symbol).unwrap()))
        .collect()
}

#[test]
fn rank_tables() {
    let values: Vec<u8> = Rank::ALL.iter().map(|rank| rank.value()).collect();
    assert_eq!(values, vec![2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10, 11]);

    let counts: Vec<i32> = Rank::ALL.iter().map(|rank| rank.count_value()).collect();
    assert_eq!(counts, vec![1, 1, 1, 1, 1, 0, 0, 0, -1, -1, -1, -1, -1]);

    let symbols: String = Rank::ALL.iter().map(|rank| rank.symbol()).collect();
    assert_eq!(symbols, "23456789TJQKA");
    assert!(
        Rank::ALL
            .iter()
            .all(|&rank| Rank::from_symbol(rank.symbol()) == Some(rank))
    );
    assert_eq!(Rank::from_symbol('t'), Some(Rank::Ten));
    assert_eq!(Rank::from_symbol('1'), None);
}

#[test]
fn soft_aces_reduce_one_at_a_time() {
    assert_eq!(total(&cards("AA")), 12);
    assert_eq!(total(&cards("AK")), 21);
    assert_eq!(total(&cards("A6")), 17);
    assert!(is_soft(&cards("A6")));
    assert_eq!(total(&cards("A6T")), 17);
    assert!(!is_soft(&cards("A6T")));
    assert_eq!(total(&cards("AAA9")), 12);
    assert_eq!(total(&cards("KQ5")), 25);
    assert_eq!(total(&[]), 0);
}

#[test]
fn blackjack_needs_exactly_two_cards() {
    assert!(is_blackjack(&cards("AK")));
    assert!(is_blackjack(&cards("TA")));
    assert!(!is_blackjack(&cards("73A")));
    assert!(!is_blackjack(&cards("KQ")));
}

#[test]
fn count_value_sums_hi_lo() {
    assert_eq!(count_value(&cards("27TA")), -1);
    assert_eq!(count_value(&cards("26TA")), 0);
    assert_eq!(count_value(&cards("23456")), 5);
    assert_eq!(count_value(&cards("789")), 0);
}

#[test]
fn total_ignores_card_order() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    for _ in 0..500 {
        let len = rng.random_range(1..=8);
        let mut hand: Vec<Card> = (0..len)
            .map(|_| Card::new(Suit::Clubs, Rank::ALL[rng.random_range(0..13)]))
            .collect();
        let expected = total(&hand);
        let expected_count = count_value(&hand);

        for _ in 0..5 {
            hand.shuffle(&mut rng);
            assert_eq!(total(&hand), expected, "{hand:?}");
            assert_eq!(count_value(&hand), expected_count);
        }
    }
}

#[test]
fn hand_split_and_double_eligibility() {
    let mut pair = Hand::new(1, 10);
    pair.add_card(Card::new(Suit::Hearts, Rank::Eight));
    pair.add_card(Card::new(Suit::Clubs, Rank::Eight));
    assert!(pair.can_split());
    assert!(!pair.can_double());

    // Ten and king are both worth 10 but are not a pair.
    let mut tens = Hand::new(1, 10);
    tens.add_card(Card::new(Suit::Hearts, Rank::Ten));
    tens.add_card(Card::new(Suit::Clubs, Rank::King));
    assert!(!tens.can_split());

    let mut eleven = Hand::new(1, 10);
    eleven.add_card(Card::new(Suit::Hearts, Rank::Six));
    eleven.add_card(Card::new(Suit::Clubs, Rank::Five));
    assert!(eleven.can_double());
    eleven.add_card(Card::new(Suit::Clubs, Rank::Two));
    assert!(!eleven.can_double());
}

#[test]
fn hand_split_card_and_natural() {
    let mut hand = Hand::new(2, 10);
    hand.add_card(Card::new(Suit::Hearts, Rank::Ace));
    hand.add_card(Card::new(Suit::Spades, Rank::Ace));
    assert!(!hand.is_natural());

    let second = hand.take_split_card().unwrap();
    assert_eq!(second, Card::new(Suit::Spades, Rank::Ace));
    assert!(hand.is_from_split());
    assert_eq!(hand.len(), 1);
    assert!(hand.take_split_card().is_none());

    hand.add_card(Card::new(Suit::Hearts, Rank::King));
    assert_eq!(hand.value(), 21);
    assert!(!hand.is_natural());

    let mut sibling = Hand::from_split(second, 2, 10);
    assert_eq!(sibling.owner(), 2);
    assert_eq!(sibling.bet(), 10);
    sibling.add_card(Card::new(Suit::Clubs, Rank::Queen));
    assert!(!sibling.is_natural());

    let mut dealt = Hand::new(2, 10);
    dealt.add_card(Card::new(Suit::Hearts, Rank::Queen));
    dealt.add_card(Card::new(Suit::Hearts, Rank::Ace));
    assert!(dealt.is_natural());
}

#[test]
fn hand_busts_over_twenty_one() {
    let mut hand = Hand::new(1, 5);
    for card in cards("TT2") {
        hand.add_card(card);
    }
    assert_eq!(hand.status(), HandStatus::Bust);
}

#[test]
fn dealer_hand_visibility_and_values() {
    let mut dealer = DealerHand::new();
    dealer.add_card(Card::new(Suit::Hearts, Rank::Ace));
    dealer.add_card(Card::new(Suit::Clubs, Rank::Six));

    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_cards().len(), 1);
    assert_eq!(dealer.visible_value(), 11);

    dealer.reveal_hole();
    assert_eq!(dealer.visible_value(), 17);
    assert!(dealer.is_soft());
    assert!(!dealer.is_blackjack());

    dealer.clear();
    assert!(dealer.is_empty());
    assert!(!dealer.is_hole_revealed());
}

#[test]
fn action_parsing() {
    assert_eq!("hit".parse::<Action>(), Ok(Action::Hit));
    assert_eq!(" S ".parse::<Action>(), Ok(Action::Stand));
    assert_eq!("split".parse::<Action>(), Ok(Action::Split));
    assert_eq!("Double Down".parse::<Action>(), Ok(Action::DoubleDown));
    assert_eq!("d".parse::<Action>(), Ok(Action::DoubleDown));
    assert_eq!(
        "surrender".parse::<Action>(),
        Err(InputError::UnknownAction)
    );
    assert_eq!(Action::DoubleDown.to_string(), "double down");
}

#[test]
fn malformed_numbers_fall_back_to_default() {
    assert_eq!(parse_number("12"), Ok(12));
    assert_eq!(parse_number("-3"), Err(InputError::MalformedNumber));
    assert_eq!(parse_number("1.5"), Err(InputError::MalformedNumber));
    assert_eq!(parse_count("", 1), 1);
    assert_eq!(parse_count("two", 5), 5);
    assert_eq!(parse_count(" 40\n", 5), 40);
}
