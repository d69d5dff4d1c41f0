use holdem_table::cards::{parse_cards, Rank};
use holdem_table::evaluator::{compare, evaluate, Category, EvalError, Evaluation};
use std::cmp::Ordering;

fn eval(s: &str) -> Evaluation {
    evaluate(&parse_cards(s).unwrap()).unwrap()
}

fn key(e: &Evaluation) -> Vec<Rank> {
    e.tie_break.as_slice().to_vec()
}

#[test]
fn full_house_of_twos_over_sevens() {
    let e = eval("2h 2s 2d 7c 7d Kh 3s");
    assert_eq!(e.category, Category::FullHouse);
    assert_eq!(key(&e), vec![Rank::Two, Rank::Seven]);
}

#[test]
fn wheel_is_a_five_high_straight() {
    let e = eval("Ah 2h 3h 4h 5d 9c Ks");
    assert_eq!(e.category, Category::Straight);
    assert_eq!(key(&e), vec![Rank::Five]);
}

#[test]
fn king_high_straight_flush() {
    let e = eval("9h 10h Jh Qh Kh 2c 3d");
    assert_eq!(e.category, Category::StraightFlush);
    assert_eq!(key(&e), vec![Rank::King]);
}

#[test]
fn flush_keeps_five_highest_of_suit() {
    let e = eval("As Ks Qs Js 9s 2h 3h");
    assert_eq!(e.category, Category::Flush);
    assert_eq!(key(&e), vec![Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]);

    let six_suited = eval("As Ks Qs Js 9s 2s 3h");
    assert_eq!(key(&six_suited), key(&e));
}

#[test]
fn quads_take_the_best_kicker() {
    let e = eval("9c 9d 9h 9s Ac Kd 2h");
    assert_eq!(e.category, Category::FourOfAKind);
    assert_eq!(key(&e), vec![Rank::Nine, Rank::Ace]);
}

#[test]
fn quads_with_board_trips_still_kick_high() {
    let e = eval("5c 5d 5h 5s Kc Kd Kh");
    assert_eq!(e.category, Category::FourOfAKind);
    assert_eq!(key(&e), vec![Rank::Five, Rank::King]);
}

#[test]
fn two_trips_make_a_full_house_with_the_higher_on_top() {
    let e = eval("Jc Jd Jh 4s 4c 4d 2h");
    assert_eq!(e.category, Category::FullHouse);
    assert_eq!(key(&e), vec![Rank::Jack, Rank::Four]);
}

#[test]
fn higher_run_wins_over_the_wheel() {
    let e = eval("Ah 2d 3c 4s 5h 6d Kc");
    assert_eq!(e.category, Category::Straight);
    assert_eq!(key(&e), vec![Rank::Six]);
}

#[test]
fn straight_and_flush_of_different_cards_is_only_a_flush() {
    let e = eval("5h 6h 7h 8d 9c Kh 2h");
    assert_eq!(e.category, Category::Flush);
    assert_eq!(key(&e), vec![Rank::King, Rank::Seven, Rank::Six, Rank::Five, Rank::Two]);
}

#[test]
fn steel_wheel() {
    let e = eval("Ad 2d 3d 4d 5d Kc Qh");
    assert_eq!(e.category, Category::StraightFlush);
    assert_eq!(key(&e), vec![Rank::Five]);
}

#[test]
fn grouped_categories_keep_short_keys() {
    let trips = eval("8c 8d 8h Ks 4c 3d 2h");
    assert_eq!(trips.category, Category::ThreeOfAKind);
    assert_eq!(key(&trips), vec![Rank::Eight, Rank::King, Rank::Four]);

    let two_pair = eval("Kc Kd 4h 4s Ac 3d 2h");
    assert_eq!(two_pair.category, Category::TwoPair);
    assert_eq!(key(&two_pair), vec![Rank::King, Rank::Four, Rank::Ace]);

    let pair = eval("Qc Qd 9h 7s 4c 3d 2h");
    assert_eq!(pair.category, Category::OnePair);
    assert_eq!(key(&pair), vec![Rank::Queen, Rank::Nine, Rank::Seven, Rank::Four]);

    let high = eval("Ac Jd 9h 7s 4c 3d 2h");
    assert_eq!(high.category, Category::HighCard);
    assert_eq!(key(&high), vec![Rank::Ace, Rank::Jack, Rank::Nine, Rank::Seven, Rank::Four]);
}

#[test]
fn compare_orders_across_categories() {
    let flush = parse_cards("As Ks Qs Js 9s 2h 3h").unwrap();
    let straight = parse_cards("Ah 2h 3h 4h 5d 9c Ks").unwrap();
    assert_eq!(compare(&flush, &straight), Ok(Ordering::Greater));
    assert_eq!(compare(&straight, &flush), Ok(Ordering::Less));
}

#[test]
fn wrong_sizes_fail() {
    let five = parse_cards("As Ks Qs Js 9s").unwrap();
    assert_eq!(evaluate(&five), Err(EvalError::InvalidHandSize(5)));
}
