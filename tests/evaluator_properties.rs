use holdem_equity::{best_hand, evaluate, evaluate_best_hand, parse_cards, Card, Category, Score};

fn five(codes: &str) -> [Card; 5] {
    let v = parse_cards(codes).unwrap();
    [v[0], v[1], v[2], v[3], v[4]]
}

/// One canonical hand per category, weakest first.
const LADDER: [(&str, Category); 10] = [
    ("2C 9D AH 8S 6D", Category::HighCard),
    ("4C 4D AH 8S 6D", Category::OnePair),
    ("KC KD 3C 3D 9S", Category::TwoPair),
    ("9C 9D 9H 2S KD", Category::ThreeOfAKind),
    ("9C TD JH QS KC", Category::Straight),
    ("2H 7H 9H JH KH", Category::Flush),
    ("3C 3D KH KS 3S", Category::FullHouse),
    ("7C 7D 7H 7S 2C", Category::FourOfAKind),
    ("9S TS JS QS KS", Category::StraightFlush),
    ("AS KS QS JS TS", Category::RoyalFlush),
];

fn permutations(hand: [Card; 5]) -> Vec<[Card; 5]> {
    let mut out = Vec::with_capacity(120);
    let mut idx = [0usize, 1, 2, 3, 4];
    // Heap's algorithm
    let mut c = [0usize; 5];
    out.push(idx.map(|i| hand[i]));
    let mut i = 0;
    while i < 5 {
        if c[i] < i {
            if i % 2 == 0 {
                idx.swap(0, i);
            } else {
                idx.swap(c[i], i);
            }
            out.push(idx.map(|i| hand[i]));
            c[i] += 1;
            i = 0;
        } else {
            c[i] = 0;
            i += 1;
        }
    }
    out
}

#[test]
fn score_ignores_card_order() {
    for (codes, _) in LADDER {
        let hand = five(codes);
        let expected = evaluate(&hand);
        let perms = permutations(hand);
        assert_eq!(perms.len(), 120);
        for p in perms {
            assert_eq!(evaluate(&p), expected, "{codes}");
        }
    }
}

#[test]
fn categories_are_totally_ordered() {
    let scores: Vec<Score> = LADDER
        .iter()
        .map(|(codes, cat)| {
            let s = evaluate(&five(codes));
            assert_eq!(s.category(), *cat, "{codes}");
            assert_eq!(s.category().value(), *cat as u8);
            s
        })
        .collect();
    for i in 0..scores.len() {
        for j in 0..scores.len() {
            assert_eq!(scores[i].cmp(&scores[j]), i.cmp(&j), "{i} vs {j}");
        }
    }
}

#[test]
fn wheel_is_the_lowest_straight() {
    let wheel = evaluate(&five("AC 2D 3H 4S 5C"));
    assert_eq!(wheel.category(), Category::Straight);
    assert_eq!(wheel.tiebreakers()[0], 5);
    assert!(wheel < evaluate(&five("2C 3D 4H 5S 6C")));
    assert!(wheel > evaluate(&five("AC AD KH QS JC")));
}

#[test]
fn spec_examples() {
    let royal = evaluate(&five("AS KS QS JS TS"));
    assert_eq!(royal.category().value(), 10);
    assert_eq!(royal.tiebreakers(), [14, 13, 12, 11, 10]);

    let quads = evaluate(&five("7C 7D 7H 7S 2C"));
    assert_eq!(quads.category().value(), 8);
    assert_eq!(quads.tiebreakers(), [7, 7, 7, 7, 2]);

    let kings_up = evaluate(&five("KC KD 3C 3D 9S"));
    let queens_up = evaluate(&five("QC QD JC JD AS"));
    assert!(kings_up > queens_up);
}

#[test]
fn kickers_decide_equal_pairs() {
    let a = evaluate(&five("8C 8D AH 5S 3D"));
    let b = evaluate(&five("8H 8S KH QS JD"));
    assert!(a > b);
    let c = evaluate(&five("8H 8S AD 5C 3C"));
    assert_eq!(a, c);
}

#[test]
fn best_of_seven_dominates_every_subset() {
    let hands = [
        "AS KS 2D QS 7C JS TS",
        "2C 2D 9H 9S 9C KD 3H",
        "4C 5D 6H 7S 8C AD AH",
        "KC KD 3C 3D 9S 9H 2C",
        "2H 7H 9H JH KH 8C 8D",
    ];
    for codes in hands {
        let cards = parse_cards(codes).unwrap();
        let best = best_hand(&cards);
        let mut hit = false;
        for a in 0..7 {
            for b in a + 1..7 {
                for c in b + 1..7 {
                    for d in c + 1..7 {
                        for e in d + 1..7 {
                            let s = evaluate(&[cards[a], cards[b], cards[c], cards[d], cards[e]]);
                            assert!(best >= s, "{codes}");
                            hit |= best == s;
                        }
                    }
                }
            }
        }
        assert!(hit, "{codes}");
        assert_eq!(evaluate_best_hand(&cards), Ok(best));
    }
}

#[test]
fn two_pair_from_seven_keeps_top_two_pairs() {
    let cards = parse_cards("KC KD 3C 3D 9S 9H 2C").unwrap();
    let s = best_hand(&cards);
    assert_eq!(s.category(), Category::TwoPair);
    assert_eq!(s.tiebreakers(), [13, 13, 9, 9, 3]);
}
