use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents one of the four suits in a standard 52-card deck.
///
/// Declaration order is the suit priority used both for sorting a hand and
/// for breaking value ties: Diamonds < Clubs < Hearts < Spades.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    /// Diamonds suit (♦), lowest priority
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠), highest priority
    Spades,
}

impl Suit {
    pub fn letter(self) -> char {
        match self {
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }
}

/// Represents the rank of a card under the two-ranked-high convention.
///
/// Discriminants are the rank strength: Three is the weakest card (3) and
/// Two the strongest (15).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "3")]
    Three = 3,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "A")]
    Ace,
    /// Two ranks above the Ace (15)
    #[serde(rename = "2")]
    Two,
}

impl Rank {
    /// Rank strength, 3 for Three up to 15 for Two.
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
        }
    }
}

/// Represents a single playing card with a suit and rank.
///
/// The derived ordering compares suit first and rank second, which is the
/// order a dealt hand is sorted in. Use [`compare_by_value`] when the card's
/// strength matters more than its suit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card
    pub suit: Suit,
    /// The rank of the card (Three through Two)
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.letter())
    }
}

/// The card every seating scan looks for first.
pub const THREE_OF_DIAMONDS: Card = Card::new(Suit::Diamonds, Rank::Three);

pub fn all_suits() -> [Suit; 4] {
    [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}

/// Strength order: value ascending, equal values broken by suit priority.
///
/// ```
/// use std::cmp::Ordering;
/// use cardtable_engine::cards::{compare_by_value, Card, Rank, Suit};
///
/// let four_d = Card::new(Suit::Diamonds, Rank::Four);
/// let four_c = Card::new(Suit::Clubs, Rank::Four);
/// let two_d = Card::new(Suit::Diamonds, Rank::Two);
/// assert_eq!(compare_by_value(&four_d, &four_c), Ordering::Less);
/// assert_eq!(compare_by_value(&two_d, &four_c), Ordering::Greater);
/// ```
pub fn compare_by_value(a: &Card, b: &Card) -> Ordering {
    a.value().cmp(&b.value()).then(a.suit.cmp(&b.suit))
}

/// Sorts a hand by suit priority, then ascending value.
pub fn sort_hand(cards: &mut [Card]) {
    cards.sort();
}
