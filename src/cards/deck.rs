//! Deck sources - where a board's faces come from.
//!
//! The board generator asks a `DeckSource` for its faces and picks the
//! pairs to deal from them. Sources may be a static list of names or a
//! procedural enumeration.
//!
//! ## Provided Sources
//!
//! - `StandardDeck`: The 54 named card images (52 cards plus two jokers)
//! - `StaticDeck`: Any list of names
//! - `NumberedDeck`: Faces named `1..=n`
//! - `SuitRankDeck`: Procedural suit × rank enumeration

use rustc_hash::FxHashSet;

use super::face::{Face, FaceId, Rank, Suit};

/// Supplier of candidate faces for a board.
pub trait DeckSource {
    /// All faces this source can deal, in a stable order.
    fn faces(&self) -> Vec<Face>;

    /// Faces with repeated ids removed, keeping the first definition.
    fn distinct_faces(&self) -> Vec<Face> {
        let mut seen = FxHashSet::default();
        self.faces()
            .into_iter()
            .filter(|f| seen.insert(f.id))
            .collect()
    }

    /// Number of distinct face ids available.
    fn distinct_count(&self) -> usize {
        self.distinct_faces().len()
    }
}

/// The standard image deck: every card of a 52-card deck plus two jokers.
///
/// Face names are the image file names, e.g. `ace_of_clubs.png`. Court
/// cards use the `2`-suffixed artwork (`jack_of_clubs2.png`).
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardDeck;

impl StandardDeck {
    /// Faces in this deck.
    pub const SIZE: usize = 54;

    /// Create the standard deck.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DeckSource for StandardDeck {
    fn faces(&self) -> Vec<Face> {
        let mut faces = Vec::with_capacity(Self::SIZE);
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                let suffix = if rank.is_court() { "2" } else { "" };
                let name = format!("{}_of_{}{}.png", rank.name(), suit.name(), suffix);
                faces.push(Face::new(FaceId::new(faces.len() as u32), name));
            }
        }
        for joker in ["red_joker.png", "black_joker.png"] {
            faces.push(Face::new(FaceId::new(faces.len() as u32), joker));
        }
        faces
    }
}

/// A deck built from an explicit list of names.
///
/// Ids are assigned by position. Repeated names still get distinct ids.
#[derive(Clone, Debug, Default)]
pub struct StaticDeck {
    names: Vec<String>,
}

impl StaticDeck {
    /// Create a deck from face names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of names in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Is the deck empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl DeckSource for StaticDeck {
    fn faces(&self) -> Vec<Face> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| Face::new(FaceId::new(i as u32), name.clone()))
            .collect()
    }

    fn distinct_count(&self) -> usize {
        self.names.len()
    }
}

/// Numeric faces `1..=count`.
#[derive(Clone, Copy, Debug)]
pub struct NumberedDeck {
    count: u32,
}

impl NumberedDeck {
    /// Create a deck of `count` numbered faces.
    #[must_use]
    pub const fn new(count: u32) -> Self {
        Self { count }
    }
}

impl DeckSource for NumberedDeck {
    fn faces(&self) -> Vec<Face> {
        (1..=self.count)
            .map(|n| Face::new(FaceId::new(n), n.to_string()))
            .collect()
    }

    fn distinct_count(&self) -> usize {
        self.count as usize
    }
}

/// Procedural suit × rank deck without jokers.
///
/// Face names are short codes like `AS`, `10H`, `QC`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SuitRankDeck;

impl SuitRankDeck {
    fn code(rank: Rank, suit: Suit) -> String {
        let rank = match rank {
            Rank::Ace => "A".to_string(),
            Rank::Jack => "J".to_string(),
            Rank::Queen => "Q".to_string(),
            Rank::King => "K".to_string(),
            pip => (pip as u8).to_string(),
        };
        let suit = match suit {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };
        format!("{rank}{suit}")
    }
}

impl DeckSource for SuitRankDeck {
    fn faces(&self) -> Vec<Face> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| (suit, rank)))
            .enumerate()
            .map(|(i, (suit, rank))| Face::new(FaceId::new(i as u32), Self::code(rank, suit)))
            .collect()
    }
}

impl<D: DeckSource + ?Sized> DeckSource for Box<D> {
    fn faces(&self) -> Vec<Face> {
        (**self).faces()
    }

    fn distinct_faces(&self) -> Vec<Face> {
        (**self).distinct_faces()
    }

    fn distinct_count(&self) -> usize {
        (**self).distinct_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_deck_size() {
        let faces = StandardDeck::new().faces();
        assert_eq!(faces.len(), StandardDeck::SIZE);
        assert_eq!(StandardDeck.distinct_count(), 54);
    }

    #[test]
    fn test_standard_deck_names() {
        let faces = StandardDeck::new().faces();
        let names: Vec<_> = faces.iter().map(|f| f.name.as_str()).collect();

        assert_eq!(names[0], "ace_of_clubs.png");
        assert_eq!(names[3], "ace_of_spades.png");
        assert_eq!(names[4], "2_of_clubs.png");
        assert!(names.contains(&"10_of_diamonds.png"));
        assert!(names.contains(&"jack_of_hearts2.png"));
        assert!(names.contains(&"king_of_spades2.png"));
        assert_eq!(names[52], "red_joker.png");
        assert_eq!(names[53], "black_joker.png");
    }

    #[test]
    fn test_standard_deck_unique_names() {
        let faces = StandardDeck::new().faces();
        let unique: FxHashSet<_> = faces.iter().map(|f| f.name.clone()).collect();
        assert_eq!(unique.len(), faces.len());
    }

    #[test]
    fn test_static_deck() {
        let deck = StaticDeck::new(["A", "B", "C"]);
        assert_eq!(deck.len(), 3);
        assert!(!deck.is_empty());

        let faces = deck.faces();
        assert_eq!(faces[1], Face::new(FaceId::new(1), "B"));
        assert_eq!(deck.distinct_count(), 3);
    }

    #[test]
    fn test_numbered_deck() {
        let deck = NumberedDeck::new(8);
        let faces = deck.faces();
        assert_eq!(faces.len(), 8);
        assert_eq!(faces[0].name, "1");
        assert_eq!(faces[7].id, FaceId::new(8));
        assert_eq!(deck.distinct_count(), 8);
    }

    #[test]
    fn test_suit_rank_deck() {
        let faces = SuitRankDeck.faces();
        assert_eq!(faces.len(), 52);
        assert_eq!(faces[0].name, "AC");
        assert_eq!(faces[9].name, "10C");
        assert_eq!(faces[51].name, "KS");
    }

    /// A source that repeats ids counts each id once and keeps its first face.
    #[test]
    fn test_distinct_count_dedups_ids() {
        struct Repeating;
        impl DeckSource for Repeating {
            fn faces(&self) -> Vec<Face> {
                vec![
                    Face::new(FaceId::new(1), "x"),
                    Face::new(FaceId::new(1), "later"),
                    Face::new(FaceId::new(2), "y"),
                ]
            }
        }

        assert_eq!(Repeating.distinct_count(), 2);

        let faces = Repeating.distinct_faces();
        assert_eq!(faces.len(), 2);
        assert_eq!(faces[0], Face::new(FaceId::new(1), "x"));
        assert_eq!(faces[1].id, FaceId::new(2));
    }

    #[test]
    fn test_boxed_source() {
        let deck: Box<dyn DeckSource> = Box::new(NumberedDeck::new(4));
        assert_eq!(deck.faces().len(), 4);
        assert_eq!(deck.distinct_count(), 4);
    }
}
