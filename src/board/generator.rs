//! Board generation: pick faces, pair them, shuffle.

use log::{debug, warn};

use super::grid::Board;
use crate::cards::{DeckSource, FaceId};
use crate::core::{GameError, GameRng, GridSize};

/// Deals boards from a deck source.
///
/// ## Example
///
/// ```
/// use memory_match::board::BoardGenerator;
/// use memory_match::cards::StandardDeck;
/// use memory_match::core::{GameRng, GridSize};
///
/// let deck = StandardDeck::new();
/// let mut rng = GameRng::new(42);
/// let board = BoardGenerator::new(&deck).generate(GridSize::SIX, &mut rng).unwrap();
///
/// assert_eq!(board.len(), 36);
/// assert!(board.face_counts().values().all(|&n| n == 2));
/// ```
pub struct BoardGenerator<'a> {
    deck: &'a dyn DeckSource,
}

impl<'a> BoardGenerator<'a> {
    /// Create a generator over a deck source.
    pub fn new(deck: &'a dyn DeckSource) -> Self {
        Self { deck }
    }

    /// Deal a fresh board.
    ///
    /// Selects `grid.pair_count()` distinct faces uniformly at random, adds
    /// each twice, and shuffles the result. Fails with
    /// `GameError::InsufficientTokens` if the deck has too few distinct
    /// faces; no partial board is produced.
    pub fn generate(&self, grid: GridSize, rng: &mut GameRng) -> Result<Board, GameError> {
        let candidates = self.deck.distinct_faces();
        let required = grid.pair_count();

        if candidates.len() < required {
            warn!(
                "Deck too small for {} board: need {} faces, have {}",
                grid,
                required,
                candidates.len()
            );
            return Err(GameError::InsufficientTokens {
                required,
                available: candidates.len(),
            });
        }

        let selected = rng
            .sample(&candidates, required)
            .ok_or(GameError::InsufficientTokens {
                required,
                available: candidates.len(),
            })?;

        let mut layout: Vec<FaceId> = selected.iter().flat_map(|f| [f.id, f.id]).collect();
        rng.shuffle(&mut layout);

        debug!("Dealt {} board with {} pairs", grid, required);
        Board::from_layout(grid, &layout, &selected)
    }
}
