//! The board: a square grid of paired cards.
//!
//! Cards are stored row-major in an `im::Vector`, so handing a snapshot to
//! the presentation layer is an O(1) clone.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardState, Face, FaceId};
use crate::core::{GameError, GridSize};

/// An ordered grid of cards in which every face appears exactly twice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: GridSize,
    cards: Vector<Card>,
    /// Definitions of the faces dealt on this board, sorted by id.
    faces: Vec<Face>,
}

impl Board {
    /// Build a board from an explicit layout.
    ///
    /// `layout[i]` is the face at position `i`. The layout must fill the
    /// grid and use each face exactly twice, and every face must have a
    /// definition in `faces`.
    pub fn from_layout(grid: GridSize, layout: &[FaceId], faces: &[Face]) -> Result<Self, GameError> {
        if layout.len() != grid.card_count() {
            return Err(GameError::InvalidLayout(format!(
                "{} grid needs {} cards, layout has {}",
                grid,
                grid.card_count(),
                layout.len()
            )));
        }

        let mut counts: FxHashMap<FaceId, usize> = FxHashMap::default();
        for &face in layout {
            *counts.entry(face).or_insert(0) += 1;
        }
        if let Some((face, count)) = counts.iter().find(|(_, &count)| count != 2) {
            return Err(GameError::InvalidLayout(format!(
                "{face} appears {count} times"
            )));
        }

        let mut used: Vec<Face> = Vec::with_capacity(counts.len());
        for id in counts.keys() {
            let face = faces
                .iter()
                .find(|f| f.id == *id)
                .ok_or_else(|| GameError::InvalidLayout(format!("no definition for {id}")))?;
            used.push(face.clone());
        }
        used.sort_by_key(|f| f.id);

        let cards = layout
            .iter()
            .enumerate()
            .map(|(position, &face)| Card::new(position, face))
            .collect();

        Ok(Self {
            grid,
            cards,
            faces: used,
        })
    }

    /// Grid dimension.
    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the board empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.grid.pair_count()
    }

    /// Card at a position.
    #[must_use]
    pub fn card(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    pub(crate) fn card_mut(&mut self, position: usize) -> Option<&mut Card> {
        self.cards.get_mut(position)
    }

    /// Iterate over cards in position order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Faces dealt on this board, sorted by id.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Look up a face definition.
    #[must_use]
    pub fn face(&self, id: FaceId) -> Option<&Face> {
        self.faces.iter().find(|f| f.id == id)
    }

    /// Face ids in position order.
    #[must_use]
    pub fn layout(&self) -> Vec<FaceId> {
        self.cards.iter().map(|c| c.face).collect()
    }

    /// Positions holding a face.
    #[must_use]
    pub fn positions_of(&self, face: FaceId) -> Vec<usize> {
        self.cards
            .iter()
            .filter(|c| c.face == face)
            .map(|c| c.position)
            .collect()
    }

    /// Count cards per face.
    #[must_use]
    pub fn face_counts(&self) -> FxHashMap<FaceId, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.face).or_insert(0) += 1;
        }
        counts
    }

    /// Count cards in a given state.
    #[must_use]
    pub fn count_in_state(&self, state: CardState) -> usize {
        self.cards.iter().filter(|c| c.state() == state).count()
    }

    /// Have all cards been matched?
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faces(n: u32) -> Vec<Face> {
        (0..n).map(|i| Face::new(FaceId::new(i), format!("f{i}"))).collect()
    }

    fn paired_layout(pairs: u32) -> Vec<FaceId> {
        (0..pairs).flat_map(|i| [FaceId::new(i), FaceId::new(i)]).collect()
    }

    #[test]
    fn test_from_layout() {
        let board = Board::from_layout(GridSize::FOUR, &paired_layout(8), &faces(8)).unwrap();

        assert_eq!(board.len(), 16);
        assert_eq!(board.pair_count(), 8);
        assert_eq!(board.faces().len(), 8);
        assert_eq!(board.card(2).unwrap().face, FaceId::new(1));
        assert_eq!(board.positions_of(FaceId::new(3)), vec![6, 7]);
        assert_eq!(board.count_in_state(CardState::FaceDown), 16);
        assert!(!board.is_cleared());
    }

    #[test]
    fn test_positions_match_indices() {
        let board = Board::from_layout(GridSize::FOUR, &paired_layout(8), &faces(8)).unwrap();
        for (i, card) in board.cards().enumerate() {
            assert_eq!(card.position, i);
        }
    }

    #[test]
    fn test_from_layout_wrong_size() {
        let result = Board::from_layout(GridSize::SIX, &paired_layout(8), &faces(8));
        assert!(matches!(result, Err(GameError::InvalidLayout(_))));
    }

    #[test]
    fn test_from_layout_rejects_triples() {
        let mut layout = paired_layout(8);
        layout[0] = FaceId::new(1);
        let result = Board::from_layout(GridSize::FOUR, &layout, &faces(8));
        assert!(matches!(result, Err(GameError::InvalidLayout(_))));
    }

    #[test]
    fn test_from_layout_missing_definition() {
        let result = Board::from_layout(GridSize::FOUR, &paired_layout(8), &faces(7));
        assert!(matches!(result, Err(GameError::InvalidLayout(_))));
    }

    #[test]
    fn test_face_lookup() {
        let board = Board::from_layout(GridSize::FOUR, &paired_layout(8), &faces(8)).unwrap();
        assert_eq!(board.face(FaceId::new(4)).unwrap().name, "f4");
        assert!(board.face(FaceId::new(99)).is_none());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut board = Board::from_layout(GridSize::FOUR, &paired_layout(8), &faces(8)).unwrap();
        let snapshot = board.clone();

        board.card_mut(0).unwrap().reveal();

        assert_eq!(board.card(0).unwrap().state(), CardState::FaceUp);
        assert_eq!(snapshot.card(0).unwrap().state(), CardState::FaceDown);
    }
}
