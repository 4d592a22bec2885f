//! The memory game engine.

use log::{info, warn};

use crate::board::{Board, BoardGenerator};
use crate::cards::DeckSource;
use crate::core::{Difficulty, GameError, GameRng, SessionConfig};
use crate::session::{
    FlipResult, GameSession, ResolutionToken, Scoreboard, SessionEpoch,
};
use crate::signals::{Signal, SoundCue};

/// Memory game engine.
///
/// Owns the deck source, the RNG, the user preferences (difficulty, sound)
/// and the current `GameSession`. Every operation returns the signals its
/// collaborators should act on.
///
/// ## Example
///
/// ```
/// use memory_match::cards::StandardDeck;
/// use memory_match::core::SessionConfig;
/// use memory_match::engine::MemoryGame;
/// use memory_match::session::FlipOutcome;
///
/// let config = SessionConfig::new().with_seed(42);
/// let mut game = MemoryGame::new(config, StandardDeck::new()).unwrap();
///
/// let result = game.attempt_flip(0);
/// assert_eq!(result.outcome, FlipOutcome::Revealed { position: 0 });
/// assert_eq!(game.scoreboard().moves, 0);
/// ```
pub struct MemoryGame {
    config: SessionConfig,
    deck: Box<dyn DeckSource>,
    rng: GameRng,
    difficulty: Difficulty,
    sound_enabled: bool,
    session: GameSession,
}

impl MemoryGame {
    /// Create an engine and deal the first board.
    ///
    /// Fails with `GameError::InsufficientTokens` if the deck cannot fill
    /// the configured difficulty.
    pub fn new(config: SessionConfig, deck: impl DeckSource + 'static) -> Result<Self, GameError> {
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let difficulty = config.difficulty;
        let board = BoardGenerator::new(&deck).generate(difficulty.grid_size(), &mut rng)?;
        let session = GameSession::new(board, SessionEpoch::default(), config.timings);

        info!("New {} game (seed {})", difficulty, rng.seed());

        Ok(Self {
            sound_enabled: config.sound_enabled,
            config,
            deck: Box::new(deck),
            rng,
            difficulty,
            session,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.session.board()
    }

    #[must_use]
    pub fn scoreboard(&self) -> Scoreboard {
        self.session.scoreboard()
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Signals describing the current state from scratch.
    ///
    /// Used by a freshly attached presentation layer.
    #[must_use]
    pub fn announce(&self) -> Vec<Signal> {
        vec![
            Signal::DifficultySelected(self.difficulty),
            Signal::SoundToggled(self.sound_enabled),
            Signal::HideWinPanel,
            Signal::BoardDealt(self.board().clone()),
            Signal::CountersChanged(self.scoreboard()),
        ]
    }

    // === User Operations ===

    /// Start a new game. Same as `reset`.
    pub fn start(&mut self) -> Result<Vec<Signal>, GameError> {
        self.reset()
    }

    /// Start over after a win. Same as `reset`.
    pub fn play_again(&mut self) -> Result<Vec<Signal>, GameError> {
        self.reset()
    }

    /// Discard the session and deal a new board at the current difficulty.
    pub fn reset(&mut self) -> Result<Vec<Signal>, GameError> {
        let mut signals = vec![Signal::PlaySound(SoundCue::Select)];
        signals.extend(self.new_session(self.difficulty)?);
        Ok(signals)
    }

    /// Select a difficulty by its label (`"easy"` or `"medium"`).
    ///
    /// Unsupported labels are rejected without touching the session.
    pub fn set_difficulty(&mut self, level: &str) -> Result<Vec<Signal>, GameError> {
        let difficulty = level.parse::<Difficulty>().map_err(|e| {
            warn!("Rejected difficulty {:?}", level);
            e
        })?;
        self.select_difficulty(difficulty)
    }

    /// Select a difficulty and reset, even if it is already selected.
    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> Result<Vec<Signal>, GameError> {
        let mut signals = vec![Signal::PlaySound(SoundCue::Select)];
        let reset = self.new_session(difficulty)?;

        info!("Difficulty set to {}", difficulty);
        self.difficulty = difficulty;
        signals.push(Signal::DifficultySelected(difficulty));
        signals.extend(reset);
        Ok(signals)
    }

    /// Flip the global sound toggle.
    ///
    /// The select cue plays only when sound comes back on.
    pub fn toggle_sound(&mut self) -> Vec<Signal> {
        self.sound_enabled = !self.sound_enabled;
        info!("Sound {}", if self.sound_enabled { "on" } else { "off" });

        let mut signals = vec![Signal::SoundToggled(self.sound_enabled)];
        if self.sound_enabled {
            signals.push(Signal::PlaySound(SoundCue::Select));
        }
        signals
    }

    /// Try to flip the card at `position`.
    pub fn attempt_flip(&mut self, position: usize) -> FlipResult {
        self.session.attempt_flip(position)
    }

    /// Revert a mismatched pair once its delay has passed.
    ///
    /// Returns `None` for tokens that are stale or belong to a discarded
    /// session.
    pub fn resolve(&mut self, token: ResolutionToken) -> Option<Vec<Signal>> {
        self.session.resolve(token)
    }

    /// Deliver a timer tick issued under `epoch`.
    pub fn on_tick(&mut self, epoch: SessionEpoch) -> Option<Signal> {
        self.session.tick(epoch)
    }

    // === Internals ===

    /// Deal a board and swap in a new session.
    ///
    /// The board is dealt before the old session is touched, so a failure
    /// leaves everything as it was.
    fn new_session(&mut self, difficulty: Difficulty) -> Result<Vec<Signal>, GameError> {
        let board = BoardGenerator::new(self.deck.as_ref())
            .generate(difficulty.grid_size(), &mut self.rng)?;

        let mut signals = Vec::new();
        signals.extend(self.session.cancel());

        let epoch = self.session.epoch().next();
        self.session = GameSession::new(board, epoch, self.config.timings);
        info!("Session {} started on {} board", epoch, difficulty.grid_size());

        signals.push(Signal::HideWinPanel);
        signals.push(Signal::BoardDealt(self.board().clone()));
        signals.push(Signal::CountersChanged(self.scoreboard()));
        Ok(signals)
    }
}

impl std::fmt::Debug for MemoryGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryGame")
            .field("difficulty", &self.difficulty)
            .field("sound_enabled", &self.sound_enabled)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
