//! One play-through: board, counters, timer and the flip/match state
//! machine.
//!
//! ## Flip Handling
//!
//! 1. Refuse the flip if the session is won, the flip-lock is closed, the
//!    position is off the board, or the card is not face-down.
//! 2. Start the timer on the first accepted flip.
//! 3. Turn the card face-up and buffer it.
//! 4. On the second buffered card: close the lock, count a move, and
//!    either settle the match at once or hand back a pending revert.
//!
//! The buffer holds at most two positions; the lock guarantees nothing is
//! added while two are waiting.

use log::{debug, info};
use smallvec::SmallVec;

use super::outcome::{FlipOutcome, FlipResult, IgnoreReason};
use super::resolution::{PendingResolution, ResolutionToken};
use super::state::{FlipLock, Scoreboard, SessionEpoch, SessionPhase};
use super::timer::GameTimer;
use crate::board::Board;
use crate::cards::CardState;
use crate::core::Timings;
use crate::signals::{CelebrationPlan, Signal, SoundCue};

/// State of one session.
///
/// Created fresh for every deal and discarded on reset; nothing carries
/// over between sessions.
#[derive(Clone, Debug)]
pub struct GameSession {
    epoch: SessionEpoch,
    board: Board,
    timings: Timings,
    phase: SessionPhase,
    timer: GameTimer,
    moves: u32,
    matched_pairs: u32,
    /// Face-up cards not yet resolved, in flip order.
    face_up: SmallVec<[usize; 2]>,
    lock: FlipLock,
    pending: Option<PendingResolution>,
    next_resolution: u32,
}

impl GameSession {
    /// Start a session on a freshly dealt board.
    #[must_use]
    pub fn new(board: Board, epoch: SessionEpoch, timings: Timings) -> Self {
        Self {
            epoch,
            board,
            timings,
            phase: SessionPhase::Idle,
            timer: GameTimer::new(),
            moves: 0,
            matched_pairs: 0,
            face_up: SmallVec::new(),
            lock: FlipLock::Open,
            pending: None,
            next_resolution: 0,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn epoch(&self) -> SessionEpoch {
        self.epoch
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn timer(&self) -> &GameTimer {
        &self.timer
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn matched_pairs(&self) -> u32 {
        self.matched_pairs
    }

    #[must_use]
    pub fn total_pairs(&self) -> u32 {
        self.board.pair_count() as u32
    }

    /// Positions currently face-up and unresolved.
    #[must_use]
    pub fn face_up(&self) -> &[usize] {
        &self.face_up
    }

    #[must_use]
    pub fn lock(&self) -> FlipLock {
        self.lock
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        !self.lock.is_open()
    }

    /// The mismatch waiting to be reverted, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingResolution> {
        self.pending.as_ref()
    }

    /// Current counters.
    #[must_use]
    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard {
            moves: self.moves,
            matched_pairs: self.matched_pairs,
            total_pairs: self.total_pairs(),
            elapsed_secs: self.timer.elapsed_secs(),
        }
    }

    // === Flip/Match ===

    /// Try to flip the card at `position`.
    pub fn attempt_flip(&mut self, position: usize) -> FlipResult {
        if let Some(reason) = self.flip_blocker(position) {
            debug!("Flip at {} ignored: {:?}", position, reason);
            return FlipResult::ignored(reason);
        }

        let Some(card) = self.board.card_mut(position) else {
            return FlipResult::ignored(IgnoreReason::OutOfRange);
        };
        if !card.reveal() {
            return FlipResult::ignored(IgnoreReason::AlreadyFaceUp);
        }
        let face = card.face;
        self.face_up.push(position);

        let mut signals = Vec::new();
        if self.phase == SessionPhase::Idle {
            self.phase = SessionPhase::Running;
            self.timer.start();
            signals.push(Signal::TimerStarted { epoch: self.epoch });
        }
        debug!("Flipped {} ({})", position, face);

        signals.push(Signal::PlaySound(SoundCue::Flip));
        signals.push(Signal::CardRevealed { position, face });

        if self.face_up.len() < 2 {
            return FlipResult {
                outcome: FlipOutcome::Revealed { position },
                signals,
            };
        }

        self.lock = FlipLock::Closed;
        self.moves += 1;
        let positions = [self.face_up[0], self.face_up[1]];

        let outcome = if self.is_pair(positions) {
            self.settle_match(positions, &mut signals)
        } else {
            self.defer_mismatch(positions, &mut signals)
        };

        FlipResult { outcome, signals }
    }

    /// Revert a mismatched pair.
    ///
    /// Returns `None` and changes nothing if `token` is not the pending
    /// resolution of this session.
    pub fn resolve(&mut self, token: ResolutionToken) -> Option<Vec<Signal>> {
        let pending = match self.pending {
            Some(p) if p.token == token => p,
            _ => {
                debug!("Stale resolution {} ignored", token);
                return None;
            }
        };

        self.pending = None;
        for position in pending.positions {
            if let Some(card) = self.board.card_mut(position) {
                card.conceal();
            }
        }
        self.face_up.clear();
        self.lock = FlipLock::Open;
        debug!("Resolved {} at {:?}", token, pending.positions);

        Some(vec![
            Signal::CardsConcealed {
                positions: pending.positions,
            },
            Signal::ErrorFlash {
                positions: pending.positions,
                duration_ms: self.timings.error_flash_ms,
            },
        ])
    }

    /// Advance the timer by one second.
    ///
    /// Ticks for another epoch, or while the timer is not running, are
    /// dropped.
    pub fn tick(&mut self, epoch: SessionEpoch) -> Option<Signal> {
        if epoch != self.epoch {
            return None;
        }
        self.timer
            .tick()
            .map(|elapsed_secs| Signal::TimerTicked { elapsed_secs })
    }

    /// Stop the timer before this session is discarded.
    pub fn cancel(&mut self) -> Option<Signal> {
        if self.timer.stop() {
            debug!("Cancelled timer for {}", self.epoch);
            Some(Signal::TimerStopped { epoch: self.epoch })
        } else {
            None
        }
    }

    // === Internals ===

    fn flip_blocker(&self, position: usize) -> Option<IgnoreReason> {
        if self.phase == SessionPhase::Won {
            return Some(IgnoreReason::GameOver);
        }
        if self.is_locked() {
            return Some(IgnoreReason::Locked);
        }
        match self.board.card(position).map(|c| c.state()) {
            None => Some(IgnoreReason::OutOfRange),
            Some(CardState::FaceUp) => Some(IgnoreReason::AlreadyFaceUp),
            Some(CardState::Matched) => Some(IgnoreReason::AlreadyMatched),
            Some(CardState::FaceDown) => None,
        }
    }

    fn is_pair(&self, [a, b]: [usize; 2]) -> bool {
        match (self.board.card(a), self.board.card(b)) {
            (Some(first), Some(second)) => first.matches(second),
            _ => false,
        }
    }

    fn settle_match(&mut self, positions: [usize; 2], signals: &mut Vec<Signal>) -> FlipOutcome {
        signals.push(Signal::PlaySound(SoundCue::Match));

        for position in positions {
            if let Some(card) = self.board.card_mut(position) {
                card.mark_matched();
            }
        }
        self.matched_pairs += 1;
        self.face_up.clear();
        self.lock = FlipLock::Open;

        signals.push(Signal::CardsMatched { positions });
        signals.push(Signal::CountersChanged(self.scoreboard()));
        signals.push(Signal::PulseMatches {
            duration_ms: self.timings.match_pulse_ms,
        });

        let won = self.check_win(signals);
        FlipOutcome::Matched { positions, won }
    }

    fn defer_mismatch(&mut self, positions: [usize; 2], signals: &mut Vec<Signal>) -> FlipOutcome {
        signals.push(Signal::PlaySound(SoundCue::Mismatch));
        signals.push(Signal::CountersChanged(self.scoreboard()));

        let pending = PendingResolution {
            token: ResolutionToken {
                epoch: self.epoch,
                seq: self.next_resolution,
            },
            positions,
            delay_ms: self.timings.mismatch_revert_ms,
        };
        self.next_resolution += 1;
        self.pending = Some(pending);

        signals.push(Signal::ScheduleResolution(pending));
        FlipOutcome::Mismatched(pending)
    }

    fn check_win(&mut self, signals: &mut Vec<Signal>) -> bool {
        if self.matched_pairs != self.total_pairs() {
            return false;
        }

        self.phase = SessionPhase::Won;
        self.timer.stop();
        info!(
            "Won in {} moves, {}s",
            self.moves,
            self.timer.elapsed_secs()
        );

        signals.push(Signal::TimerStopped { epoch: self.epoch });
        signals.push(Signal::PlaySound(SoundCue::Win));
        signals.push(Signal::Celebrate(CelebrationPlan::standard()));
        signals.push(Signal::ShowWinPanel {
            moves: self.moves,
            elapsed_secs: self.timer.elapsed_secs(),
            delay_ms: self.timings.win_panel_delay_ms,
        });
        true
    }
}
