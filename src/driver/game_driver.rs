//! Binding layer between the engine and its collaborators.
//!
//! `GameDriver` turns user input into engine calls and routes the returned
//! signals: cues to the `SoundBoard`, bursts to the `CelebrationSink`,
//! delays to the `VirtualClock`, and everything else to the `Presenter`.
//! A real UI advances the clock from its animation frame or interval
//! callback; tests advance it directly.

use log::debug;

use super::clock::{Deferred, JobId, VirtualClock};
use crate::core::{Difficulty, GameError};
use crate::engine::MemoryGame;
use crate::session::{FlipOutcome, SessionEpoch};
use crate::signals::{AudioSink, CelebrationSink, Signal, SoundBoard};

/// Renders game state.
pub trait Presenter {
    /// React to a render-affecting signal.
    fn present(&mut self, signal: &Signal);
}

/// Drives a `MemoryGame` in virtual time.
pub struct GameDriver<P, A, C> {
    game: MemoryGame,
    presenter: P,
    sound: SoundBoard<A>,
    celebration: C,
    clock: VirtualClock,
    /// The scheduled tick of the running timer.
    tick_job: Option<(SessionEpoch, JobId)>,
}

impl<P, A, C> GameDriver<P, A, C>
where
    P: Presenter,
    A: AudioSink,
    C: CelebrationSink,
{
    /// Attach collaborators and present the current state.
    pub fn new(game: MemoryGame, presenter: P, audio: A, celebration: C) -> Self {
        let sound = SoundBoard::new(audio, game.sound_enabled());
        let mut driver = Self {
            game,
            presenter,
            sound,
            celebration,
            clock: VirtualClock::new(),
            tick_job: None,
        };
        let signals = driver.game.announce();
        driver.dispatch(signals);
        driver
    }

    // === Accessors ===

    pub fn game(&self) -> &MemoryGame {
        &self.game
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn sound(&self) -> &SoundBoard<A> {
        &self.sound
    }

    pub fn celebration(&self) -> &C {
        &self.celebration
    }

    pub fn clock(&self) -> &VirtualClock {
        &self.clock
    }

    /// Current virtual time.
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    // === Input ===

    /// The player clicked the card at `position`.
    pub fn click(&mut self, position: usize) -> FlipOutcome {
        let result = self.game.attempt_flip(position);
        self.dispatch(result.signals);
        result.outcome
    }

    /// Start button.
    pub fn start(&mut self) -> Result<(), GameError> {
        let signals = self.game.start()?;
        self.dispatch(signals);
        Ok(())
    }

    /// Reset button.
    pub fn reset(&mut self) -> Result<(), GameError> {
        let signals = self.game.reset()?;
        self.dispatch(signals);
        Ok(())
    }

    /// Play-again button on the win panel.
    pub fn play_again(&mut self) -> Result<(), GameError> {
        let signals = self.game.play_again()?;
        self.dispatch(signals);
        Ok(())
    }

    /// A difficulty button, by its id.
    pub fn set_difficulty(&mut self, level: &str) -> Result<Difficulty, GameError> {
        let signals = self.game.set_difficulty(level)?;
        self.dispatch(signals);
        Ok(self.game.difficulty())
    }

    /// Sound toggle button.
    pub fn toggle_sound(&mut self) -> bool {
        let signals = self.game.toggle_sound();
        self.dispatch(signals);
        self.game.sound_enabled()
    }

    // === Time ===

    /// Advance virtual time by `ms`, running every job that falls due.
    pub fn advance(&mut self, ms: u64) {
        let until = self.clock.now_ms() + ms;
        while let Some(job) = self.clock.pop_due(until) {
            self.run(job);
        }
        self.clock.set_now(until);
    }

    // === Routing ===

    fn dispatch(&mut self, signals: Vec<Signal>) {
        let timings = self.game.config().timings;
        let epoch = self.game.session().epoch();

        for signal in signals {
            match signal {
                Signal::PlaySound(cue) => {
                    self.sound.play(cue);
                }
                Signal::SoundToggled(enabled) => {
                    self.sound.set_enabled(enabled);
                    self.presenter.present(&signal);
                }
                Signal::Celebrate(plan) => {
                    for burst in plan.bursts {
                        self.clock
                            .schedule(burst.offset_ms, Deferred::FireBurst { epoch, burst });
                    }
                }
                Signal::ScheduleResolution(pending) => {
                    self.clock
                        .schedule(pending.delay_ms, Deferred::Resolve(pending.token));
                }
                Signal::TimerStarted { epoch: started } => {
                    let job = self
                        .clock
                        .schedule(timings.tick_interval_ms, Deferred::Tick(started));
                    self.tick_job = Some((started, job));
                    self.presenter.present(&signal);
                }
                Signal::TimerStopped { epoch: stopped } => {
                    if let Some((running, job)) = self.tick_job {
                        if running == stopped {
                            self.clock.cancel(job);
                            self.tick_job = None;
                        }
                    }
                    self.presenter.present(&signal);
                }
                Signal::ErrorFlash {
                    positions,
                    duration_ms,
                } => {
                    self.presenter.present(&signal);
                    self.clock
                        .schedule(duration_ms, Deferred::ClearErrorFlash { epoch, positions });
                }
                Signal::PulseMatches { duration_ms } => {
                    self.presenter.present(&signal);
                    self.clock.schedule(duration_ms, Deferred::EndPulse(epoch));
                }
                Signal::ShowWinPanel {
                    moves,
                    elapsed_secs,
                    delay_ms,
                } => {
                    self.clock.schedule(
                        delay_ms,
                        Deferred::ShowWinPanel {
                            epoch,
                            moves,
                            elapsed_secs,
                        },
                    );
                }
                other => self.presenter.present(&other),
            }
        }

        // Zero-delay jobs (the first confetti burst) run right away
        let now = self.clock.now_ms();
        while let Some(job) = self.clock.pop_due(now) {
            self.run(job);
        }
    }

    fn run(&mut self, job: Deferred) {
        if job.epoch() != self.game.session().epoch() {
            debug!("Dropping {:?} from a discarded session", job);
            return;
        }

        match job {
            Deferred::Tick(epoch) => {
                if let Some(signal) = self.game.on_tick(epoch) {
                    self.presenter.present(&signal);
                    let interval = self.game.config().timings.tick_interval_ms;
                    let job = self.clock.schedule(interval, Deferred::Tick(epoch));
                    self.tick_job = Some((epoch, job));
                } else {
                    debug!("Timer for {} no longer running", epoch);
                }
            }
            Deferred::Resolve(token) => {
                if let Some(signals) = self.game.resolve(token) {
                    self.dispatch(signals);
                }
            }
            Deferred::ClearErrorFlash { positions, .. } => {
                self.presenter
                    .present(&Signal::ErrorFlashCleared { positions });
            }
            Deferred::EndPulse(_) => self.presenter.present(&Signal::PulseEnded),
            Deferred::ShowWinPanel {
                moves,
                elapsed_secs,
                ..
            } => {
                self.presenter.present(&Signal::ShowWinPanel {
                    moves,
                    elapsed_secs,
                    delay_ms: 0,
                });
            }
            Deferred::FireBurst { burst, .. } => self.celebration.fire(&burst),
        }
    }
}

/// A presenter that records everything it is shown.
impl Presenter for Vec<Signal> {
    fn present(&mut self, signal: &Signal) {
        self.push(signal.clone());
    }
}
