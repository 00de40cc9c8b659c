use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, instrument, warn};

use crate::config::Config;
use crate::error::MoveError;
use crate::game::board::{Board, Pos};
use crate::game::cascade;
use crate::game::hint::Hint;
use crate::game::sequencer::{
    AnimationSequencer, ClickGate, Phase, PhaseKind, SequencerEvent, SequencerState,
};
use crate::game::snapshot::Snapshot;
use crate::game::swap::try_swap;

/// What a click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Dropped because an animation is playing.
    Ignored,
    OutOfBounds,
    Selected(Pos),
    Deselected,
    SwapAccepted,
    SwapRejected(MoveError),
}

/// Things the front-end may want to react to after an update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    ScoreChanged(u32),
    HintShown(Hint),
    SwapReverted,
    Settled,
}

pub struct Game {
    board: Board,
    score: u32,
    selected: Option<Pos>,
    sequencer: AnimationSequencer,
    rng: StdRng,
}

impl Game {
    pub fn new(config: &Config) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let board = Board::random(&mut rng);
        Self::from_parts(config, board, rng)
    }

    /// Starts from a prepared board, e.g. one written with [`Board::from_rows`].
    pub fn with_board(config: &Config, board: Board) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::from_parts(config, board, rng)
    }

    fn from_parts(config: &Config, board: Board, rng: StdRng) -> Self {
        Self {
            board,
            score: 0,
            selected: None,
            sequencer: AnimationSequencer::new(config.timings),
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn selected(&self) -> Option<Pos> {
        self.selected
    }

    pub fn state(&self) -> SequencerState {
        self.sequencer.state()
    }

    pub fn hint(&self) -> Option<Hint> {
        self.sequencer.hint().map(|(hint, _)| hint)
    }

    /// Handles a click on a grid cell.
    ///
    /// Clicks during an animation are dropped. Otherwise the hint is cleared and
    /// the idle timer restarts, then the click selects a cell, attempts a swap
    /// with the selected neighbour, or clears a selection that is not adjacent.
    #[instrument(skip(self))]
    pub fn cell_clicked(&mut self, pos: Pos) -> ClickOutcome {
        if self.sequencer.on_click() == ClickGate::Dropped {
            return ClickOutcome::Ignored;
        }

        if !pos.in_bounds() {
            warn!(%pos, "click outside the board");
            return ClickOutcome::OutOfBounds;
        }

        match self.selected.take() {
            None => {
                self.selected = Some(pos);
                ClickOutcome::Selected(pos)
            }
            Some(first) if first.is_adjacent(pos) => self.attempt_swap(first, pos),
            Some(_) => ClickOutcome::Deselected,
        }
    }

    fn attempt_swap(&mut self, a: Pos, b: Pos) -> ClickOutcome {
        let timings = *self.sequencer.timings();
        let mut next = self.board;

        match try_swap(&mut next, a, b) {
            Ok(()) => {
                let cascade = cascade::resolve(&mut next, &mut self.rng);
                info!(
                    %a,
                    %b,
                    waves = cascade.waves.len(),
                    points = cascade.score_delta,
                    "swap accepted"
                );
                self.sequencer
                    .play(Phase::plan_accepted(a, b, &cascade, &timings));
                ClickOutcome::SwapAccepted
            }
            Err(MoveError::NoMatch) => {
                self.sequencer.play(Phase::plan_rejected(a, b, &timings));
                ClickOutcome::SwapRejected(MoveError::NoMatch)
            }
            Err(err) => {
                debug!(%err, "swap rejected");
                ClickOutcome::SwapRejected(err)
            }
        }
    }

    /// Advances animations and timers by `dt`.
    pub fn update(&mut self, dt: Duration) -> Vec<GameEvent> {
        let mut events = Vec::new();

        for event in self.sequencer.tick(dt, &mut self.board) {
            match event {
                SequencerEvent::PhaseCompleted { kind, points } => {
                    if points > 0 {
                        self.score += points;
                        info!(score = self.score, "score changed");
                        events.push(GameEvent::ScoreChanged(self.score));
                    }
                    if kind == PhaseKind::Revert {
                        events.push(GameEvent::SwapReverted);
                    }
                }
                SequencerEvent::Settled => events.push(GameEvent::Settled),
                SequencerEvent::HintShown(hint) => events.push(GameEvent::HintShown(hint)),
                SequencerEvent::HintUnavailable => {}
            }
        }

        events
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.board, &self.sequencer, self.selected, self.score)
    }

    /// Fresh board, zero score.
    pub fn reset(&mut self) {
        self.board = Board::random(&mut self.rng);
        self.score = 0;
        self.selected = None;
        self.sequencer.reset();
        info!("game reset");
    }
}
