use std::collections::VecDeque;
use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::constants::{
    FADE_IN_MS, FADE_OUT_MS, FALL_MS, HINT_DELAY_SECS, HINT_PULSE_MS, REVERT_GLIDE_MS,
    SWAP_GLIDE_MS,
};
use crate::game::board::{Board, Pos};
use crate::game::cascade::{Cascade, CascadeEvent};
use crate::game::hint::{find_hint_move, Hint};

/// What the sequencer is doing, as seen from outside.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequencerState {
    Idle,
    SwapAnimating,
    Reverting,
    Cascading,
    HintPulsing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseKind {
    SwapGlide,
    Revert,
    FadeOut,
    Fall,
    FadeIn,
}

/// A board change carried by a phase and applied when the phase completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Swap { a: Pos, b: Pos },
    Cascade(CascadeEvent),
}

impl Step {
    fn apply(&self, board: &mut Board) {
        match self {
            Step::Swap { a, b } => board.swap(*a, *b),
            Step::Cascade(event) => event.apply(board),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Phase {
    pub kind: PhaseKind,
    pub duration: Duration,
    pub steps: Vec<Step>,
    pub points: u32,
}

impl Phase {
    fn new(kind: PhaseKind, timings: &Timings, steps: Vec<Step>) -> Self {
        Self {
            kind,
            duration: timings.phase(kind),
            steps,
            points: 0,
        }
    }

    /// Swap glide followed by every wave of the cascade the swap triggered.
    pub fn plan_accepted(a: Pos, b: Pos, cascade: &Cascade, timings: &Timings) -> Vec<Phase> {
        let mut phases = vec![Phase::new(
            PhaseKind::SwapGlide,
            timings,
            vec![Step::Swap { a, b }],
        )];

        for wave in &cascade.waves {
            let steps = |events: &[CascadeEvent]| -> Vec<Step> {
                events.iter().copied().map(Step::Cascade).collect()
            };

            let mut fade_out = Phase::new(PhaseKind::FadeOut, timings, steps(&wave.cleared));
            fade_out.points = wave.points;
            phases.push(fade_out);
            if !wave.falls.is_empty() {
                phases.push(Phase::new(PhaseKind::Fall, timings, steps(&wave.falls)));
            }
            phases.push(Phase::new(PhaseKind::FadeIn, timings, steps(&wave.spawns)));
        }

        phases
    }

    /// Swap glide there and back again.
    pub fn plan_rejected(a: Pos, b: Pos, timings: &Timings) -> Vec<Phase> {
        vec![
            Phase::new(PhaseKind::SwapGlide, timings, vec![Step::Swap { a, b }]),
            Phase::new(PhaseKind::Revert, timings, vec![Step::Swap { a, b }]),
        ]
    }

    fn apply(&self, board: &mut Board) {
        for step in &self.steps {
            step.apply(board);
        }
    }

    fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timings {
    pub swap_glide: Duration,
    pub revert: Duration,
    pub fade_out: Duration,
    pub fall: Duration,
    pub fade_in: Duration,
    pub hint_delay: Duration,
    pub hint_pulse: Duration,
}

impl Timings {
    /// Default phase lengths multiplied by `scale`; hint timings are left alone.
    pub fn scaled(scale: f32) -> Self {
        let base = Self::default();
        Self {
            swap_glide: scale_duration(base.swap_glide, scale),
            revert: scale_duration(base.revert, scale),
            fade_out: scale_duration(base.fade_out, scale),
            fall: scale_duration(base.fall, scale),
            fade_in: scale_duration(base.fade_in, scale),
            ..base
        }
    }

    pub fn phase(&self, kind: PhaseKind) -> Duration {
        match kind {
            PhaseKind::SwapGlide => self.swap_glide,
            PhaseKind::Revert => self.revert,
            PhaseKind::FadeOut => self.fade_out,
            PhaseKind::Fall => self.fall,
            PhaseKind::FadeIn => self.fade_in,
        }
    }
}

// Rounded to whole nanoseconds so a scale of 1 keeps the exact base durations
fn scale_duration(duration: Duration, scale: f32) -> Duration {
    Duration::from_nanos((duration.as_nanos() as f64 * f64::from(scale)).round() as u64)
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            swap_glide: Duration::from_millis(SWAP_GLIDE_MS),
            revert: Duration::from_millis(REVERT_GLIDE_MS),
            fade_out: Duration::from_millis(FADE_OUT_MS),
            fall: Duration::from_millis(FALL_MS),
            fade_in: Duration::from_millis(FADE_IN_MS),
            hint_delay: Duration::from_secs(HINT_DELAY_SECS),
            hint_pulse: Duration::from_millis(HINT_PULSE_MS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickGate {
    /// Busy animating: the click is dropped, not queued.
    Dropped,
    Proceed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequencerEvent {
    PhaseCompleted { kind: PhaseKind, points: u32 },
    Settled,
    HintShown(Hint),
    HintUnavailable,
}

#[derive(Clone, Debug)]
enum Mode {
    Idle,
    Animating {
        current: Phase,
        elapsed: Duration,
        queue: VecDeque<Phase>,
    },
    HintPulsing {
        hint: Hint,
        elapsed: Duration,
    },
}

/// Owns the timing of every board change.
///
/// | mode        | click              | play        | tick                                     |
/// |-------------|--------------------|-------------|------------------------------------------|
/// | Idle        | re-arm timer       | Animating   | HintPulsing once the idle timer is due   |
/// | Animating   | dropped            | refused     | next phase, Idle after the last one      |
/// | HintPulsing | Idle, re-arm timer | Animating   | pulse                                    |
#[derive(Clone, Debug)]
pub struct AnimationSequencer {
    mode: Mode,
    idle_timer: Option<Duration>,
    timings: Timings,
}

impl AnimationSequencer {
    pub fn new(timings: Timings) -> Self {
        Self {
            mode: Mode::Idle,
            idle_timer: Some(Duration::ZERO),
            timings,
        }
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    pub fn state(&self) -> SequencerState {
        match &self.mode {
            Mode::Idle => SequencerState::Idle,
            Mode::HintPulsing { .. } => SequencerState::HintPulsing,
            Mode::Animating { current, .. } => match current.kind {
                PhaseKind::SwapGlide => SequencerState::SwapAnimating,
                PhaseKind::Revert => SequencerState::Reverting,
                PhaseKind::FadeOut | PhaseKind::Fall | PhaseKind::FadeIn => {
                    SequencerState::Cascading
                }
            },
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.mode, Mode::Animating { .. })
    }

    /// The phase being played and how far along it is, in `[0, 1]`.
    pub fn current_phase(&self) -> Option<(&Phase, f32)> {
        match &self.mode {
            Mode::Animating { current, elapsed, .. } => Some((current, current.progress(*elapsed))),
            _ => None,
        }
    }

    /// The hint on display and its opacity. The pulse runs until a click cancels it.
    pub fn hint(&self) -> Option<(Hint, f32)> {
        match &self.mode {
            Mode::HintPulsing { hint, elapsed } => Some((*hint, self.pulse_opacity(*elapsed))),
            _ => None,
        }
    }

    pub fn on_click(&mut self) -> ClickGate {
        match self.mode {
            Mode::Animating { .. } => {
                trace!("click dropped while animating");
                ClickGate::Dropped
            }
            Mode::HintPulsing { .. } => {
                debug!("hint cancelled by click");
                self.mode = Mode::Idle;
                self.arm_idle_timer();
                ClickGate::Proceed
            }
            Mode::Idle => {
                self.arm_idle_timer();
                ClickGate::Proceed
            }
        }
    }

    /// Starts playing `phases`. Refused while another sequence is still running.
    pub fn play(&mut self, phases: Vec<Phase>) -> bool {
        if self.is_busy() {
            warn!("refusing to start a sequence while another one is playing");
            return false;
        }

        let mut queue = VecDeque::from(phases);
        match queue.pop_front() {
            Some(current) => {
                self.mode = Mode::Animating {
                    current,
                    elapsed: Duration::ZERO,
                    queue,
                };
                true
            }
            None => false,
        }
    }

    /// Advances time by `dt`, applying the board changes of every phase that completes.
    pub fn tick(&mut self, dt: Duration, board: &mut Board) -> Vec<SequencerEvent> {
        let mut events = Vec::new();

        if let Some(waited) = self.idle_timer.as_mut() {
            *waited = waited.saturating_add(dt);
        }

        if let Mode::HintPulsing { elapsed, .. } = &mut self.mode {
            *elapsed = elapsed.saturating_add(dt);
        }
        if self.is_busy() {
            self.advance(dt, board, &mut events);
        }

        if matches!(self.mode, Mode::Idle) && self.hint_due() {
            self.idle_timer = None;
            match find_hint_move(board) {
                Some(hint) => {
                    debug!(a = %hint.0, b = %hint.1, "showing hint");
                    self.mode = Mode::HintPulsing {
                        hint,
                        elapsed: Duration::ZERO,
                    };
                    events.push(SequencerEvent::HintShown(hint));
                }
                None => {
                    debug!("idle timer fired but no move is available");
                    events.push(SequencerEvent::HintUnavailable);
                }
            }
        }

        events
    }

    pub fn reset(&mut self) {
        self.mode = Mode::Idle;
        self.arm_idle_timer();
    }

    fn advance(&mut self, dt: Duration, board: &mut Board, events: &mut Vec<SequencerEvent>) {
        let Mode::Animating {
            current,
            elapsed,
            queue,
        } = &mut self.mode
        else {
            return;
        };

        *elapsed = elapsed.saturating_add(dt);
        let mut settled = false;
        while *elapsed >= current.duration {
            *elapsed -= current.duration;
            current.apply(board);
            events.push(SequencerEvent::PhaseCompleted {
                kind: current.kind,
                points: current.points,
            });

            match queue.pop_front() {
                Some(next) => *current = next,
                None => {
                    settled = true;
                    break;
                }
            }
        }

        if settled {
            self.mode = Mode::Idle;
            events.push(SequencerEvent::Settled);
        }
    }

    fn arm_idle_timer(&mut self) {
        self.idle_timer = Some(Duration::ZERO);
    }

    fn hint_due(&self) -> bool {
        self.idle_timer
            .is_some_and(|waited| waited >= self.timings.hint_delay)
    }

    // Triangle wave starting at 0, peaking at 1 half way through the period.
    fn pulse_opacity(&self, elapsed: Duration) -> f32 {
        let period = self.timings.hint_pulse.as_nanos();
        if period == 0 {
            return 1.0;
        }
        let phase = (elapsed.as_nanos() % period) as f32 / period as f32;
        if phase < 0.5 {
            phase * 2.0
        } else {
            2.0 - phase * 2.0
        }
    }
}

impl Default for AnimationSequencer {
    fn default() -> Self {
        Self::new(Timings::default())
    }
}
