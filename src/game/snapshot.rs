use crate::game::board::{Board, Pos};
use crate::game::cascade::CascadeEvent;
use crate::game::sequencer::{AnimationSequencer, Phase, PhaseKind, SequencerState, Step};
use crate::game::token::Token;

/// A token as it should be drawn this frame. `x`/`y` are in cell units and may
/// sit between cells while a swap or fall is in flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderCell {
    pub token: Token,
    pub pos: Pos,
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
}

impl RenderCell {
    fn at_rest(pos: Pos, token: Token) -> Self {
        Self {
            token,
            pos,
            x: pos.x as f32,
            y: pos.y as f32,
            opacity: 1.0,
        }
    }

    /// The slot the cell is closest to right now.
    pub fn nearest_slot(&self) -> Pos {
        Pos::new(self.x.round().max(0.0) as usize, self.y.round().max(0.0) as usize)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HintOverlay {
    pub cells: (Pos, Pos),
    pub opacity: f32,
}

impl HintOverlay {
    pub fn covers(&self, pos: Pos) -> bool {
        self.cells.0 == pos || self.cells.1 == pos
    }
}

/// Read-only view handed to the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub cells: Vec<RenderCell>,
    pub selected: Option<Pos>,
    pub hint: Option<HintOverlay>,
    pub score: u32,
    pub state: SequencerState,
}

impl Snapshot {
    pub fn capture(
        board: &Board,
        sequencer: &AnimationSequencer,
        selected: Option<Pos>,
        score: u32,
    ) -> Self {
        let mut cells: Vec<RenderCell> = board
            .cells()
            .filter_map(|(pos, cell)| cell.map(|cell| RenderCell::at_rest(pos, cell.token)))
            .collect();

        if let Some((phase, progress)) = sequencer.current_phase() {
            animate(&mut cells, phase, progress);
        }

        Self {
            cells,
            selected,
            hint: sequencer
                .hint()
                .map(|(cells, opacity)| HintOverlay { cells, opacity }),
            score,
            state: sequencer.state(),
        }
    }

    pub fn cell_at(&self, pos: Pos) -> Option<&RenderCell> {
        self.cells.iter().find(|cell| cell.pos == pos)
    }
}

fn animate(cells: &mut Vec<RenderCell>, phase: &Phase, progress: f32) {
    for step in &phase.steps {
        match (phase.kind, step) {
            (PhaseKind::SwapGlide | PhaseKind::Revert, Step::Swap { a, b }) => {
                glide(cells, *a, *b, progress);
                glide(cells, *b, *a, progress);
            }
            (PhaseKind::FadeOut, Step::Cascade(CascadeEvent::Cleared { pos, .. })) => {
                if let Some(cell) = find_mut(cells, *pos) {
                    cell.opacity = 1.0 - progress;
                }
            }
            (PhaseKind::Fall, Step::Cascade(CascadeEvent::Fell { from, to, .. })) => {
                if let Some(cell) = find_mut(cells, *from) {
                    cell.y = lerp(from.y as f32, to.y as f32, progress);
                }
            }
            (PhaseKind::FadeIn, Step::Cascade(CascadeEvent::Spawned { pos, token })) => {
                // Not on the board until the phase completes
                let mut cell = RenderCell::at_rest(*pos, *token);
                cell.opacity = progress;
                cells.push(cell);
            }
            _ => {}
        }
    }
}

fn glide(cells: &mut [RenderCell], from: Pos, to: Pos, progress: f32) {
    if let Some(cell) = find_mut(cells, from) {
        cell.x = lerp(from.x as f32, to.x as f32, progress);
        cell.y = lerp(from.y as f32, to.y as f32, progress);
    }
}

fn find_mut(cells: &mut [RenderCell], pos: Pos) -> Option<&mut RenderCell> {
    cells.iter_mut().find(|cell| cell.pos == pos)
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
