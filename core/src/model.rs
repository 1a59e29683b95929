use std::f32::consts::TAU;

use crate::action::CoreAction;
use crate::game::{scramble_rotations, ROTATION_SPEED_DEFAULT};
use crate::layout::{LayoutError, RingLayout};
use crate::ring::Ring;
use crate::surface::RenderSurface;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PuzzleRules {
    pub rotation_speed: f32,
}

impl Default for PuzzleRules {
    fn default() -> Self {
        Self {
            rotation_speed: ROTATION_SPEED_DEFAULT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { ring: usize, last_x: Option<f32> },
}

#[derive(Clone, Debug)]
pub struct PuzzleModel<I> {
    rings: Vec<Ring<I>>,
    layout: RingLayout,
    rules: PuzzleRules,
    drag: DragState,
}

impl<I: Clone> PuzzleModel<I> {
    pub fn new(
        viewport_w: f32,
        viewport_h: f32,
        image_w: f32,
        image_h: f32,
        ring_count: usize,
        image: I,
        seed: u32,
        rules: PuzzleRules,
    ) -> Result<Self, LayoutError> {
        let layout = RingLayout::compute(viewport_w, viewport_h, image_w, image_h, ring_count)?;
        let rings = scramble_rotations(seed, ring_count)
            .into_iter()
            .enumerate()
            .map(|(index, rotation)| {
                Ring::new(
                    layout.center_x,
                    layout.center_y,
                    layout.radius_of(index),
                    image.clone(),
                    rotation,
                )
            })
            .collect();
        Ok(Self {
            rings,
            layout,
            rules,
            drag: DragState::Idle,
        })
    }
}

impl<I> PuzzleModel<I> {
    pub fn layout(&self) -> RingLayout {
        self.layout
    }

    pub fn rings(&self) -> &[Ring<I>] {
        &self.rings
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    // Later rings draw on top, so the scan runs innermost-first.
    pub fn ring_at(&self, x: f32, y: f32) -> Option<usize> {
        self.rings
            .iter()
            .enumerate()
            .rev()
            .find(|(_, ring)| ring.contains_point(x, y))
            .map(|(index, _)| index)
    }

    /// Feeds one pointer event through the drag state machine. Returns true
    /// when the frame needs a redraw.
    pub fn apply(&mut self, action: CoreAction) -> bool {
        match action {
            CoreAction::PointerDown { x, y } => {
                // A second pointer landing mid-drag keeps the active ring.
                if matches!(self.drag, DragState::Dragging { .. }) {
                    return false;
                }
                if let Some(ring) = self.ring_at(x, y) {
                    self.drag = DragState::Dragging { ring, last_x: None };
                }
                false
            }
            CoreAction::PointerMove { x, y } => self.drag_to(x, y),
            CoreAction::PointerUp => {
                self.drag = DragState::Idle;
                false
            }
        }
    }

    fn drag_to(&mut self, x: f32, y: f32) -> bool {
        let DragState::Dragging { ring, last_x } = &mut self.drag else {
            return false;
        };
        let Some(previous) = *last_x else {
            // The first move after a grab only establishes the baseline.
            *last_x = Some(x);
            return false;
        };
        let dx = x - previous;
        let mut delta = -dx / self.rules.rotation_speed;
        let grabbed = &mut self.rings[*ring];
        if y < grabbed.center_y {
            // Horizontal drag direction flips on the upper half of the circle.
            delta = TAU - delta;
        }
        grabbed.rotation += delta;
        *last_x = Some(x);
        true
    }

    pub fn draw<S>(&self, surface: &mut S)
    where
        S: RenderSurface<Image = I>,
    {
        surface.clear();
        for ring in &self.rings {
            surface.draw_ring(ring);
        }
    }
}
