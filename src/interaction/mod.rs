use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ScrollState, TrackGeometry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Dragging,
}

/// Named scrollbar elements addressable by hosts for styling and hit tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollbarElement {
    Track,
    Thumb,
}

impl ScrollbarElement {
    #[must_use]
    pub const fn local_id(self) -> &'static str {
        match self {
            Self::Track => "track",
            Self::Thumb => "thumb",
        }
    }

    #[must_use]
    pub fn from_local_id(id: &str) -> Option<Self> {
        match id {
            "track" => Some(Self::Track),
            "thumb" => Some(Self::Thumb),
            _ => None,
        }
    }
}

/// Distance a click on the bare track moves the thumb.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PagingStep {
    /// One full thumb length per click.
    #[default]
    ThumbLength,
    /// Fixed pixel distance per click.
    Pixels(f64),
}

/// Typed pointer input in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerInput {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    /// Pointer left the host window; ends any drag.
    Leave,
}

/// Geometry and scroll state the adapter hit-tests against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerContext {
    pub track: TrackGeometry,
    pub state: ScrollState,
}

/// Side effect requested by one pointer transition, applied in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionEffect {
    /// Ask the value controller to commit this ratio (clamped there).
    RequestValue(f64),
    DragStarted,
    DragEnded,
    HoverChanged {
        element: ScrollbarElement,
        hovered: bool,
    },
}

pub type InteractionEffects = SmallVec<[InteractionEffect; 4]>;

/// Drag origin in canvas space. The travel is frozen at drag start so a
/// relayout under the pointer cannot remap an unchanged pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragAnchor {
    pointer: f64,
    start_ratio: f64,
    travel: f64,
}

/// Pointer state machine for one scrollbar: `Idle -> Dragging -> Idle`,
/// plus instantaneous paging clicks from `Idle`.
///
/// Hover flags are tracked alongside the drag state and never influence it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    attached: bool,
    drag: Option<DragAnchor>,
    pointer: Option<(f64, f64)>,
    track_hovered: bool,
    thumb_hovered: bool,
    paging: PagingStep,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            attached: true,
            drag: None,
            pointer: None,
            track_hovered: false,
            thumb_hovered: false,
            paging: PagingStep::ThumbLength,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        if self.drag.is_some() {
            InteractionMode::Dragging
        } else {
            InteractionMode::Idle
        }
    }

    #[must_use]
    pub fn is_attached(self) -> bool {
        self.attached
    }

    #[must_use]
    pub fn is_hovered(self, element: ScrollbarElement) -> bool {
        match element {
            ScrollbarElement::Track => self.track_hovered,
            ScrollbarElement::Thumb => self.thumb_hovered,
        }
    }

    #[must_use]
    pub fn paging(self) -> PagingStep {
        self.paging
    }

    pub fn set_paging(&mut self, paging: PagingStep) {
        self.paging = paging;
    }

    /// Stops reacting to pointer input. An in-flight drag is dropped without
    /// reverting anything it already committed.
    ///
    /// Returns `true` when a drag was cancelled.
    pub fn detach(&mut self) -> bool {
        let was_dragging = self.drag.take().is_some();
        self.attached = false;
        self.pointer = None;
        self.track_hovered = false;
        self.thumb_hovered = false;
        was_dragging
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Re-evaluates hover at the last known pointer position, for use after
    /// the thumb moved without pointer input. `None` means no scrollbar.
    pub fn refresh_hover(&mut self, context: Option<PointerContext>) -> InteractionEffects {
        let mut effects = InteractionEffects::new();
        match context {
            Some(context) if self.attached => {
                self.update_hover(self.pointer, context, &mut effects);
            }
            _ => self.clear_hover(&mut effects),
        }
        effects
    }

    /// Applies one pointer transition and returns the effects it requests.
    pub fn on_pointer(&mut self, input: PointerInput, context: PointerContext) -> InteractionEffects {
        let mut effects = InteractionEffects::new();
        if !self.attached {
            return effects;
        }

        self.pointer = match input {
            PointerInput::Down { x, y } | PointerInput::Move { x, y } | PointerInput::Up { x, y } => {
                Some((x, y))
            }
            PointerInput::Leave => None,
        };
        match input {
            PointerInput::Down { x, y } => {
                self.update_hover(Some((x, y)), context, &mut effects);
                if self.drag.is_none() {
                    self.on_pointer_down(x, y, context, &mut effects);
                }
            }
            PointerInput::Move { x, y } => {
                self.update_hover(Some((x, y)), context, &mut effects);
                if let Some(anchor) = self.drag {
                    if anchor.travel > 0.0 {
                        let delta = context.track.orientation.main_axis(x, y) - anchor.pointer;
                        effects.push(InteractionEffect::RequestValue(
                            anchor.start_ratio + delta / anchor.travel,
                        ));
                    }
                }
            }
            PointerInput::Up { x, y } => {
                if self.drag.take().is_some() {
                    effects.push(InteractionEffect::DragEnded);
                }
                self.update_hover(Some((x, y)), context, &mut effects);
            }
            PointerInput::Leave => {
                if self.drag.take().is_some() {
                    effects.push(InteractionEffect::DragEnded);
                }
                self.update_hover(None, context, &mut effects);
            }
        }
        effects
    }

    fn on_pointer_down(
        &mut self,
        x: f64,
        y: f64,
        context: PointerContext,
        effects: &mut InteractionEffects,
    ) {
        let track = context.track;
        if !track.is_interactive() {
            return;
        }
        let thumb = track.thumb(context.state);
        if track.thumb_bbox(thumb).contains(x, y) {
            self.drag = Some(DragAnchor {
                pointer: track.orientation.main_axis(x, y),
                start_ratio: context.state.ratio(),
                travel: thumb.travel(track.length),
            });
            effects.push(InteractionEffect::DragStarted);
            return;
        }
        if !track.bbox().contains(x, y) {
            return;
        }

        let travel = thumb.travel(track.length);
        if travel <= 0.0 {
            return;
        }
        let step = match self.paging {
            PagingStep::ThumbLength => thumb.length,
            PagingStep::Pixels(pixels) => pixels.max(0.0),
        };
        let offset = if track.along(x, y) < thumb.offset {
            thumb.offset - step
        } else {
            thumb.offset + step
        };
        effects.push(InteractionEffect::RequestValue(
            offset.clamp(0.0, travel) / travel,
        ));
    }

    fn update_hover(
        &mut self,
        point: Option<(f64, f64)>,
        context: PointerContext,
        effects: &mut InteractionEffects,
    ) {
        let track = context.track;
        let (track_hovered, thumb_hovered) = match point {
            Some((x, y)) if track.is_interactive() => (
                track.bbox().contains(x, y),
                track.thumb_bbox(track.thumb(context.state)).contains(x, y),
            ),
            _ => (false, false),
        };
        self.set_hover(track_hovered, thumb_hovered, effects);
    }

    fn clear_hover(&mut self, effects: &mut InteractionEffects) {
        self.set_hover(false, false, effects);
    }

    fn set_hover(
        &mut self,
        track_hovered: bool,
        thumb_hovered: bool,
        effects: &mut InteractionEffects,
    ) {
        if track_hovered != self.track_hovered {
            self.track_hovered = track_hovered;
            effects.push(InteractionEffect::HoverChanged {
                element: ScrollbarElement::Track,
                hovered: track_hovered,
            });
        }
        if thumb_hovered != self.thumb_hovered {
            self.thumb_hovered = thumb_hovered;
            effects.push(InteractionEffect::HoverChanged {
                element: ScrollbarElement::Thumb,
                hovered: thumb_hovered,
            });
        }
    }
}
