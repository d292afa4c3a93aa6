use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::DragSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Dragging,
}

/// Provisional edit tracked between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragSession {
    pub span: DragSpan,
    /// Value painted over every bar of `span`.
    pub value: u8,
}

/// Pointer engagement with the widget. Exactly one variant is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionState {
    Idle { hover: Option<usize> },
    Dragging(DragSession),
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::Idle { hover: None }
    }
}

/// Pointer position already resolved against the bar geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerSample {
    /// Bar under the pointer, `None` left of the surface.
    pub index: Option<usize>,
    pub value: u8,
    /// Whether the pointer lies within the surface's vertical extent.
    pub in_vertical_bounds: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down(PointerSample),
    Move(PointerSample),
    Up,
    /// Pointer left the surface without a button held.
    Leave,
}

/// What a transition does to the drag overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEffect {
    Keep,
    Paint { span: DragSpan, value: u8 },
    /// Merge into the series, clear, notify the host.
    Commit,
}

/// Draw work requested by a transition, applied in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repaint {
    /// Clear the surface and draw every bar.
    Full,
    /// Repaint one column in its plain state.
    Bar(usize),
    /// Draw the hover highlight over one column.
    Hover(usize),
}

pub type Repaints = SmallVec<[Repaint; 2]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: InteractionState,
    pub overlay: OverlayEffect,
    pub repaints: Repaints,
}

impl Transition {
    fn unchanged(state: InteractionState) -> Self {
        Self {
            state,
            overlay: OverlayEffect::Keep,
            repaints: Repaints::new(),
        }
    }

    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.overlay == OverlayEffect::Keep && self.repaints.is_empty()
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        match self {
            Self::Idle { .. } => InteractionMode::Idle,
            Self::Dragging(_) => InteractionMode::Dragging,
        }
    }

    #[must_use]
    pub fn hover_index(self) -> Option<usize> {
        match self {
            Self::Idle { hover } => hover,
            Self::Dragging(_) => None,
        }
    }

    #[must_use]
    pub fn drag_session(self) -> Option<DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle { .. } => None,
        }
    }

    #[must_use]
    pub fn active_span(self) -> Option<DragSpan> {
        self.drag_session().map(|session| session.span)
    }

    /// Computes the next state and its side effects for one pointer event.
    ///
    /// `bar_count` is the series length. Bars at or past it are outside the
    /// chart, except that a drag reaching exactly `bar_count` ends on the
    /// last bar.
    #[must_use]
    pub fn transition(self, event: PointerEvent, bar_count: usize) -> Transition {
        let on_bar = |sample: PointerSample| sample.index.filter(|index| *index < bar_count);

        match (self, event) {
            (Self::Idle { .. }, PointerEvent::Down(sample)) => match on_bar(sample) {
                Some(index) => {
                    let span = DragSpan::single(index);
                    Transition {
                        state: Self::Dragging(DragSession {
                            span,
                            value: sample.value,
                        }),
                        overlay: OverlayEffect::Paint {
                            span,
                            value: sample.value,
                        },
                        repaints: Repaints::from_slice(&[Repaint::Full, Repaint::Hover(index)]),
                    }
                }
                None => Transition::unchanged(self),
            },
            (Self::Dragging(session), PointerEvent::Move(sample)) => match sample
                .index
                .filter(|index| *index <= bar_count)
                .map(|index| index.min(bar_count.saturating_sub(1)))
            {
                Some(index) => {
                    let span = DragSpan::new(session.span.begin, index);
                    Transition {
                        state: Self::Dragging(DragSession {
                            span,
                            value: sample.value,
                        }),
                        overlay: OverlayEffect::Paint {
                            span,
                            value: sample.value,
                        },
                        repaints: Repaints::from_slice(&[Repaint::Full, Repaint::Hover(index)]),
                    }
                }
                None => Transition::unchanged(self),
            },
            (Self::Idle { hover }, PointerEvent::Move(sample)) => {
                match on_bar(sample).filter(|_| sample.in_vertical_bounds) {
                    Some(index) if hover == Some(index) => Transition::unchanged(self),
                    Some(index) => {
                        let mut repaints = Repaints::from_slice(&[Repaint::Hover(index)]);
                        if let Some(previous) = hover {
                            repaints.push(Repaint::Bar(previous));
                        }
                        Transition {
                            state: Self::Idle { hover: Some(index) },
                            overlay: OverlayEffect::Keep,
                            repaints,
                        }
                    }
                    None => match hover {
                        Some(previous) => Transition {
                            state: Self::Idle { hover: None },
                            overlay: OverlayEffect::Keep,
                            repaints: Repaints::from_slice(&[Repaint::Bar(previous)]),
                        },
                        None => Transition::unchanged(self),
                    },
                }
            }
            (Self::Dragging(_), PointerEvent::Up) => Transition {
                state: Self::Idle { hover: None },
                overlay: OverlayEffect::Commit,
                repaints: Repaints::from_slice(&[Repaint::Full]),
            },
            (Self::Idle { hover: Some(previous) }, PointerEvent::Leave) => Transition {
                state: Self::Idle { hover: None },
                overlay: OverlayEffect::Keep,
                repaints: Repaints::from_slice(&[Repaint::Bar(previous)]),
            },
            (Self::Dragging(_), PointerEvent::Down(_) | PointerEvent::Leave)
            | (Self::Idle { .. }, PointerEvent::Up | PointerEvent::Leave) => {
                Transition::unchanged(self)
            }
        }
    }
}
