//! Drag gesture state machine.

use crate::circle::{Circle, CircleId};
use crate::listener::{Channel, ListenerRegistry, Subscription};
use kurbo::{Point, Vec2};

/// State of the drag gesture: Idle → Dragging → Idle.
#[derive(Debug, Default)]
pub enum DragGesture {
    #[default]
    Idle,
    Dragging(ActiveDrag),
}

/// A gesture in progress.
///
/// Owns the move/up listener subscriptions; they are released when the
/// gesture is dropped, whichever path ends it.
#[derive(Debug)]
pub struct ActiveDrag {
    /// Pointer position minus the grabbed top-left at pointer-down.
    offset: Vec2,
    /// Circle under the pointer at pointer-down, if any.
    grabbed: Option<CircleId>,
    /// Pointer position at pointer-down.
    origin: Point,
    _move_listener: Subscription,
    _up_listener: Subscription,
}

/// Summary of a finished gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureEnd {
    pub grabbed: Option<CircleId>,
    pub origin: Point,
}

impl DragGesture {
    /// Start a gesture at `pointer`.
    ///
    /// The offset is taken against the grabbed circle's top-left corner, or
    /// the container origin when nothing was hit. Any gesture still active
    /// is torn down first.
    pub fn begin(&mut self, listeners: &ListenerRegistry, pointer: Point, grabbed: Option<&Circle>) {
        if self.is_dragging() {
            log::debug!("Gesture restarted without pointer-up");
            self.end();
        }

        let anchor = grabbed.map(Circle::top_left).unwrap_or(Point::ZERO);
        *self = DragGesture::Dragging(ActiveDrag {
            offset: pointer - anchor,
            grabbed: grabbed.map(Circle::id),
            origin: pointer,
            _move_listener: listeners.subscribe(Channel::PointerMove),
            _up_listener: listeners.subscribe(Channel::PointerUp),
        });
    }

    /// Finish the gesture and release its listeners.
    ///
    /// Returns `None` when no gesture was active.
    pub fn end(&mut self) -> Option<GestureEnd> {
        match std::mem::take(self) {
            DragGesture::Idle => None,
            DragGesture::Dragging(drag) => Some(GestureEnd {
                grabbed: drag.grabbed,
                origin: drag.origin,
            }),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragGesture::Dragging(_))
    }

    pub fn offset(&self) -> Option<Vec2> {
        match self {
            DragGesture::Dragging(drag) => Some(drag.offset),
            DragGesture::Idle => None,
        }
    }

    pub fn grabbed(&self) -> Option<CircleId> {
        match self {
            DragGesture::Dragging(drag) => drag.grabbed,
            DragGesture::Idle => None,
        }
    }

    /// Top-left target for the selection given the current pointer.
    pub fn target(&self, pointer: Point) -> Option<Point> {
        self.offset().map(|offset| pointer - offset)
    }
}
