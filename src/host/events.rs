use crate::foundation::core::{Point, Viewport};

/// Input delivered to mounted components.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Mouse/pen moved to a viewport position.
    PointerMove(Point),
    /// Pointer left the surface.
    PointerLeave,
    /// A touch began.
    TouchStart(Point),
    /// Active touches moved; the first entry is the primary touch.
    TouchMove(Vec<Point>),
    /// The last touch ended.
    TouchEnd,
    /// The viewport changed size.
    Resize(Viewport),
}

impl InputEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::PointerMove(_) => EventKind::PointerMove,
            Self::PointerLeave => EventKind::PointerLeave,
            Self::TouchStart(_) => EventKind::TouchStart,
            Self::TouchMove(_) => EventKind::TouchMove,
            Self::TouchEnd => EventKind::TouchEnd,
            Self::Resize(_) => EventKind::Resize,
        }
    }
}

/// Discriminant of [`InputEvent`], used to register listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    PointerMove,
    PointerLeave,
    TouchStart,
    TouchMove,
    TouchEnd,
    Resize,
}

/// What a listener asks the host to do after handling an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// Suppress the host's default action (page scrolling for touch moves).
    pub prevent_default: bool,
}

impl EventResponse {
    pub fn prevent_default() -> Self {
        Self {
            prevent_default: true,
        }
    }

    /// Combine responses from several listeners of the same event.
    pub fn merge(self, other: Self) -> Self {
        Self {
            prevent_default: self.prevent_default || other.prevent_default,
        }
    }
}
