use crate::foundation::core::Point;
use crate::host::events::{EventResponse, InputEvent};

/// Pointer and touch state of the demo.
///
/// The pointer rests at the origin until it moves. On touch devices the pointer only repels
/// while a touch is down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub pos: Point,
    pub touching: bool,
    pub touch_device: bool,
}

impl PointerState {
    pub fn new(touch_device: bool) -> Self {
        Self {
            pos: Point::ZERO,
            touching: false,
            touch_device,
        }
    }

    /// Pointer position if interaction is active this frame.
    pub fn active(&self) -> Option<Point> {
        (self.touching || !self.touch_device).then_some(self.pos)
    }

    /// Apply an input event. Non-pointer events are ignored.
    pub fn apply(&mut self, event: &InputEvent) -> EventResponse {
        match event {
            InputEvent::PointerMove(p) => {
                self.pos = *p;
                EventResponse::default()
            }
            InputEvent::TouchMove(touches) => match touches.first() {
                Some(p) => {
                    self.pos = *p;
                    EventResponse::prevent_default()
                }
                None => EventResponse::default(),
            },
            InputEvent::TouchStart(_) => {
                self.touching = true;
                EventResponse::default()
            }
            InputEvent::TouchEnd => {
                self.touching = false;
                self.pos = Point::ZERO;
                EventResponse::default()
            }
            InputEvent::PointerLeave => {
                if !self.touch_device {
                    self.pos = Point::ZERO;
                }
                EventResponse::default()
            }
            InputEvent::Resize(_) => EventResponse::default(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demo/pointer.rs"]
mod tests;
