pub mod ease;
pub mod latch;
pub mod tween;
