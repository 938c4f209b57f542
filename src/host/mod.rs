pub mod component;
pub mod events;
pub mod frame_loop;
pub mod scheduler;
