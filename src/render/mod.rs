pub mod composite;
pub mod frame;
pub mod surface;
