pub mod projector;
pub mod render;
