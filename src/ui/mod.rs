//! Terminal-facing UI: the rendering contract and its crossterm implementation.

pub mod recording;
pub mod render;
pub mod settings;
pub mod terminal;

pub use recording::{RecordingSink, Rendered};
pub use render::RenderSink;
pub use terminal::Renderer;
