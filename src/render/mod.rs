// src/render/mod.rs
// Rendering collaborators: turn a node's (index, scale) into nannou draw calls

pub mod motif_renderer;

pub use motif_renderer::{motif_arms, MotifPainter, MotifStyle};
