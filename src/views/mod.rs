// src/views/mod.rs

pub mod surface;

pub use surface::Surface;
