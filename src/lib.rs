// src/lib.rs
//
// sweepvis: a click-driven ping-pong animation across a chain of nodes

pub mod animation;
pub mod config;
pub mod controllers;
pub mod render;
pub mod utilities;
pub mod views;
