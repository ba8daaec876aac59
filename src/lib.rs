//! Coindash - a single-screen terminal arcade game.
//!
//! Move the avatar around a bounded arena, grab coins and power-ups, and
//! stay clear of the obstacles. This crate exposes the game logic for
//! testing and external use; the binary wires it to a ratatui terminal.

pub mod arena;
pub mod constants;
pub mod game;
pub mod input;
pub mod ui;
