//! Simulation core and terminal front end for a grid-based arcade Snake.
//!
//! The heart of the crate is the tick engine in [`game`]: a discrete-time
//! state machine advanced by an external scheduler, one cell per tick.
//! Everything around it is an adapter: [`input`] turns key presses and
//! mouse swipes into direction requests, [`renderer`] draws read-only
//! state, and the binary owns the timer.

pub mod config;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod theme;
pub mod ui;
