//! # Connect Four
//!
//! A two-player Connect Four game with a terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win detection, turn state machine
//! - [`ui`] — Terminal UI: board rendering and key handling
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
