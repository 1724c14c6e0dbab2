//! Terminal front-end for Digital Hitster
//!
//! Thin driver over `hitster-game`: parses typed commands, renders tracks
//! and stats, and loads configuration.

pub mod command;
pub mod config;
pub mod render;
