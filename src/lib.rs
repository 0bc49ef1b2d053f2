//! Duskline - solar day/night phase model for screen overlay tinting

pub mod core;
pub mod phase;
