//! Test signal synthesis

pub mod generator;
pub mod params;

pub use generator::{
    chirp_instantaneous_frequency, create_chirp, create_multi_tone, create_sine_wave,
    create_white_noise, create_white_noise_with, TimeSignal,
};
pub use params::{generate, SignalKind, SignalParams};
