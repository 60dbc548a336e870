//! Configuration module for loading mechanics parameters.

mod parameters;

pub use parameters::ForceParameters;
