pub mod constants;
pub mod cycle;
pub mod engine;
pub mod physics;
pub mod sample;
pub mod state;
pub mod summary;
pub mod vehicle;
