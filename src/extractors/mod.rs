// src/extractors/mod.rs
pub mod benchmark;
pub mod control;
pub mod field;
pub mod normalize;
pub mod section_map;
pub mod segment;

// Re-export key extraction types for convenience
pub use benchmark::Benchmark;
pub use control::Control;
