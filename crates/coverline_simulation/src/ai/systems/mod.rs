//! AI systems (strategic layer logic)

pub mod assault;

// Re-export all systems
pub use assault::*;
