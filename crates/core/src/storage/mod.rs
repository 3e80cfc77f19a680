pub mod adapter;
pub mod traits;

// Store implementations
pub mod memory;
