pub mod algorithms;
pub mod streaming;

// Re-export commonly used items
pub use algorithms::chunked;
