// Public API exports
pub mod domain;
pub mod shared;

// Presentation layer
pub mod app;
