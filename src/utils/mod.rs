//! Utility functions shared across the application.
//!
//! - [`code_generator`] - Random Base62 short code generation

pub mod code_generator;
