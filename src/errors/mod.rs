//! Error types and diagnostic reporting for the compiler front end.
//!
//! This module defines the diagnostic types used by the lexer. It includes:
//!
//! - Diagnostic structures with source position information
//! - A two-tier severity model (warnings continue, errors are fatal)
//! - Positioned diagnostic rendering with a source snippet and caret

pub mod errors;
