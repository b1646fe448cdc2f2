//! Lexical analysis module for the compiler front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens. It handles:
//!
//! - Cursor-based scanning with single-byte lookahead
//! - Recognition of keywords, identifiers, numbers, and operators
//! - Token position tracking for error reporting
//! - Comment and whitespace handling

pub mod lexer;
pub mod tokens;
