//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Session events: completing login and logout requests in the background
//! - Terminal events: User input and terminal interactions

pub mod session;
pub mod terminal;
