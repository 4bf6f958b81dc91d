//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds all application data
//! - User session slice and its status enumeration
//! - Job listing record, job form state and the job board
//! - State error handling

mod board;
mod error;
mod form;
mod job;
mod navigation;
mod session;
mod status;

pub use board::JobBoard;
pub use error::StateError;
pub use form::{FormMode, FormPhase, JobForm};
pub use job::{JobField, JobRecord};
pub use navigation::View;
pub use session::SessionAction;
pub use status::Status;

// State struct, methods and Default impl are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
