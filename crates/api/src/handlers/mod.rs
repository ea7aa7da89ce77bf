//! Request handlers.
//!
//! Handlers delegate to the repositories in `reserva_db`, run domain logic
//! from `reserva_core`, and map errors via [`crate::error::AppError`].

pub mod auth;
pub mod booking;
