//! # Groombook Core
//!
//! Domain types and the booking-slot availability engine for the Groombook
//! dog-grooming salon backend.
//!
//! Everything in this crate is pure and I/O-free: the engine receives the
//! salon's hours, the service duration and the day's booked intervals from
//! its caller and returns the bookable slots. Persistence and transport live
//! in the `groombook-db` and `groombook-api` crates.

/// Booking-slot availability engine
pub mod availability;
/// Error types shared across the workspace
pub mod errors;
/// Domain models for the salon, its services and bookings
pub mod models;
