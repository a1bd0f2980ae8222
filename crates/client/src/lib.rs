//! HTTP client for the habitflow habit service.
//!
//! This crate posts newly created habits to the remote service that stores
//! them. The service is a collaborator, not a source of truth: cards are
//! shown before the request completes and a failure only flags the card.
//!
//! # Overview
//!
//! The crate provides:
//!
//! - [`HabitClient`]: The service client
//! - [`NewHabit`] and [`CreateHabitResponse`]: Wire types of `POST /api/habits`
//! - [`Error`]: Error types for service requests
//!
//! # Examples
//!
//! ```no_run
//! use std::time::Duration;
//! use habitflow_client::{HabitClient, NewHabit};
//! use habitflow_protocol::{Category, HabitCard};
//!
//! # async fn example() -> habitflow_client::Result<()> {
//! let client = HabitClient::new("http://localhost:3000", Duration::from_secs(10))?;
//! let card = HabitCard::new("Drink Water", Category::Health);
//! client.create_habit(&NewHabit::from_card(&card)).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod request;

// Re-export primary types at crate root for convenience
pub use client::HabitClient;
pub use error::{Error, Result};
pub use request::{CreateHabitResponse, NewHabit};
