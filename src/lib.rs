//! Smart Travel Assistant - chat relay and session client.
//!
//! The relay (`POST /api/chatbot`) forwards one traveller message to the
//! external travel backend and returns its reply, or a fixed fallback when
//! the backend fails. The session side keeps the client transcript and
//! guarantees at most one message in flight.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod telemetry;
