//! SOS Hardware Abstraction Layer
//!
//! This crate defines the register-level traits that the MCAL drivers are
//! written against. Chip crates (e.g. `sos-hal-atmega32`) bind them to fixed
//! memory-mapped addresses; the `sim` module (behind the `sim` feature)
//! binds them to plain memory so the drivers can be exercised on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application code                       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  sos-mcal (DIO controller, pin handles) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  sos-hal (this crate - traits)          │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  sos-hal-     │       │  sim::SimPort │
//! │   atmega32    │       │  (host tests) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`register::ReadRegister`], [`register::Register`] - 8-bit registers
//! - [`port::GpioPort`] - Direction/output/input register triad of one port

#![no_std]
#![deny(unsafe_code)]

pub mod port;
pub mod register;
#[cfg(any(test, feature = "sim"))]
pub mod sim;

pub use port::GpioPort;
pub use register::{ReadRegister, Register};
#[cfg(any(test, feature = "sim"))]
pub use sim::SimPort;
