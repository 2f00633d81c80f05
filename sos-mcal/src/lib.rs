//! Microcontroller abstraction layer for 8-bit targets
//!
//! This crate contains the board-agnostic driver logic that sits directly
//! on top of the hardware registers:
//!
//! - Digital I/O controller for four 8-bit ports (A-D)
//! - Pin handles implementing the `embedded-hal` digital traits
//! - Static pin configuration tables
//! - Build-time timer configuration
//!
//! The controller is generic over [`sos_hal::GpioPort`], so the same code
//! drives real registers (`sos-hal-atmega32`) or the host-side `SimPort`
//! from `sos-hal`'s `sim` feature.

#![no_std]
#![deny(unsafe_code)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
pub mod dio;

pub use dio::{Dio, DioError, DioPin, Direction, Level, Pin, Port, PortDirection, PortLevel};
