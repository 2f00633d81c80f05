//! ATmega32 register bindings
//!
//! Binds the [`sos_hal`] register traits to the memory-mapped I/O registers
//! of the ATmega32. This is the only crate in the workspace that touches
//! raw addresses.
//!
//! ```ignore
//! let dio = sos_mcal::dio::Dio::new(unsafe { sos_hal_atmega32::steal() });
//! ```

#![no_std]

pub mod gpio;
pub mod mmio;

pub use gpio::{steal, Atmega32Port};
pub use mmio::Mmio8;
