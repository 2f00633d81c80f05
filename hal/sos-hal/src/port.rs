//! GPIO port register triad
//!
//! An 8-bit port is driven through three registers:
//!
//! - Direction (DDR): bit set = pin is an output
//! - Output data (PORT): level driven on output pins
//! - Input data (PIN): level sensed on every pin, whatever its direction

use crate::register::Register;

/// The three registers of one 8-bit GPIO port
///
/// Implementations bind the registers to fixed hardware addresses (or to
/// memory, for host simulation). Bit N of each register belongs to pin N.
pub trait GpioPort {
    /// Register type for the writable registers
    type Reg: Register;

    /// Direction register (1 = output, 0 = input)
    fn direction(&self) -> &Self::Reg;

    /// Output data register
    fn output(&self) -> &Self::Reg;

    /// Read the input data register
    ///
    /// Always reflects the live pin level, not the output register.
    fn read_input(&self) -> u8;
}
