//! Simulated GPIO port for host-side testing
//!
//! Models the AVR pin logic: an output pin reads back the level it drives,
//! an input pin reads whatever is applied externally.

use core::cell::Cell;

use crate::port::GpioPort;

/// In-memory port with the same register semantics as hardware
#[derive(Debug, Default)]
pub struct SimPort {
    ddr: Cell<u8>,
    port: Cell<u8>,
    /// Levels applied to the pins from outside the chip
    external: Cell<u8>,
}

impl SimPort {
    /// Create a port with every register cleared (all inputs, all low)
    pub const fn new() -> Self {
        Self {
            ddr: Cell::new(0),
            port: Cell::new(0),
            external: Cell::new(0),
        }
    }

    /// Create a port with preset direction and output registers
    pub const fn with_registers(ddr: u8, port: u8) -> Self {
        Self {
            ddr: Cell::new(ddr),
            port: Cell::new(port),
            external: Cell::new(0),
        }
    }

    /// Drive the externally applied pin levels
    pub fn set_external(&self, levels: u8) {
        self.external.set(levels);
    }

    /// Current direction register value
    pub fn ddr(&self) -> u8 {
        self.ddr.get()
    }

    /// Current output register value
    pub fn port(&self) -> u8 {
        self.port.get()
    }
}

impl GpioPort for SimPort {
    type Reg = Cell<u8>;

    fn direction(&self) -> &Cell<u8> {
        &self.ddr
    }

    fn output(&self) -> &Cell<u8> {
        &self.port
    }

    fn read_input(&self) -> u8 {
        let ddr = self.ddr.get();
        (self.port.get() & ddr) | (self.external.get() & !ddr)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SimPort {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "SimPort {{ ddr: {=u8:#x}, port: {=u8:#x}, external: {=u8:#x} }}",
            self.ddr.get(),
            self.port.get(),
            self.external.get()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::Register;

    #[test]
    fn test_input_follows_direction() {
        let port = SimPort::new();
        port.set_external(0b0000_0011);

        // All inputs: external levels are visible
        assert_eq!(port.read_input(), 0b0000_0011);

        // Pin 0 becomes an output driving low
        port.direction().set_bit(0);
        assert_eq!(port.read_input(), 0b0000_0010);

        // Pin 0 driven high, pin 4 output high
        port.output().write(0b0001_0001);
        port.direction().set_bit(4);
        assert_eq!(port.read_input(), 0b0001_0011);
    }

    #[test]
    fn test_with_registers() {
        let port = SimPort::with_registers(0xF0, 0xA5);
        assert_eq!(port.ddr(), 0xF0);
        assert_eq!(port.port(), 0xA5);
        assert_eq!(port.read_input(), 0xA0);
    }
}
