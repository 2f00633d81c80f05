//! GPIO ports A-D
//!
//! Data-space addresses of the port registers. The I/O-space address is
//! the data-space address minus 0x20.
//!
//! | Port | PIN  | DDR  | PORT |
//! |------|------|------|------|
//! | A    | 0x39 | 0x3A | 0x3B |
//! | B    | 0x36 | 0x37 | 0x38 |
//! | C    | 0x33 | 0x34 | 0x35 |
//! | D    | 0x30 | 0x31 | 0x32 |

use sos_hal::{GpioPort, ReadRegister};

use crate::mmio::Mmio8;

/// Number of GPIO ports on the chip
pub const PORT_COUNT: usize = 4;

pub const PINA: usize = 0x39;
pub const DDRA: usize = 0x3A;
pub const PORTA: usize = 0x3B;

pub const PINB: usize = 0x36;
pub const DDRB: usize = 0x37;
pub const PORTB: usize = 0x38;

pub const PINC: usize = 0x33;
pub const DDRC: usize = 0x34;
pub const PORTC: usize = 0x35;

pub const PIND: usize = 0x30;
pub const DDRD: usize = 0x31;
pub const PORTD: usize = 0x32;

/// Register triad of one ATmega32 port
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Atmega32Port {
    ddr: Mmio8,
    port: Mmio8,
    pin: Mmio8,
}

impl Atmega32Port {
    /// Bind a port from its three register addresses
    ///
    /// # Safety
    ///
    /// Same contract as [`Mmio8::new`] for each address.
    pub const unsafe fn new(pin: usize, ddr: usize, port: usize) -> Self {
        Self {
            ddr: Mmio8::new(ddr),
            port: Mmio8::new(port),
            pin: Mmio8::new(pin),
        }
    }
}

impl GpioPort for Atmega32Port {
    type Reg = Mmio8;

    #[inline]
    fn direction(&self) -> &Mmio8 {
        &self.ddr
    }

    #[inline]
    fn output(&self) -> &Mmio8 {
        &self.port
    }

    #[inline]
    fn read_input(&self) -> u8 {
        self.pin.read()
    }
}

/// Take the register triads of ports A-D, in that order
///
/// # Safety
///
/// Must only be called on an ATmega32 (or a pin-compatible part with the
/// same register map). Calling it more than once creates aliased handles;
/// the caller is then responsible for keeping each port to a single
/// execution context or guarding it with a critical section.
pub unsafe fn steal() -> [Atmega32Port; PORT_COUNT] {
    [
        Atmega32Port::new(PINA, DDRA, PORTA),
        Atmega32Port::new(PINB, DDRB, PORTB),
        Atmega32Port::new(PINC, DDRC, PORTC),
        Atmega32Port::new(PIND, DDRD, PORTD),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_map() {
        // Triads are laid out PIN, DDR, PORT at consecutive addresses
        let ports = unsafe { steal() };
        let bases = [PINA, PINB, PINC, PIND];

        for (port, base) in ports.iter().zip(bases) {
            assert_eq!(port.direction().addr(), base + 1);
            assert_eq!(port.output().addr(), base + 2);
        }
    }
}
