//! 8-bit register access
//!
//! Every helper here is a single read followed by at most one write. Nothing
//! is cached between calls, so each access observes the live register.

use core::cell::Cell;

/// Register that can be read
pub trait ReadRegister {
    /// Read the whole register
    fn read(&self) -> u8;

    /// Read a single bit (0-7)
    #[inline]
    fn bit(&self, bit: u8) -> bool {
        (self.read() >> bit) & 1 != 0
    }
}

/// Register that can be read and written
///
/// Methods take `&self`: the backing storage is either hardware or a cell.
pub trait Register: ReadRegister {
    /// Overwrite the whole register
    fn write(&self, value: u8);

    /// Read-modify-write with an arbitrary function
    #[inline]
    fn modify<F: FnOnce(u8) -> u8>(&self, f: F) {
        let value = self.read();
        self.write(f(value));
    }

    /// Set a single bit
    #[inline]
    fn set_bit(&self, bit: u8) {
        self.modify(|r| r | (1 << bit));
    }

    /// Clear a single bit
    #[inline]
    fn clear_bit(&self, bit: u8) {
        self.modify(|r| r & !(1 << bit));
    }

    /// Set or clear a single bit
    #[inline]
    fn write_bit(&self, bit: u8, high: bool) {
        if high {
            self.set_bit(bit);
        } else {
            self.clear_bit(bit);
        }
    }

    /// Replace only the bits selected by `mask` with the same bits of `bits`
    #[inline]
    fn write_masked(&self, mask: u8, bits: u8) {
        self.modify(|r| (!mask & r) | (mask & bits));
    }

    /// Invert the bits selected by `mask`
    #[inline]
    fn toggle_masked(&self, mask: u8) {
        self.modify(|r| r ^ mask);
    }
}

impl ReadRegister for Cell<u8> {
    #[inline]
    fn read(&self) -> u8 {
        self.get()
    }
}

impl Register for Cell<u8> {
    #[inline]
    fn write(&self, value: u8) {
        self.set(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_helpers() {
        let reg = Cell::new(0u8);

        reg.set_bit(3);
        assert_eq!(reg.get(), 0b0000_1000);
        assert!(reg.bit(3));
        assert!(!reg.bit(2));

        reg.write_bit(7, true);
        assert_eq!(reg.get(), 0b1000_1000);

        reg.clear_bit(3);
        assert_eq!(reg.get(), 0b1000_0000);

        reg.write_bit(7, false);
        assert_eq!(reg.get(), 0);
    }

    #[test]
    fn test_write_masked_keeps_unmasked_bits() {
        let reg = Cell::new(0b1010_1010u8);

        reg.write_masked(0x0F, 0xFF);
        assert_eq!(reg.get(), 0b1010_1111);

        reg.write_masked(0xF0, 0x00);
        assert_eq!(reg.get(), 0b0000_1111);
    }

    #[test]
    fn test_toggle_masked() {
        let reg = Cell::new(0b1100_0011u8);

        reg.toggle_masked(0b0000_1111);
        assert_eq!(reg.get(), 0b1100_1100);

        reg.toggle_masked(0b0000_1111);
        assert_eq!(reg.get(), 0b1100_0011);
    }
}
