//! Volatile 8-bit memory-mapped register

use sos_hal::{ReadRegister, Register};

/// 8-bit register at a fixed data-space address
///
/// Every access is a volatile load or store, so the compiler never merges,
/// caches or reorders them.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mmio8 {
    addr: usize,
}

impl Mmio8 {
    /// Bind a register at `addr`
    ///
    /// # Safety
    ///
    /// `addr` must be a valid, byte-accessible I/O register for the running
    /// chip, and the caller must not create aliases that are used from
    /// contexts which can interleave read-modify-write sequences.
    pub const unsafe fn new(addr: usize) -> Self {
        Self { addr }
    }

    /// Data-space address of the register
    pub const fn addr(&self) -> usize {
        self.addr
    }
}

impl ReadRegister for Mmio8 {
    #[inline]
    fn read(&self) -> u8 {
        // SAFETY: address validity is guaranteed by `Mmio8::new`'s contract.
        unsafe { core::ptr::read_volatile(self.addr as *const u8) }
    }
}

impl Register for Mmio8 {
    #[inline]
    fn write(&self, value: u8) {
        // SAFETY: address validity is guaranteed by `Mmio8::new`'s contract.
        unsafe { core::ptr::write_volatile(self.addr as *mut u8, value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volatile_access_on_plain_memory() {
        let mut backing = [0u8; 1];
        let reg = unsafe { Mmio8::new(backing.as_mut_ptr() as usize) };

        reg.write(0b1000_0001);
        assert_eq!(reg.read(), 0b1000_0001);

        reg.write_masked(0x0F, 0xFF);
        assert_eq!(reg.read(), 0b1000_1111);

        reg.clear_bit(7);
        assert!(!reg.bit(7));
        assert_eq!(backing[0], 0b0000_1111);
    }
}
