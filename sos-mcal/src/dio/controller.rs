//! Port/pin register controller
//!
//! Each operation validates its identifiers, picks the register triad of
//! the addressed port from a fixed table and performs exactly one masked
//! register access. Validation always happens before any register is
//! touched, so a failing call never leaves a partial write behind.
//!
//! Read-modify-write sequences are not atomic. If the same port is used
//! from both thread and interrupt context, the caller must serialize the
//! accesses (e.g. inside a critical section).

use sos_hal::{GpioPort, ReadRegister, Register};

use super::error::DioError;
use super::pin::DioPin;
use super::types::{
    normalize_mask, Direction, Level, Pin, Port, PortDirection, PortLevel, PORT_COUNT,
};
use crate::config::PinConfig;

/// Digital I/O controller for ports A-D
///
/// Holds no state besides the register bindings; every call works on the
/// live register contents.
pub struct Dio<P> {
    ports: [P; PORT_COUNT],
}

impl<P: GpioPort> Dio<P> {
    /// Create a controller from the register triads of ports A-D, in order
    pub const fn new(ports: [P; PORT_COUNT]) -> Self {
        Self { ports }
    }

    /// Give the register bindings back
    pub fn release(self) -> [P; PORT_COUNT] {
        self.ports
    }

    /// Register triad of a port
    pub fn registers(&self, port: Port) -> &P {
        &self.ports[port.index()]
    }

    /// Configure a single pin as input or output
    ///
    /// # Errors
    /// - [`DioError::WrongPin`] if `pin` >= 8
    /// - [`DioError::WrongPort`] if `port` >= 4
    /// - [`DioError::WrongPinValue`] if `direction` is neither 0 nor 1
    pub fn init_pin(
        &self,
        port: impl Into<u8>,
        pin: impl Into<u8>,
        direction: impl Into<u8>,
    ) -> Result<(), DioError> {
        let (port, pin) = check_pin_port(port.into(), pin.into())?;
        let direction = Direction::try_from(direction.into()).inspect_err(|_| {
            debug!("dio: invalid direction for P{}{}", port.letter(), pin.bit());
        })?;

        let ddr = self.registers(port).direction();
        match direction {
            Direction::Out => ddr.set_bit(pin.bit()),
            Direction::In => ddr.clear_bit(pin.bit()),
        }
        trace!(
            "dio: P{}{} direction {}",
            port.letter(),
            pin.bit(),
            direction
        );
        Ok(())
    }

    /// Read the level of a pin from the input register
    ///
    /// The input register is used whatever the pin direction, so an output
    /// pin reports the level actually present on the pad.
    pub fn read_pin(&self, port: impl Into<u8>, pin: impl Into<u8>) -> Result<Level, DioError> {
        let (port, pin) = check_pin_port(port.into(), pin.into())?;
        let input = self.registers(port).read_input();
        Ok(Level::from((input >> pin.bit()) & 1 != 0))
    }

    /// Drive a pin high or low through the output register
    ///
    /// # Errors
    /// - [`DioError::WrongPin`], [`DioError::WrongPort`] for bad identifiers
    /// - [`DioError::WrongPinValue`] if `level` is neither 0 nor 1
    pub fn write_pin(
        &self,
        port: impl Into<u8>,
        pin: impl Into<u8>,
        level: impl Into<u8>,
    ) -> Result<(), DioError> {
        let (port, pin) = check_pin_port(port.into(), pin.into())?;
        let level = Level::try_from(level.into()).inspect_err(|_| {
            debug!("dio: invalid level for P{}{}", port.letter(), pin.bit());
        })?;

        self.registers(port)
            .output()
            .write_bit(pin.bit(), level.is_high());
        trace!("dio: P{}{} <- {}", port.letter(), pin.bit(), level);
        Ok(())
    }

    /// Invert the output level of a pin
    ///
    /// Reads the current level from the input register and writes its
    /// complement. A failed read is reported as [`DioError::ReadError`];
    /// the result of the write is returned as-is.
    pub fn toggle_pin(&self, port: impl Into<u8>, pin: impl Into<u8>) -> Result<(), DioError> {
        let (port, pin) = check_pin_port(port.into(), pin.into())?;
        let level = self.read_pin(port, pin).map_err(|_| DioError::ReadError)?;
        self.write_pin(port, pin, !level)
    }

    /// Set the direction of the pins selected by `mask`
    ///
    /// A zero mask selects every pin. Unselected pins keep their direction.
    pub fn init_port(
        &self,
        port: impl Into<u8>,
        direction: PortDirection,
        mask: u8,
    ) -> Result<(), DioError> {
        let port = check_port(port.into())?;
        let mask = normalize_mask(mask);

        self.registers(port)
            .direction()
            .write_masked(mask, direction.into());
        trace!(
            "dio: P{} direction {} mask {=u8:#x}",
            port.letter(),
            direction,
            mask
        );
        Ok(())
    }

    /// Drive the pins selected by `mask` all high or all low
    ///
    /// # Errors
    /// - [`DioError::WrongPort`] if `port` >= 4
    /// - [`DioError::WrongPortValue`] if `level` is not 0x00 or 0xFF
    pub fn write_port(
        &self,
        port: impl Into<u8>,
        level: impl Into<u8>,
        mask: u8,
    ) -> Result<(), DioError> {
        let port = check_port(port.into())?;
        let level = PortLevel::try_from(level.into()).inspect_err(|_| {
            debug!("dio: invalid level for P{}", port.letter());
        })?;
        let mask = normalize_mask(mask);

        self.registers(port)
            .output()
            .write_masked(mask, level.into());
        trace!("dio: P{} <- {} mask {=u8:#x}", port.letter(), level, mask);
        Ok(())
    }

    /// Invert the output level of the pins selected by `mask`
    pub fn toggle_port(&self, port: impl Into<u8>, mask: u8) -> Result<(), DioError> {
        let port = check_port(port.into())?;
        let mask = normalize_mask(mask);

        self.registers(port).output().toggle_masked(mask);
        trace!("dio: P{} toggle mask {=u8:#x}", port.letter(), mask);
        Ok(())
    }

    /// Snapshot of the whole input register
    pub fn read_port(&self, port: impl Into<u8>) -> Result<u8, DioError> {
        let port = check_port(port.into())?;
        Ok(self.registers(port).read_input())
    }

    /// Handle to a single pin, usable with `embedded-hal` drivers
    pub fn pin(&self, port: impl Into<u8>, pin: impl Into<u8>) -> Result<DioPin<'_, P>, DioError> {
        let (port, pin) = check_pin_port(port.into(), pin.into())?;
        Ok(DioPin::new(self, port, pin))
    }

    /// Apply a static pin table
    ///
    /// The initial level is written before the direction, so an output pin
    /// never glitches to the wrong level. On an input pin the initial level
    /// turns the pull-up on (HIGH) or off (LOW). Stops at the first failing
    /// entry.
    pub fn configure(&self, table: &[PinConfig]) -> Result<(), DioError> {
        for entry in table {
            if let Some(level) = entry.initial {
                self.write_pin(entry.port, entry.pin, level)?;
            }
            self.init_pin(entry.port, entry.pin, entry.direction)?;
        }
        debug!("dio: applied {} pin configs", table.len());
        Ok(())
    }

    /// Whether the output register bit of a pin is set
    pub(crate) fn output_bit(&self, port: Port, pin: Pin) -> bool {
        self.registers(port).output().bit(pin.bit())
    }
}

/// Validate pin then port, in that order
fn check_pin_port(port: u8, pin: u8) -> Result<(Port, Pin), DioError> {
    let pin = Pin::try_from(pin).inspect_err(|_| {
        debug!("dio: rejected pin {=u8}", pin);
    })?;
    let port = check_port(port)?;
    Ok((port, pin))
}

fn check_port(port: u8) -> Result<Port, DioError> {
    Port::try_from(port).inspect_err(|_| {
        debug!("dio: rejected port {=u8}", port);
    })
}
