//! Single-pin handle implementing the `embedded-hal` digital traits
//!
//! Lets generic drivers (LEDs, relays, buttons, bit-banged buses) run on top
//! of the DIO controller without knowing about ports and masks.

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};
use sos_hal::GpioPort;

use super::controller::Dio;
use super::error::DioError;
use super::types::{Direction, Level, Pin, Port};

/// A validated (port, pin) pair borrowed from a [`Dio`]
pub struct DioPin<'a, P: GpioPort> {
    dio: &'a Dio<P>,
    port: Port,
    pin: Pin,
}

impl<'a, P: GpioPort> DioPin<'a, P> {
    pub(crate) fn new(dio: &'a Dio<P>, port: Port, pin: Pin) -> Self {
        Self { dio, port, pin }
    }

    pub fn port(&self) -> Port {
        self.port
    }

    pub fn pin(&self) -> Pin {
        self.pin
    }

    /// Switch the pin between input and output
    pub fn set_direction(&mut self, direction: Direction) -> Result<(), DioError> {
        self.dio.init_pin(self.port, self.pin, direction)
    }

    /// Read the pin level from the input register
    pub fn level(&self) -> Result<Level, DioError> {
        self.dio.read_pin(self.port, self.pin)
    }
}

impl<P: GpioPort> ErrorType for DioPin<'_, P> {
    type Error = DioError;
}

impl<P: GpioPort> OutputPin for DioPin<'_, P> {
    fn set_low(&mut self) -> Result<(), DioError> {
        self.dio.write_pin(self.port, self.pin, Level::Low)
    }

    fn set_high(&mut self) -> Result<(), DioError> {
        self.dio.write_pin(self.port, self.pin, Level::High)
    }
}

impl<P: GpioPort> StatefulOutputPin for DioPin<'_, P> {
    fn is_set_high(&mut self) -> Result<bool, DioError> {
        Ok(self.dio.output_bit(self.port, self.pin))
    }

    fn is_set_low(&mut self) -> Result<bool, DioError> {
        Ok(!self.dio.output_bit(self.port, self.pin))
    }

    fn toggle(&mut self) -> Result<(), DioError> {
        self.dio.toggle_pin(self.port, self.pin)
    }
}

impl<P: GpioPort> InputPin for DioPin<'_, P> {
    fn is_high(&mut self) -> Result<bool, DioError> {
        Ok(self.level()?.is_high())
    }

    fn is_low(&mut self) -> Result<bool, DioError> {
        Ok(self.level()?.is_low())
    }
}
