//! Static pin configuration
//!
//! A board describes its pins once, as a table of [`PinConfig`] entries, and
//! applies it at startup with [`Dio::configure`](crate::dio::Dio::configure).
//!
//! Text form, one entry per pin:
//! - `"PA3"` -> port A, pin 3, floating input (pull-up off)
//! - `"PA3:out"` -> output, level untouched
//! - `"PA3:out:high"` -> output, driven high
//! - `"PD2:in:pullup"` -> input with pull-up

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dio::{Direction, Level, Pin, Port};

/// Maximum entries in a pin table (4 ports x 8 pins)
pub const MAX_PINS: usize = 32;

/// Pin table
pub type DioConfig = Vec<PinConfig, MAX_PINS>;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Too many entries (exceeded heapless capacity)
    TooManyPins,
    /// Invalid pin string
    InvalidPin,
    /// Invalid direction or level field
    InvalidValue,
    /// Binary table could not be written
    Encode,
    /// Binary table could not be read
    Decode,
}

/// Configuration of a single pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    pub port: Port,
    pub pin: Pin,
    pub direction: Direction,
    /// Level written before the direction is set. For an input pin, HIGH
    /// enables the internal pull-up and LOW disables it; `None` leaves the
    /// output register untouched.
    pub initial: Option<Level>,
}

impl PinConfig {
    /// Floating input, pull-up disabled
    pub const fn input(port: Port, pin: Pin) -> Self {
        Self {
            port,
            pin,
            direction: Direction::In,
            initial: Some(Level::Low),
        }
    }

    /// Input with internal pull-up
    pub const fn input_pullup(port: Port, pin: Pin) -> Self {
        Self {
            port,
            pin,
            direction: Direction::In,
            initial: Some(Level::High),
        }
    }

    /// Output driven to `level`
    pub const fn output(port: Port, pin: Pin, level: Level) -> Self {
        Self {
            port,
            pin,
            direction: Direction::Out,
            initial: Some(level),
        }
    }

    /// Parse a text entry such as `"PB1:out:high"`
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let mut fields = s.trim().split(':');

        let (port, pin) = fields
            .next()
            .and_then(parse_pin_string)
            .ok_or(ConfigError::InvalidPin)?;

        let direction = match fields.next().map(str::trim) {
            None | Some("in") => Direction::In,
            Some("out") => Direction::Out,
            Some(_) => return Err(ConfigError::InvalidValue),
        };

        let initial = match (direction, fields.next().map(str::trim)) {
            (Direction::In, None) => Some(Level::Low),
            (Direction::Out, None) => None,
            (Direction::Out, Some("high")) => Some(Level::High),
            (Direction::Out, Some("low")) => Some(Level::Low),
            (Direction::In, Some("pullup")) => Some(Level::High),
            _ => return Err(ConfigError::InvalidValue),
        };

        if fields.next().is_some() {
            return Err(ConfigError::InvalidValue);
        }

        Ok(Self {
            port,
            pin,
            direction,
            initial,
        })
    }
}

/// Parse a pin name
///
/// Supports formats:
/// - "PA0" -> (Port A, Pin 0)
/// - "pd7" -> (Port D, Pin 7)
pub fn parse_pin_string(s: &str) -> Option<(Port, Pin)> {
    let s = s.trim();
    let mut chars = s.chars();

    if !matches!(chars.next(), Some('P' | 'p')) {
        return None;
    }

    let port = Port::from_letter(chars.next()?)?;
    let digit = chars.next()?.to_digit(10)?;
    if chars.next().is_some() {
        return None;
    }

    Some((port, Pin::from_u8(digit as u8)?))
}

/// Parse a list of text entries into a pin table
pub fn parse_table<'a, I>(entries: I) -> Result<DioConfig, ConfigError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut table = DioConfig::new();
    for entry in entries {
        table
            .push(PinConfig::parse(entry)?)
            .map_err(|_| ConfigError::TooManyPins)?;
    }
    Ok(table)
}

/// Serialize a pin table into `buffer`
///
/// Returns the number of bytes written.
#[cfg(feature = "serde")]
pub fn encode(table: &DioConfig, buffer: &mut [u8]) -> Result<usize, ConfigError> {
    postcard::to_slice(table, buffer)
        .map(|used| used.len())
        .map_err(|_| ConfigError::Encode)
}

/// Deserialize a pin table written by [`encode`]
#[cfg(feature = "serde")]
pub fn decode(bytes: &[u8]) -> Result<DioConfig, ConfigError> {
    postcard::from_bytes(bytes).map_err(|_| ConfigError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pin_string() {
        assert_eq!(parse_pin_string("PA0"), Some((Port::A, Pin::P0)));
        assert_eq!(parse_pin_string(" pd7 "), Some((Port::D, Pin::P7)));
        assert_eq!(parse_pin_string("PC3"), Some((Port::C, Pin::P3)));

        // Invalid
        assert_eq!(parse_pin_string("PA8"), None);
        assert_eq!(parse_pin_string("PE1"), None);
        assert_eq!(parse_pin_string("A1"), None);
        assert_eq!(parse_pin_string("P"), None);
        assert_eq!(parse_pin_string(""), None);

        // Exactly one digit after the port letter
        assert_eq!(parse_pin_string("PA+3"), None);
        assert_eq!(parse_pin_string("PA03"), None);
        assert_eq!(parse_pin_string("PA3x"), None);
        assert_eq!(parse_pin_string("PA٣"), None);
    }

    #[test]
    fn test_parse_entry() {
        assert_eq!(
            PinConfig::parse("PA3"),
            Ok(PinConfig::input(Port::A, Pin::P3))
        );
        assert_eq!(
            PinConfig::parse("PB1:out:high"),
            Ok(PinConfig::output(Port::B, Pin::P1, Level::High))
        );
        assert_eq!(
            PinConfig::parse("PD2:in:pullup"),
            Ok(PinConfig::input_pullup(Port::D, Pin::P2))
        );

        let out = PinConfig::parse("PC0:out").unwrap();
        assert_eq!(out.direction, Direction::Out);
        assert_eq!(out.initial, None);

        assert_eq!(PinConfig::parse("PA9:out"), Err(ConfigError::InvalidPin));
        assert_eq!(
            PinConfig::parse("PA1:sideways"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            PinConfig::parse("PA1:in:high"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            PinConfig::parse("PA1:out:low:x"),
            Err(ConfigError::InvalidValue)
        );
    }

    #[test]
    fn test_plain_input_disables_pullup() {
        let plain = PinConfig::parse("PA3:in").unwrap();
        assert_eq!(plain, PinConfig::input(Port::A, Pin::P3));
        assert_eq!(plain.initial, Some(Level::Low));

        let pullup = PinConfig::parse("PA3:in:pullup").unwrap();
        assert_eq!(pullup.initial, Some(Level::High));
    }

    #[test]
    fn test_parse_table_capacity() {
        let names = [
            "PA0", "PA1", "PA2", "PA3", "PA4", "PA5", "PA6", "PA7", "PB0", "PB1", "PB2", "PB3",
            "PB4", "PB5", "PB6", "PB7", "PC0", "PC1", "PC2", "PC3", "PC4", "PC5", "PC6", "PC7",
            "PD0", "PD1", "PD2", "PD3", "PD4", "PD5", "PD6", "PD7",
        ];
        let table = parse_table(names).unwrap();
        assert_eq!(table.len(), MAX_PINS);

        let overflow = names.iter().copied().chain(["PA0"]);
        assert_eq!(parse_table(overflow), Err(ConfigError::TooManyPins));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_binary_table() {
        let table = parse_table(["PA3:out:high", "PB0", "PD2:in:pullup"]).unwrap();

        let mut buffer = [0u8; 64];
        let len = encode(&table, &mut buffer).unwrap();
        assert_eq!(decode(&buffer[..len]), Ok(table.clone()));

        assert_eq!(encode(&table, &mut buffer[..2]), Err(ConfigError::Encode));
        assert_eq!(decode(&[0xFF, 0xFF]), Err(ConfigError::Decode));
    }
}
