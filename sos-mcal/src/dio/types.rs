//! Port, pin and level identifiers
//!
//! Identifiers are plain `#[repr(u8)]` enums. The driver API also accepts raw
//! bytes, which are converted with `TryFrom<u8>`; the first out-of-range
//! value (the "count" sentinel) is rejected with the matching [`DioError`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::DioError;

/// Number of pins per port
pub const PIN_COUNT: u8 = 8;

/// Number of ports
pub const PORT_COUNT: usize = 4;

/// Mask sentinel meaning "no mask given": the operation covers every bit
pub const MASK_ZERO: u8 = 0x00;

/// Mask selecting all eight bits
pub const NO_MASK: u8 = 0xFF;

/// Replace the zero-mask sentinel with a full mask
#[inline]
pub const fn normalize_mask(mask: u8) -> u8 {
    if mask == MASK_ZERO {
        NO_MASK
    } else {
        mask
    }
}

/// Build a port mask from a list of pins
pub const fn mask_of(pins: &[Pin]) -> u8 {
    let mut mask = 0;
    let mut i = 0;
    while i < pins.len() {
        mask |= pins[i].mask();
        i += 1;
    }
    mask
}

/// GPIO port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Port {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
}

impl Port {
    /// All ports in register-table order
    pub const ALL: [Port; PORT_COUNT] = [Port::A, Port::B, Port::C, Port::D];

    /// Index into the register table
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a port from its number (0 = A)
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Port::A),
            1 => Some(Port::B),
            2 => Some(Port::C),
            3 => Some(Port::D),
            _ => None,
        }
    }

    /// Port letter as used in pin names ("PA3")
    pub const fn letter(self) -> char {
        match self {
            Port::A => 'A',
            Port::B => 'B',
            Port::C => 'C',
            Port::D => 'D',
        }
    }

    /// Parse a port letter (case-insensitive)
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'A' => Some(Port::A),
            'B' => Some(Port::B),
            'C' => Some(Port::C),
            'D' => Some(Port::D),
            _ => None,
        }
    }
}

impl From<Port> for u8 {
    fn from(port: Port) -> u8 {
        port as u8
    }
}

impl TryFrom<u8> for Port {
    type Error = DioError;

    fn try_from(value: u8) -> Result<Self, DioError> {
        Port::from_u8(value).ok_or(DioError::WrongPort)
    }
}

/// Pin within a port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Pin {
    P0 = 0,
    P1 = 1,
    P2 = 2,
    P3 = 3,
    P4 = 4,
    P5 = 5,
    P6 = 6,
    P7 = 7,
}

impl Pin {
    /// All pins, lowest bit first
    pub const ALL: [Pin; PIN_COUNT as usize] = [
        Pin::P0,
        Pin::P1,
        Pin::P2,
        Pin::P3,
        Pin::P4,
        Pin::P5,
        Pin::P6,
        Pin::P7,
    ];

    /// Bit position in the port registers
    pub const fn bit(self) -> u8 {
        self as u8
    }

    /// Single-bit mask for this pin
    pub const fn mask(self) -> u8 {
        1 << (self as u8)
    }

    /// Create a pin from its bit position
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Pin::P0),
            1 => Some(Pin::P1),
            2 => Some(Pin::P2),
            3 => Some(Pin::P3),
            4 => Some(Pin::P4),
            5 => Some(Pin::P5),
            6 => Some(Pin::P6),
            7 => Some(Pin::P7),
            _ => None,
        }
    }
}

impl From<Pin> for u8 {
    fn from(pin: Pin) -> u8 {
        pin as u8
    }
}

impl TryFrom<u8> for Pin {
    type Error = DioError;

    fn try_from(value: u8) -> Result<Self, DioError> {
        Pin::from_u8(value).ok_or(DioError::WrongPin)
    }
}

/// Logic level of a single pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Level {
    #[default]
    Low = 0,
    High = 1,
}

impl Level {
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }

    pub const fn is_low(self) -> bool {
        matches!(self, Level::Low)
    }
}

impl core::ops::Not for Level {
    type Output = Level;

    fn not(self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        level as u8
    }
}

impl TryFrom<u8> for Level {
    type Error = DioError;

    fn try_from(value: u8) -> Result<Self, DioError> {
        match value {
            0 => Ok(Level::Low),
            1 => Ok(Level::High),
            _ => Err(DioError::WrongPinValue),
        }
    }
}

/// Direction of a single pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Direction {
    #[default]
    In = 0,
    Out = 1,
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> u8 {
        direction as u8
    }
}

impl TryFrom<u8> for Direction {
    type Error = DioError;

    fn try_from(value: u8) -> Result<Self, DioError> {
        match value {
            0 => Ok(Direction::In),
            1 => Ok(Direction::Out),
            _ => Err(DioError::WrongPinValue),
        }
    }
}

/// Level pattern written to a whole port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PortLevel {
    Low = 0x00,
    High = 0xFF,
}

impl From<PortLevel> for u8 {
    fn from(level: PortLevel) -> u8 {
        level as u8
    }
}

impl TryFrom<u8> for PortLevel {
    type Error = DioError;

    /// Only the all-low and all-high patterns are accepted
    fn try_from(value: u8) -> Result<Self, DioError> {
        match value {
            0x00 => Ok(PortLevel::Low),
            0xFF => Ok(PortLevel::High),
            _ => Err(DioError::WrongPortValue),
        }
    }
}

/// Direction pattern written to a whole port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PortDirection {
    In = 0x00,
    Out = 0xFF,
}

impl From<Direction> for PortDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::In => PortDirection::In,
            Direction::Out => PortDirection::Out,
        }
    }
}

impl From<PortDirection> for u8 {
    fn from(direction: PortDirection) -> u8 {
        direction as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_bounds() {
        assert_eq!(Port::try_from(3u8), Ok(Port::D));
        assert_eq!(Port::try_from(PORT_COUNT as u8), Err(DioError::WrongPort));
        assert_eq!(Pin::try_from(7u8), Ok(Pin::P7));
        assert_eq!(Pin::try_from(PIN_COUNT), Err(DioError::WrongPin));
        assert_eq!(Level::try_from(2u8), Err(DioError::WrongPinValue));
        assert_eq!(Direction::try_from(2u8), Err(DioError::WrongPinValue));
    }

    #[test]
    fn test_port_level_rejects_partial_bytes() {
        assert_eq!(PortLevel::try_from(0x00u8), Ok(PortLevel::Low));
        assert_eq!(PortLevel::try_from(0xFFu8), Ok(PortLevel::High));
        assert_eq!(PortLevel::try_from(0x55u8), Err(DioError::WrongPortValue));
        assert_eq!(PortLevel::try_from(0x01u8), Err(DioError::WrongPortValue));
    }

    #[test]
    fn test_masks() {
        assert_eq!(normalize_mask(MASK_ZERO), NO_MASK);
        assert_eq!(normalize_mask(0x0F), 0x0F);
        assert_eq!(Pin::P3.mask(), 0b0000_1000);
        assert_eq!(mask_of(&[Pin::P0, Pin::P1, Pin::P7]), 0b1000_0011);
        assert_eq!(mask_of(&Pin::ALL), NO_MASK);
        assert_eq!(mask_of(&[]), 0);
    }

    #[test]
    fn test_port_letters() {
        for port in Port::ALL {
            assert_eq!(Port::from_letter(port.letter()), Some(port));
        }
        assert_eq!(Port::from_letter('c'), Some(Port::C));
        assert_eq!(Port::from_letter('E'), None);
    }

    #[test]
    fn test_level_complement() {
        assert_eq!(!Level::Low, Level::High);
        assert_eq!(!Level::High, Level::Low);
        assert_eq!(Level::from(true), Level::High);
    }
}
