//! DIO error codes

use core::fmt;

/// Errors returned by the DIO driver
///
/// Every error is an argument-validation failure detected before any
/// register is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DioError {
    /// Pin number is 8 or above
    WrongPin = 2,
    /// Port number is 4 or above
    WrongPort = 3,
    /// Pin level or pin direction outside {0, 1}
    WrongPinValue = 4,
    /// Port level other than 0x00 or 0xFF
    WrongPortValue = 5,
    /// Reading the pin failed while toggling it
    ReadError = 6,
}

impl DioError {
    /// Numeric outcome code, for callers that report status as a byte
    ///
    /// Zero is reserved for success and 1 for the retired generic error.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Reverse of [`DioError::code`]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            2 => Some(DioError::WrongPin),
            3 => Some(DioError::WrongPort),
            4 => Some(DioError::WrongPinValue),
            5 => Some(DioError::WrongPortValue),
            6 => Some(DioError::ReadError),
            _ => None,
        }
    }
}

impl fmt::Display for DioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            DioError::WrongPin => "pin number out of range",
            DioError::WrongPort => "port number out of range",
            DioError::WrongPinValue => "pin value must be 0 or 1",
            DioError::WrongPortValue => "port value must be 0x00 or 0xFF",
            DioError::ReadError => "pin read failed",
        };
        f.write_str(msg)
    }
}

impl embedded_hal::digital::Error for DioError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for err in [
            DioError::WrongPin,
            DioError::WrongPort,
            DioError::WrongPinValue,
            DioError::WrongPortValue,
            DioError::ReadError,
        ] {
            assert_eq!(DioError::from_code(err.code()), Some(err));
        }
        assert_eq!(DioError::from_code(0), None);
        assert_eq!(DioError::from_code(1), None);
    }
}
