//! Digital input/output
//!
//! Pin- and port-level control of four 8-bit GPIO ports:
//!
//! | Operation      | Register touched       |
//! |----------------|------------------------|
//! | `init_pin`     | direction, one bit     |
//! | `read_pin`     | input, one bit         |
//! | `write_pin`    | output, one bit        |
//! | `toggle_pin`   | input then output      |
//! | `init_port`    | direction, masked      |
//! | `write_port`   | output, masked         |
//! | `toggle_port`  | output, masked XOR     |
//!
//! A mask of zero means "all bits" for every port operation.

mod controller;
mod error;
mod pin;
mod types;

pub use controller::Dio;
pub use error::DioError;
pub use pin::DioPin;
pub use types::{
    mask_of, normalize_mask, Direction, Level, Pin, Port, PortDirection, PortLevel, MASK_ZERO,
    NO_MASK, PIN_COUNT, PORT_COUNT,
};
