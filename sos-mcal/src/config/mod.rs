//! Configuration types
//!
//! Build-time constants and static pin tables. Pin tables can be stored as
//! postcard binary data (with the `serde` feature) or written as short text
//! entries in board files.

pub mod dio;
pub mod timer;

pub use dio::*;
pub use timer::*;
