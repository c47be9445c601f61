use thiserror::Error;
#[derive(Debug, Error, Clone, Copy, PartialEq)]

pub enum Error {
    #[error("'{operation}' requires a vector with non-zero magnitude")]
    ZeroMagnitude { operation: &'static str },

    #[error("Component ({x}, {y}) is not a finite number")]
    NonFinite { x: f64, y: f64 },
}
