//! Defines [`Vectorized2DError`], representing all errors returned by this crate.

use arrow_schema::ArrowError;
use std::borrow::Cow;
use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Vectorized2DError {
    /// The input could not be reshaped into rows of two components.
    #[error("Shape error: {0}")]
    Shape(String),

    /// Two operands have row counts that cannot be broadcast together.
    ///
    /// Row counts broadcast when they are equal or when either of them is one.
    #[error("Operands with {left} and {right} rows cannot be broadcast together")]
    IncompatibleShapes { left: usize, right: usize },

    /// An operation was called on an input it is not defined for.
    #[error("Precondition violated: {0}")]
    Precondition(Cow<'static, str>),

    /// Incorrect type was passed to an operation.
    #[error("Incorrect type passed to operation: {0}")]
    IncorrectType(Cow<'static, str>),

    /// [ArrowError]
    #[error(transparent)]
    Arrow(#[from] ArrowError),
}

impl Vectorized2DError {
    /// Whether this error reports an invalid or non-broadcastable shape.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Vectorized2DError::Shape(_) | Vectorized2DError::IncompatibleShapes { .. }
        )
    }
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Vectorized2DError>;

impl From<Vectorized2DError> for ArrowError {
    fn from(err: Vectorized2DError) -> Self {
        match err {
            Vectorized2DError::Arrow(err) => err,
            _ => ArrowError::ExternalError(Box::new(err)),
        }
    }
}
