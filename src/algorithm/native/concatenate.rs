use crate::array::Array2D;
use crate::error::{Result, Vectorized2DError};
use crate::trait_::Array2DTrait;

/// Vertically stack a sequence of arrays into one.
pub trait Concatenate: Sized {
    type Output;

    fn concatenate(&self) -> Self::Output;
}

impl<A: Array2DTrait> Concatenate for &[A] {
    type Output = Result<A>;

    fn concatenate(&self) -> Self::Output {
        if self.is_empty() {
            log::debug!("refusing to concatenate an empty list of arrays");
            return Err(Vectorized2DError::Shape(
                "need at least one array to concatenate".to_string(),
            ));
        }

        let output_capacity = self.iter().fold(0, |sum, val| sum + val.coords().len());
        let mut coords = Vec::with_capacity(output_capacity);
        self.iter()
            .for_each(|chunk| coords.extend_from_slice(chunk.coords()));
        Ok(A::from_array2d(Array2D::try_new(coords.into())?))
    }
}
