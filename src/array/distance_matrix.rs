use arrow_array::Float64Array;
use arrow_buffer::ScalarBuffer;

/// A dense row-major matrix of pairwise values between two arrays.
///
/// Entry `(i, j)` relates row `i` of the left operand to row `j` of the right operand.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    values: ScalarBuffer<f64>,
    nrows: usize,
    ncols: usize,
}

impl DistanceMatrix {
    pub(crate) fn new(values: ScalarBuffer<f64>, nrows: usize, ncols: usize) -> Self {
        debug_assert_eq!(values.len(), nrows * ncols);
        Self {
            values,
            nrows,
            ncols,
        }
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(nrows, ncols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    #[inline]
    pub fn value(&self, row: usize, col: usize) -> f64 {
        assert!(col < self.ncols, "column index out of bounds");
        self.values[row * self.ncols + col]
    }

    /// All values of row `row`.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.ncols;
        &self.values[start..start + self.ncols]
    }

    /// The flat row-major values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The flat row-major values as an Arrow array.
    pub fn values_array(&self) -> Float64Array {
        Float64Array::new(self.values.clone(), None)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn row_major_layout() {
        let m = DistanceMatrix::new(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0].into(), 2, 3);
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.value(1, 0), 3.0);
        assert_eq!(m.row(0), &[0.0, 1.0, 2.0]);
        assert_eq!(m.values_array().len(), 6);
    }
}
