use crate::error::{Result, Vectorized2DError};

/// The row count produced by broadcasting two operands against each other.
///
/// Equal row counts pair up row by row; an operand with a single row is repeated to match the
/// other one. Anything else is an error.
pub fn broadcast_len(left: usize, right: usize) -> Result<usize> {
    if left == right || right == 1 {
        Ok(left)
    } else if left == 1 {
        Ok(right)
    } else {
        log::debug!("cannot broadcast {left} rows against {right} rows");
        Err(Vectorized2DError::IncompatibleShapes { left, right })
    }
}

/// [`broadcast_len`] folded over any number of operands.
pub fn broadcast_lens(lens: &[usize]) -> Result<usize> {
    lens.iter()
        .try_fold(1, |acc, &len| broadcast_len(acc, len))
}

/// Index of the row of an operand with `len` rows that pairs with output row `i`.
#[inline]
pub(crate) fn broadcast_index(len: usize, i: usize) -> usize {
    if len == 1 {
        0
    } else {
        i
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn equal_lengths() {
        assert_eq!(broadcast_len(5, 5).unwrap(), 5);
    }

    #[test]
    fn one_to_many() {
        assert_eq!(broadcast_len(1, 7).unwrap(), 7);
        assert_eq!(broadcast_len(7, 1).unwrap(), 7);
    }

    #[test]
    fn mismatch() {
        let err = broadcast_len(3, 4).unwrap_err();
        assert!(matches!(
            err,
            Vectorized2DError::IncompatibleShapes { left: 3, right: 4 }
        ));
    }

    #[test]
    fn many_operands() {
        assert_eq!(broadcast_lens(&[1, 4, 1, 4]).unwrap(), 4);
        assert_eq!(broadcast_lens(&[1, 1]).unwrap(), 1);
        assert!(broadcast_lens(&[2, 1, 3]).unwrap_err().is_shape_error());
    }

    #[test]
    fn index() {
        assert_eq!(broadcast_index(1, 9), 0);
        assert_eq!(broadcast_index(10, 9), 9);
    }
}
