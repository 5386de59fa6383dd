#[cfg(feature = "rayon")]
use rayon::prelude::*;

use arrow_array::Float64Array;

/// Row count from which per-row kernels are spread over the rayon thread pool.
///
/// Only used when the `rayon` feature is enabled. Every output value is produced by the same
/// closure in both paths, so results do not depend on whether the parallel path was taken.
pub const PARALLEL_ROW_THRESHOLD: usize = 1 << 16;

/// Evaluate `op` for every index in `0..len`, in order.
pub(crate) fn map_indices<F, T>(len: usize, op: F) -> Vec<T>
where
    F: Fn(usize) -> T + Sync + Send,
    T: Send,
{
    #[cfg(feature = "rayon")]
    {
        if len >= PARALLEL_ROW_THRESHOLD {
            log::trace!("running per-row kernel over {len} rows in parallel");
            let mut output_vec = Vec::with_capacity(len);
            (0..len)
                .into_par_iter()
                .map(&op)
                .collect_into_vec(&mut output_vec);
            return output_vec;
        }
    }

    (0..len).map(&op).collect()
}

/// Build a [`Float64Array`] with one value per index in `0..len`.
pub(crate) fn unary_f64<F>(len: usize, op: F) -> Float64Array
where
    F: Fn(usize) -> f64 + Sync + Send,
{
    Float64Array::from(map_indices(len, op))
}

/// Build an interleaved two-column buffer with one row per index in `0..len`.
pub(crate) fn unary_rows<F>(len: usize, op: F) -> Vec<f64>
where
    F: Fn(usize) -> [f64; 2] + Sync + Send,
{
    map_indices(len, op).into_iter().flatten().collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn values_in_order() {
        let out = unary_f64(5, |i| i as f64 * 2.0);
        assert_eq!(out.values().as_ref(), &[0.0, 2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn rows_are_interleaved() {
        let out = unary_rows(3, |i| [i as f64, -(i as f64)]);
        assert_eq!(out, vec![0.0, -0.0, 1.0, -1.0, 2.0, -2.0]);
    }

    #[test]
    fn large_inputs_keep_order() {
        let len = PARALLEL_ROW_THRESHOLD + 17;
        let out = map_indices(len, |i| i);
        assert_eq!(out.len(), len);
        assert!(out.iter().enumerate().all(|(i, v)| i == *v));
    }
}
