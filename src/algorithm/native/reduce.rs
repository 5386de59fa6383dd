use arrow_array::Float64Array;

use crate::trait_::Array2DTrait;

/// Axis along which a reduction collapses the N×2 values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Collapse the rows, producing one value per column (two values).
    Rows,
    /// Collapse the columns, producing one value per row (N values).
    Columns,
}

/// Reductions supported by [`Reduce`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reduction {
    Min,
    Max,
    Sum,
    Mean,
    /// Population standard deviation.
    Std,
    /// Population variance.
    Var,
    Prod,
}

impl Reduction {
    fn apply(&self, values: &[f64]) -> f64 {
        match self {
            Reduction::Min => fold_nan_propagating(values, f64::min),
            Reduction::Max => fold_nan_propagating(values, f64::max),
            Reduction::Sum => values.iter().sum(),
            Reduction::Mean => mean(values),
            Reduction::Std => variance(values).sqrt(),
            Reduction::Var => variance(values),
            Reduction::Prod => values.iter().product(),
        }
    }
}

fn fold_nan_propagating(values: &[f64], op: fn(f64, f64) -> f64) -> f64 {
    values.iter().copied().fold(values[0], |acc, v| {
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            op(acc, v)
        }
    })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn variance(values: &[f64]) -> f64 {
    let mean = mean(values);
    values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / values.len() as f64
}

/// Whole-array and per-axis reductions.
///
/// Results are plain numbers: a reduction never returns one of the array types of this crate.
/// Reductions always run sequentially, so their floating point summation order is fixed.
pub trait Reduce {
    /// Reduce all 2N components to a single value.
    fn reduce(&self, reduction: Reduction) -> f64;

    /// Reduce along `axis`.
    fn reduce_axis(&self, reduction: Reduction, axis: Axis) -> Float64Array;

    fn min(&self) -> f64 {
        self.reduce(Reduction::Min)
    }

    fn max(&self) -> f64 {
        self.reduce(Reduction::Max)
    }

    fn sum(&self) -> f64 {
        self.reduce(Reduction::Sum)
    }

    fn mean(&self) -> f64 {
        self.reduce(Reduction::Mean)
    }

    fn std(&self) -> f64 {
        self.reduce(Reduction::Std)
    }

    fn var(&self) -> f64 {
        self.reduce(Reduction::Var)
    }

    fn prod(&self) -> f64 {
        self.reduce(Reduction::Prod)
    }
}

impl<A: Array2DTrait> Reduce for A {
    fn reduce(&self, reduction: Reduction) -> f64 {
        reduction.apply(self.coords())
    }

    fn reduce_axis(&self, reduction: Reduction, axis: Axis) -> Float64Array {
        match axis {
            Axis::Rows => {
                let x1: Vec<f64> = self.x1().values().to_vec();
                let x2: Vec<f64> = self.x2().values().to_vec();
                Float64Array::from(vec![reduction.apply(&x1), reduction.apply(&x2)])
            }
            Axis::Columns => {
                Float64Array::from_iter_values(self.iter_rows().map(|row| reduction.apply(&row)))
            }
        }
    }
}
