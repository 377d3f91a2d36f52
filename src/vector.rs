use crate::{Result, VectorError};
use ndarray::{Array1, ArrayView1};
use std::collections::LinkedList;
use std::fmt;

/// A dense, fixed-dimension vector of `f64` magnitudes with value semantics.
///
/// The dimension is set at construction and only changes when the whole
/// value is replaced (assignment, [`Vector::take`]).
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct Vector {
    magnitude: Vec<f64>,
}

impl Vector {
    /// Single-element zero vector.
    pub fn new() -> Self {
        Self::zeros(1)
    }

    /// Dimension 0. This is also the state left behind by [`Vector::take`].
    pub fn empty() -> Self {
        Self {
            magnitude: Vec::new(),
        }
    }

    pub fn zeros(dimension: usize) -> Self {
        Self::with_fill(dimension, 0.0)
    }

    pub fn with_fill(dimension: usize, fill: f64) -> Self {
        Self {
            magnitude: vec![fill; dimension],
        }
    }

    pub fn from_slice(values: &[f64]) -> Self {
        Self {
            magnitude: values.to_vec(),
        }
    }

    /// Moves the buffer out, leaving `self` as an empty vector.
    pub fn take(&mut self) -> Vector {
        Vector {
            magnitude: std::mem::take(&mut self.magnitude),
        }
    }

    pub fn num_dimensions(&self) -> usize {
        self.magnitude.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitude.is_empty()
    }

    pub fn raw_magnitude(&self) -> &[f64] {
        &self.magnitude
    }

    pub fn raw_magnitude_mut(&mut self) -> &mut [f64] {
        &mut self.magnitude
    }

    pub fn view(&self) -> ArrayView1<'_, f64> {
        ArrayView1::from(self.magnitude.as_slice())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.magnitude.iter()
    }

    pub fn get(&self, index: usize) -> Result<f64> {
        self.magnitude
            .get(index)
            .copied()
            .ok_or(VectorError::OutOfRange {
                index,
                dimension: self.num_dimensions(),
            })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut f64> {
        let dimension = self.num_dimensions();
        self.magnitude
            .get_mut(index)
            .ok_or(VectorError::OutOfRange { index, dimension })
    }

    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    pub fn euclidean_norm(&self) -> f64 {
        let view = self.view();
        view.dot(&view).sqrt()
    }

    /// Returns a copy scaled by `1 / norm`.
    ///
    /// A zero-norm vector is not special-cased: every element becomes NaN.
    /// Use [`Vector::try_create_unit_vector`] to get an error instead.
    pub fn create_unit_vector(&self) -> Vector {
        let norm = self.euclidean_norm();
        if norm == 0.0 {
            log::warn!(
                "normalizing a zero-norm vector of dimension {}",
                self.num_dimensions()
            );
        }
        self.iter().map(|value| value / norm).collect()
    }

    pub fn try_create_unit_vector(&self) -> Result<Vector> {
        if self.euclidean_norm() == 0.0 {
            return Err(VectorError::ZeroNorm);
        }
        Ok(self.create_unit_vector())
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.magnitude.clone()
    }

    pub fn to_list(&self) -> LinkedList<f64> {
        self.magnitude.iter().copied().collect()
    }

    pub fn to_array(&self) -> Array1<f64> {
        self.view().to_owned()
    }

    pub fn into_array(self) -> Array1<f64> {
        Array1::from_vec(self.magnitude)
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<f64>> for Vector {
    fn from(magnitude: Vec<f64>) -> Self {
        Self { magnitude }
    }
}

impl From<&[f64]> for Vector {
    fn from(values: &[f64]) -> Self {
        Self::from_slice(values)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(values: [f64; N]) -> Self {
        Self {
            magnitude: values.to_vec(),
        }
    }
}

impl From<ArrayView1<'_, f64>> for Vector {
    fn from(view: ArrayView1<'_, f64>) -> Self {
        Self {
            magnitude: view.to_vec(),
        }
    }
}

impl From<&Array1<f64>> for Vector {
    fn from(array: &Array1<f64>) -> Self {
        Self::from(array.view())
    }
}

impl From<Array1<f64>> for Vector {
    fn from(array: Array1<f64>) -> Self {
        Self::from(&array)
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            magnitude: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a f64> for Vector {
    fn from_iter<I: IntoIterator<Item = &'a f64>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl From<Vector> for Vec<f64> {
    fn from(vector: Vector) -> Self {
        vector.magnitude
    }
}

impl From<&Vector> for Vec<f64> {
    fn from(vector: &Vector) -> Self {
        vector.to_vec()
    }
}

impl From<&Vector> for LinkedList<f64> {
    fn from(vector: &Vector) -> Self {
        vector.to_list()
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// `[v0 v1 ... vn]`, or `[]` when empty. A precision such as `{:.2}` applies
// to every element.
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.magnitude.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match f.precision() {
                Some(precision) => write!(f, "{:.*}", precision, value)?,
                None => write!(f, "{}", value)?,
            }
        }
        write!(f, "]")
    }
}
