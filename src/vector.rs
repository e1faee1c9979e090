use std::cell::Cell;
use std::collections::LinkedList;
use std::ops::{Index, IndexMut};

use log::trace;
use ndarray::Array1;

use crate::{Result, VectorError};

/// A fixed-dimension Euclidean vector of `f64` magnitudes.
///
/// The vector exclusively owns its magnitudes. Its Euclidean norm is computed
/// on first request and memoized until the next call that can hand out write
/// access to the magnitudes, which drops the memo whether or not a write
/// actually happens.
///
/// The memo lives in a [`Cell`], so a `Vector` can be sent to another thread
/// but not shared between threads without external locking.
#[derive(Debug)]
pub struct Vector {
    magnitudes: Box<[f64]>,
    norm: Cell<Option<f64>>,
}

impl Vector {
    pub fn new(magnitudes: impl Into<Vec<f64>>) -> Self {
        Self::from_boxed(magnitudes.into().into_boxed_slice())
    }

    fn from_boxed(magnitudes: Box<[f64]>) -> Self {
        Self {
            magnitudes,
            norm: Cell::new(None),
        }
    }

    /// A vector of `dimension` zeros.
    pub fn with_dimension(dimension: usize) -> Self {
        Self::filled(dimension, 0.0)
    }

    /// A vector of `dimension` copies of `magnitude`.
    pub fn filled(dimension: usize, magnitude: f64) -> Self {
        Self::new(vec![magnitude; dimension])
    }

    /// The dimension-0 vector with no backing storage. This is also the state
    /// a vector is left in after [`Vector::take`].
    pub fn empty() -> Self {
        Self::from_boxed(Box::default())
    }

    /// Moves the magnitudes out into a new vector and leaves `self` empty.
    ///
    /// The storage is handed over without copying. Neither vector keeps a
    /// memoized norm afterwards.
    pub fn take(&mut self) -> Vector {
        let magnitudes = std::mem::take(&mut self.magnitudes);
        self.invalidate_norm();
        Self::from_boxed(magnitudes)
    }

    /// Replaces `self` with the storage of `source`, leaving `source` empty.
    pub fn move_from(&mut self, source: &mut Vector) {
        *self = source.take();
    }

    pub fn dimension(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<f64> {
        self.magnitudes
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Write access to one magnitude.
    ///
    /// The memoized norm is dropped on every call, including calls that fail
    /// the bounds check or only read through the returned reference.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut f64> {
        self.invalidate_norm();
        let dimension = self.dimension();
        self.magnitudes
            .get_mut(index)
            .ok_or(VectorError::IndexOutOfRange { index, dimension })
    }

    pub fn set(&mut self, index: usize, magnitude: f64) -> Result<()> {
        *self.get_mut(index)? = magnitude;
        Ok(())
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.magnitudes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.magnitudes.iter()
    }

    /// Drops the memoized norm.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, f64> {
        self.magnitudes_mut().iter_mut()
    }

    pub(crate) fn magnitudes_mut(&mut self) -> &mut [f64] {
        self.invalidate_norm();
        &mut self.magnitudes
    }

    pub(crate) fn invalidate_norm(&self) {
        self.norm.set(None);
    }

    pub(crate) fn out_of_range(&self, index: usize) -> VectorError {
        VectorError::IndexOutOfRange {
            index,
            dimension: self.dimension(),
        }
    }

    /// The memoized norm, if one is currently held.
    pub fn cached_norm(&self) -> Option<f64> {
        self.norm.get()
    }

    /// `sqrt(Σ mᵢ²)`, computed on the first call after construction or
    /// mutation and served from the memo until the next mutation.
    pub fn euclidean_norm(&self) -> f64 {
        if let Some(norm) = self.norm.get() {
            return norm;
        }
        let norm = self
            .magnitudes
            .iter()
            .fold(0.0, |acc, m| acc + m * m)
            .sqrt();
        trace!(
            "computed euclidean norm {} for dimension {}",
            norm,
            self.dimension()
        );
        self.norm.set(Some(norm));
        norm
    }

    /// Each magnitude divided by the norm. A zero vector yields `NaN`s.
    pub fn unit_vector(&self) -> Vector {
        let norm = self.euclidean_norm();
        self.magnitudes.iter().map(|m| m / norm).collect()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.magnitudes.to_vec()
    }

    pub fn to_list(&self) -> LinkedList<f64> {
        self.magnitudes.iter().copied().collect()
    }

    pub fn to_array1(&self) -> Array1<f64> {
        Array1::from_vec(self.to_vec())
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::with_dimension(1)
    }
}

impl Clone for Vector {
    fn clone(&self) -> Self {
        Self::from_boxed(self.magnitudes.clone())
    }

    fn clone_from(&mut self, source: &Self) {
        if self.dimension() == source.dimension() {
            self.magnitudes.copy_from_slice(&source.magnitudes);
        } else {
            self.magnitudes = source.magnitudes.clone();
        }
        self.invalidate_norm();
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    /// Panics when `index >= self.dimension()`.
    #[track_caller]
    fn index(&self, index: usize) -> &f64 {
        match self.magnitudes.get(index) {
            Some(magnitude) => magnitude,
            None => panic!("{}", self.out_of_range(index)),
        }
    }
}

impl IndexMut<usize> for Vector {
    /// Drops the memoized norm. Panics when `index >= self.dimension()`.
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match self.get_mut(index) {
            Ok(magnitude) => magnitude,
            Err(e) => panic!("{}", e),
        }
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<f64>>())
    }
}

impl From<Vec<f64>> for Vector {
    fn from(magnitudes: Vec<f64>) -> Self {
        Self::new(magnitudes)
    }
}

impl From<&[f64]> for Vector {
    fn from(magnitudes: &[f64]) -> Self {
        Self::new(magnitudes)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(magnitudes: [f64; N]) -> Self {
        Self::new(magnitudes)
    }
}

impl From<LinkedList<f64>> for Vector {
    fn from(magnitudes: LinkedList<f64>) -> Self {
        magnitudes.into_iter().collect()
    }
}

impl From<Array1<f64>> for Vector {
    fn from(magnitudes: Array1<f64>) -> Self {
        Self::new(magnitudes.to_vec())
    }
}

impl From<Vector> for Vec<f64> {
    fn from(vector: Vector) -> Self {
        vector.magnitudes.into_vec()
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

impl From<&Vector> for Array1<f64> {
    fn from(vector: &Vector) -> Self {
        vector.to_array1()
    }
}

impl IntoIterator for Vector {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.magnitudes.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
