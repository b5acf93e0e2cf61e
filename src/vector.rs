//! Fixed-length numeric vector with bounds-checked and raw slice access.

use rand::Rng;

use crate::element::Element;
use crate::error::{ReduceError, ReduceResult};

/// A fixed-length, contiguous sequence of numeric elements.
///
/// The length is set at construction and never changes. Elements start at
/// `T::zero()` and are overwritten by [`fill_random`](NumVec::fill_random);
/// after the fill phase the kernels only read. The raw view handed out by
/// [`as_slice`](NumVec::as_slice) borrows the vector and cannot outlive it.
#[derive(Debug, Clone)]
pub struct NumVec<T: Element> {
    data: Vec<T>,
}

impl<T: Element> NumVec<T> {
    /// Allocates storage for `len` elements, all initialized to `T::zero()`.
    ///
    /// Returns [`ReduceError::Allocation`] when the storage cannot be
    /// obtained; no partial vector exists in that case.
    pub fn new(len: usize) -> ReduceResult<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| ReduceError::Allocation { len })?;
        data.resize(len, T::zero());
        Ok(Self { data })
    }

    /// Fixed length of the vector.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bounds-checked element read. `None` outside `[0, len)`.
    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<T> {
        self.data.get(index).copied()
    }

    /// Bounds-checked element read, surfacing the out-of-range case as
    /// [`ReduceError::IndexOutOfBounds`]. In-contract kernel loops never hit
    /// this error; it marks an implementation bug in a loop bound.
    pub fn try_get(&self, index: usize) -> ReduceResult<T> {
        self.get(index).ok_or(ReduceError::IndexOutOfBounds {
            index,
            len: self.data.len(),
        })
    }

    /// Read-only view of the backing storage, for kernels that traverse at
    /// slice speed instead of through the element accessor.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable view of the backing storage, for the write phase that
    /// precedes measurement.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Overwrites every element with an independent uniform draw from
    /// `[lo, hi]` (integral) or `[lo, hi)` (floating-point). Each call
    /// produces fresh content.
    pub fn fill_random(&mut self, lo: T, hi: T) {
        self.fill_random_with(&mut rand::thread_rng(), lo, hi);
    }

    /// [`fill_random`](NumVec::fill_random) with a caller-supplied generator,
    /// for deterministic fills in tests.
    pub fn fill_random_with<R: Rng + ?Sized>(&mut self, rng: &mut R, lo: T, hi: T) {
        for slot in self.as_mut_slice() {
            *slot = T::sample(rng, lo, hi);
        }
    }
}
