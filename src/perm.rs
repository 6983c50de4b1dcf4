//! Permutations and uniform sampling.
//!
//! A [`Permutation`] maps facility (position) to location (value) and is
//! always a bijection over `0..n`. The only mutation it offers is swapping
//! two positions, which preserves the bijection by construction; arbitrary
//! assignment is not exposed.

use rand::Rng;

use crate::error::SearchError;
use crate::neighborhood::Move;

/// A facility-to-location assignment: position `i` holds the location of
/// facility `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    /// The identity assignment: facility `i` at location `i`.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// A uniformly random assignment, via a Fisher–Yates shuffle.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut values: Vec<usize> = (0..n).collect();
        for i in (1..n).rev() {
            let j = rng.random_range(0..=i);
            values.swap(i, j);
        }
        Self(values)
    }

    /// Adopts an externally built assignment, checking the bijection.
    pub fn from_vec(values: Vec<usize>) -> Result<Self, SearchError> {
        let n = values.len();
        let mut seen = vec![false; n];
        for &v in &values {
            if v >= n {
                return Err(SearchError::InvalidPermutation(format!(
                    "value {v} out of range for dimension {n}"
                )));
            }
            if seen[v] {
                return Err(SearchError::InvalidPermutation(format!(
                    "value {v} appears more than once"
                )));
            }
            seen[v] = true;
        }
        Ok(Self(values))
    }

    /// Internal constructor for values already known to be a bijection.
    pub(crate) fn from_raw(values: Vec<usize>) -> Self {
        debug_assert!(Self::from_vec(values.clone()).is_ok());
        Self(values)
    }

    /// Number of facilities.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the empty assignment.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Location assigned to facility `i`.
    pub fn get(&self, i: usize) -> usize {
        self.0[i]
    }

    /// Exchanges the locations of the two facilities named by `mv`.
    pub fn apply(&mut self, mv: Move) {
        self.0.swap(mv.first(), mv.second());
    }

    /// A copy with `mv` applied.
    pub fn swapped(&self, mv: Move) -> Self {
        let mut copy = self.clone();
        copy.apply(mv);
        copy
    }

    /// The underlying assignment.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl std::ops::Index<usize> for Permutation {
    type Output = usize;

    fn index(&self, i: usize) -> &usize {
        &self.0[i]
    }
}

/// Draws a random swap move over `n` positions.
///
/// The first position is uniform over `0..n-1` and the second uniform over
/// the positions above it, so every one of the `n(n-1)/2` moves is
/// reachable (moves with a low first index are slightly favored).
///
/// # Panics
///
/// Panics if `n < 2`; callers reach this only through instances and
/// neighborhoods that already reject degenerate dimensions.
pub fn random_move<R: Rng>(n: usize, rng: &mut R) -> Move {
    assert!(n >= 2, "random_move requires at least two positions");
    let i = rng.random_range(0..n - 1);
    let j = rng.random_range(i + 1..n);
    Move::new(i, j)
}
