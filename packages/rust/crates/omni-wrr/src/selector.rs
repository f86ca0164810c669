//! Weighted round-robin selector over an integer percentage distribution.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cdf::{derive_cdf, lookup_index};
use crate::error::SelectorError;

/// Weight that makes an option certain, and the total every distribution must reach.
const TOTAL_WEIGHT: u32 = 100;

/// Weighted selector over a validated probability distribution.
///
/// Each entry is the percentage chance of the option at that index. The
/// distribution is validated once by [`WeightedSelector::new`] and never
/// changes afterwards, so a selector can be shared freely across threads.
///
/// Serializes as the plain array of weights; deserialization goes through the
/// same validation as [`WeightedSelector::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i32>", into = "Vec<i32>")]
pub struct WeightedSelector {
    pdf: Vec<u32>,
    /// Index of the entry holding the full 100%, if any.
    dominant: Option<usize>,
}

impl WeightedSelector {
    /// Validate `pdf` and build a selector.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::OutOfRange`] for the first entry outside
    /// `[0, 100]`, otherwise [`SelectorError::SumMismatch`] when the entries do
    /// not add up to 100 (including an empty distribution).
    pub fn new(pdf: &[i32]) -> Result<Self, SelectorError> {
        let mut weights = Vec::with_capacity(pdf.len());
        let mut sum: i64 = 0;
        for (index, &value) in pdf.iter().enumerate() {
            let weight = u32::try_from(value)
                .ok()
                .filter(|weight| *weight <= TOTAL_WEIGHT)
                .ok_or(SelectorError::OutOfRange { index, value })?;
            sum += i64::from(value);
            weights.push(weight);
        }
        if sum != i64::from(TOTAL_WEIGHT) {
            return Err(SelectorError::SumMismatch { sum });
        }

        let dominant = weights.iter().position(|&weight| weight == TOTAL_WEIGHT);
        tracing::debug!(pdf = ?weights, dominant = ?dominant, "weighted selector created");

        Ok(Self {
            pdf: weights,
            dominant,
        })
    }

    /// The validated distribution.
    #[must_use]
    pub fn pdf(&self) -> &[u32] {
        &self.pdf
    }

    /// Number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pdf.len()
    }

    /// Always false: a valid distribution has at least one entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pdf.is_empty()
    }

    /// Index of the option weighted 100%, if there is one.
    #[must_use]
    pub fn dominant_index(&self) -> Option<usize> {
        self.dominant
    }

    /// Pick one index with probability `pdf[i] / 100`, using the thread-local generator.
    #[must_use]
    pub fn pick(&self) -> usize {
        self.pick_with(&mut rand::thread_rng())
    }

    /// Pick one index with probability `pdf[i] / 100`, drawing from `rng`.
    #[must_use]
    pub fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let cdf = derive_cdf(&self.pdf);
        lookup_index(&cdf, u64::from(rng.gen_range(0..TOTAL_WEIGHT)))
    }

    /// Order every index so that heavier options tend to come first,
    /// using the thread-local generator.
    ///
    /// See [`WeightedSelector::pick_vector_with`].
    #[must_use]
    pub fn pick_vector(&self) -> Vec<usize> {
        self.pick_vector_with(&mut rand::thread_rng())
    }

    /// Order every index so that heavier options tend to come first.
    ///
    /// Each round draws one of the not-yet-chosen indices in proportion to its
    /// raw weight. Zero-weight options are never drawn; once the positive
    /// weights are used up they follow in ascending index order. When one
    /// option holds 100% the result is the identity order with that option
    /// swapped to the front, and no randomness is consumed.
    ///
    /// The result is always a permutation of `0..self.len()`.
    #[must_use]
    pub fn pick_vector_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<usize> {
        if let Some(dominant) = self.dominant {
            tracing::trace!(dominant, "pick vector shortcut");
            let mut order: Vec<usize> = (0..self.pdf.len()).collect();
            order.swap(0, dominant);
            return order;
        }

        let mut working = self.pdf.clone();
        let mut balance = TOTAL_WEIGHT;
        let mut order = Vec::with_capacity(working.len());

        // Remaining weights always sum to `balance`, so the draw range and the
        // CDF total stay equal.
        while balance > 0 {
            let cdf = derive_cdf(&working);
            let index = lookup_index(&cdf, u64::from(rng.gen_range(0..balance)));
            order.push(index);
            balance -= working[index];
            working[index] = 0;
        }
        order.extend(
            self.pdf
                .iter()
                .enumerate()
                .filter(|(_, weight)| **weight == 0)
                .map(|(index, _)| index),
        );

        tracing::trace!(order = ?order, "pick vector sampled");
        order
    }
}

impl TryFrom<Vec<i32>> for WeightedSelector {
    type Error = SelectorError;

    fn try_from(pdf: Vec<i32>) -> Result<Self, Self::Error> {
        Self::new(&pdf)
    }
}

impl TryFrom<&[i32]> for WeightedSelector {
    type Error = SelectorError;

    fn try_from(pdf: &[i32]) -> Result<Self, Self::Error> {
        Self::new(pdf)
    }
}

impl From<WeightedSelector> for Vec<i32> {
    fn from(selector: WeightedSelector) -> Self {
        selector
            .pdf
            .into_iter()
            .map(|weight| i32::try_from(weight).unwrap_or(i32::MAX))
            .collect()
    }
}
