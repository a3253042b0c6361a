use std::collections::HashSet;

use rand::Rng;
use rand::thread_rng;
use rand_distr::{Distribution, Uniform};
use tracing::debug;

use crate::Value;
use crate::error::{Error, Result};

pub const DEFAULT_COUNT: usize = 52;
pub const DEFAULT_MIN: Value = 1;
pub const DEFAULT_MAX: Value = 100;

/// Source of pairwise-distinct random integers
///
/// # Arguments
/// * `count` - Number of values to draw
/// * `min` - Inclusive lower bound
/// * `max` - Inclusive upper bound
///
/// # Example
/// ```rust
/// use bst_canvas::number_pool::NumberPool;
/// let numbers = NumberPool::new(10, 1, 20).generate().unwrap();
/// assert_eq!(numbers.len(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberPool {
    pub count: usize,
    pub min: Value,
    pub max: Value,
}

impl Default for NumberPool {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

impl NumberPool {
    pub fn new(count: usize, min: Value, max: Value) -> Self {
        Self { count, min, max }
    }

    /// number of distinct values the range can produce
    pub fn range_size(&self) -> u64 {
        if self.min > self.max {
            return 0;
        }
        (self.max as i64 - self.min as i64 + 1) as u64
    }

    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(Error::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        let available = self.range_size();
        if self.count as u64 > available {
            return Err(Error::PoolTooLarge {
                count: self.count,
                available,
            });
        }
        Ok(())
    }

    pub fn generate(&self) -> Result<Vec<Value>> {
        self.generate_with(&mut thread_rng())
    }

    /// Draws until `count` distinct values are collected, keeping draw order.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Value>> {
        self.validate()?;

        let uniform = Uniform::new_inclusive(self.min, self.max);
        let mut seen = HashSet::with_capacity(self.count);
        let mut numbers = Vec::with_capacity(self.count);
        let mut draws = 0usize;

        while numbers.len() < self.count {
            let candidate = uniform.sample(rng);
            draws += 1;
            if seen.insert(candidate) {
                numbers.push(candidate);
            }
        }

        debug!(
            count = self.count,
            min = self.min,
            max = self.max,
            draws,
            "generated number pool"
        );
        Ok(numbers)
    }
}
