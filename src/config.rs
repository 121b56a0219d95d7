use crate::error::{Error, Result};

/// Tunables for a [`HashTable`](crate::HashTable). The defaults reproduce the reference table:
/// 53 buckets to start, grow above 70% load, shrink below 10%.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Floor for the base size. Construction clamps up to it and down-resizes stop at it.
    pub min_base_size: usize,
    pub grow_load_percent: usize,
    pub shrink_load_percent: usize,
    /// Multiplier of the primary hash.
    pub prime_a: usize,
    /// Multiplier of the step hash.
    pub prime_b: usize,
}

impl Config {
    pub const MIN_BASE_SIZE: usize = 50;
    pub const GROW_LOAD_PERCENT: usize = 70;
    pub const SHRINK_LOAD_PERCENT: usize = 10;
    pub const PRIME_A: usize = 151;
    pub const PRIME_B: usize = 163;
    /// With at most 90% load before an insert, at least 11 buckets keep one free after it.
    pub const MAX_GROW_LOAD_PERCENT: usize = 90;
    pub const MIN_BASE_FLOOR: usize = 11;
    /// Hash multipliers must exceed the range of a byte.
    pub const MIN_HASH_PRIME: usize = 128;

    pub fn validate(&self) -> Result<()> {
        if self.min_base_size < Self::MIN_BASE_FLOOR {
            return Err(Error::InvalidConfig(format!(
                "min_base_size must be at least {}, got {}",
                Self::MIN_BASE_FLOOR,
                self.min_base_size
            )));
        }
        if self.grow_load_percent == 0 || self.grow_load_percent > Self::MAX_GROW_LOAD_PERCENT {
            return Err(Error::InvalidConfig(format!(
                "grow_load_percent must be in 1..={}, got {}",
                Self::MAX_GROW_LOAD_PERCENT,
                self.grow_load_percent
            )));
        }
        // a table halved by a shrink must still sit under the grow threshold
        if self.shrink_load_percent * 2 >= self.grow_load_percent {
            return Err(Error::InvalidConfig(format!(
                "shrink_load_percent ({}) must be under half of grow_load_percent ({})",
                self.shrink_load_percent, self.grow_load_percent
            )));
        }
        if self.prime_a <= Self::MIN_HASH_PRIME || self.prime_b <= Self::MIN_HASH_PRIME {
            return Err(Error::InvalidConfig(format!(
                "hash primes must exceed {}, got {} and {}",
                Self::MIN_HASH_PRIME,
                self.prime_a,
                self.prime_b
            )));
        }
        if self.prime_a == self.prime_b {
            return Err(Error::InvalidConfig(format!(
                "hash primes must differ, both are {}",
                self.prime_a
            )));
        }
        Ok(())
    }

    /// Is the load factor above the grow threshold?
    #[inline]
    pub(crate) fn should_grow(&self, count: usize, size: usize) -> bool {
        count * 100 > size * self.grow_load_percent
    }

    /// Is the load factor below the shrink threshold?
    #[inline]
    pub(crate) fn should_shrink(&self, count: usize, size: usize) -> bool {
        count * 100 < size * self.shrink_load_percent
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_base_size: Self::MIN_BASE_SIZE,
            grow_load_percent: Self::GROW_LOAD_PERCENT,
            shrink_load_percent: Self::SHRINK_LOAD_PERCENT,
            prime_a: Self::PRIME_A,
            prime_b: Self::PRIME_B,
        }
    }
}
