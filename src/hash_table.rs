use crate::config::Config;
use crate::error::{Error, Result};
use crate::prime::next_prime;
use tracing::{debug, trace, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Slot {
    #[default]
    Empty,
    /// Was occupied. Lookups keep probing past it.
    Tombstone,
    Occupied {
        key: String,
        value: String,
    },
}

impl Slot {
    #[inline]
    fn holds(&self, key: &str) -> bool {
        matches!(self, Slot::Occupied { key: k, .. } if k == key)
    }
}

/// Polynomial rolling hash of the bytes of `s` with multiplier `a`, reduced modulo `m` at every
/// step so long keys never overflow.
///
/// Equivalent to `(s[0]·a^(n-1) + s[1]·a^(n-2) + ... + s[n-1]) mod m`.
fn hash(s: &str, a: usize, m: usize) -> usize {
    let a: u128 = a as u128;
    let m: u128 = m as u128;
    let mut h: u128 = 0;
    for byte in s.bytes() {
        h = (h * a + byte as u128) % m;
    }
    h as usize
}

/// Double hashing probe sequence. Yields at most `size` indices, and every index of a prime
/// sized table exactly once, because the step lies in `1..size`.
#[derive(Debug, Clone, Copy)]
struct Probe {
    index: usize,
    step: usize,
    size: usize,
    remaining: usize,
}

impl Iterator for Probe {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let current: usize = self.index;
        self.index = (self.index + self.step) % self.size;
        self.remaining -= 1;
        Some(current)
    }
}

fn allocate_buckets(size: usize) -> Result<Vec<Slot>> {
    let mut buckets: Vec<Slot> = Vec::new();
    buckets
        .try_reserve_exact(size)
        .map_err(|_| Error::AllocationFailure { slots: size })?;
    buckets.resize_with(size, Slot::default);
    Ok(buckets)
}

/// A string to string dictionary using open addressing with double hashing.
///
/// The bucket array length is always prime. It grows before an insert once the load passes
/// [`Config::grow_load_percent`] and shrinks before a delete once the load drops below
/// [`Config::shrink_load_percent`], never going under [`Config::min_base_size`].
#[derive(Debug, Clone)]
pub struct HashTable {
    config: Config,
    base_size: usize,
    size: usize,
    count: usize,
    buckets: Vec<Slot>,
}

impl HashTable {
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default(), Config::MIN_BASE_SIZE)
    }

    /// Creates a table with the default config. `base_size` is clamped up to the minimum.
    pub fn with_base_size(base_size: usize) -> Result<Self> {
        Self::with_config(Config::default(), base_size)
    }

    pub fn with_config(config: Config, base_size: usize) -> Result<Self> {
        config.validate()?;
        Self::build(config, base_size.max(config.min_base_size))
    }

    fn build(config: Config, base_size: usize) -> Result<Self> {
        let size: usize = next_prime(base_size);
        Ok(HashTable {
            config,
            base_size,
            size,
            count: 0,
            buckets: allocate_buckets(size)?,
        })
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Length of the bucket array. Always prime.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn base_size(&self) -> usize {
        self.base_size
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.size as f64
    }

    pub fn tombstones(&self) -> usize {
        self.buckets
            .iter()
            .filter(|slot| matches!(slot, Slot::Tombstone))
            .count()
    }

    fn probe(&self, key: &str) -> Probe {
        // hash_b is taken modulo size - 1 so that hash_b + 1 is never a multiple of size
        let start: usize = hash(key, self.config.prime_a, self.size);
        let step: usize = hash(key, self.config.prime_b, self.size - 1) + 1;
        Probe {
            index: start,
            step,
            size: self.size,
            remaining: self.size,
        }
    }

    /// Inserts or updates `key`. The table stores its own copies of both strings.
    ///
    /// Tombstones do not count towards the load, so a table whose free buckets have all been
    /// tombstoned only compacts on its next resize. Until then a new key or a missed lookup walks
    /// all `size` buckets.
    pub fn insert(&mut self, key: &str, value: &str) -> Result<()> {
        if self.config.should_grow(self.count, self.size) {
            self.resize(self.base_size * 2)?;
        }
        self.place(key, value)
    }

    fn place(&mut self, key: &str, value: &str) -> Result<()> {
        let mut tombstone: Option<usize> = None;
        let mut empty: Option<usize> = None;
        for index in self.probe(key) {
            match &mut self.buckets[index] {
                Slot::Empty => {
                    empty = Some(index);
                    break;
                }
                Slot::Tombstone => {
                    if tombstone.is_none() {
                        tombstone = Some(index);
                    }
                }
                Slot::Occupied { key: k, value: v } if k == key => {
                    *v = value.to_owned();
                    return Ok(());
                }
                Slot::Occupied { .. } => {}
            }
        }
        // The key is absent from its whole chain, so the first tombstone can be reused
        let index: usize = match tombstone.or(empty) {
            Some(index) => index,
            None => {
                warn!(size = self.size, count = self.count, "probe sequence exhausted");
                return Err(Error::CapacityExhausted { size: self.size });
            }
        };
        self.buckets[index] = Slot::Occupied {
            key: key.to_owned(),
            value: value.to_owned(),
        };
        self.count += 1;
        Ok(())
    }

    pub fn search(&self, key: &str) -> Option<&str> {
        for index in self.probe(key) {
            match self.buckets.get(index)? {
                Slot::Empty => return None,
                Slot::Occupied { key: k, value } if k == key => return Some(value.as_str()),
                Slot::Tombstone | Slot::Occupied { .. } => {}
            }
        }
        None
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Removes `key`, returning whether it was present.
    ///
    /// Every matching slot up to the first empty bucket is tombstoned and the count drops by the
    /// number of slots actually removed.
    pub fn delete(&mut self, key: &str) -> Result<bool> {
        if self.config.should_shrink(self.count, self.size) {
            self.resize(self.base_size / 2)?;
        }
        let mut removed: usize = 0;
        for index in self.probe(key) {
            if self.buckets[index] == Slot::Empty {
                break;
            }
            if self.buckets[index].holds(key) {
                self.buckets[index] = Slot::Tombstone;
                removed += 1;
            }
        }
        self.count -= removed;
        Ok(removed > 0)
    }

    /// Rebuilds the table at `base_size`, dropping tombstones. Requests below the configured
    /// minimum are ignored. On failure the table is left untouched.
    fn resize(&mut self, base_size: usize) -> Result<()> {
        if base_size < self.config.min_base_size {
            trace!(
                base_size,
                min_base_size = self.config.min_base_size,
                "resize below minimum ignored"
            );
            return Ok(());
        }
        if self.config.should_grow(self.count, next_prime(base_size)) {
            trace!(base_size, count = self.count, "resize too small for live entries ignored");
            return Ok(());
        }
        let mut table: HashTable = Self::build(self.config, base_size)?;
        for slot in self.buckets.iter() {
            if let Slot::Occupied { key, value } = slot {
                table.place(key, value)?;
            }
        }
        debug!(
            old_size = self.size,
            new_size = table.size,
            count = table.count,
            "resized hash table"
        );
        *self = table;
        Ok(())
    }
}
