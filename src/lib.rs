//! String keyed hash table using open addressing with double hashing, tombstone deletion and
//! prime sized bucket arrays that grow and shrink with the load factor.

pub mod config;
pub mod error;
pub mod hash_table;
pub mod prime;

pub use config::Config;
pub use error::{Error, Result};
pub use hash_table::HashTable;
pub use prime::{is_prime, next_prime, Primality};
