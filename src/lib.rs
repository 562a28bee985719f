pub mod cs;
pub mod error;

pub use cs::hashing::{ChainedHashMap, ChainedHashMapBuilder, Entry, Iter};
pub use error::{Error, Result};
