//! `DoubleBufferedList`: a growable list that filters itself without shifting.
//!
//! The list keeps two equally sized buffers. The primary buffer holds the
//! live elements; the secondary buffer stays empty until a compacting pass
//! moves the survivors into it and the two buffers trade roles. Removing any
//! number of elements during a pass therefore costs one move per survivor and
//! nothing per casualty.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `add()`: amortized O(1); both buffers double when full
//! - `get()`, indexing: O(1)
//! - `remove()`, `contains()`: O(n) linear scan
//! - `clear()`: O(n) drops, capacity is kept
//! - `retain_mut()`: O(n), no shifting, no allocation
//! - `par_for_each()`: O(n / workers) per worker plus thread start-up
//!
//! ## Space Complexity
//! - Two buffers of `capacity` slots each, so twice the memory of a `Vec`
//! - Capacity never shrinks
//!
//! ## Performance Guidelines
//! - Pick an initial capacity close to the expected steady-state size
//! - Parallel scans only pay off for large lists; below the configured
//!   [`ScanConfig::min_chunk_len`] they run on the calling thread
//!
//! # Compacting Pass
//!
//! ```
//! # use dualbuf::DoubleBufferedList;
//! let mut list = DoubleBufferedList::new(2).unwrap();
//! list.add(1);
//! list.add(2);
//! list.add(5);
//! list.add(6);
//! assert_eq!(list.capacity(), 4);
//!
//! // Mutate every element and keep only the even results.
//! list.retain_mut(|x| {
//!     *x += 1;
//!     *x % 2 == 0
//! });
//! assert_eq!(list.as_slice(), &[2, 6]);
//! ```
//!
//! # Parallel Scan
//!
//! ```
//! # use dualbuf::DoubleBufferedList;
//! # use std::sync::atomic::{AtomicU64, Ordering};
//! let mut list = DoubleBufferedList::new(64).unwrap();
//! list.extend(1..=100u64);
//!
//! let sum = AtomicU64::new(0);
//! list.par_for_each(|x| {
//!     sum.fetch_add(*x, Ordering::Relaxed);
//! });
//! assert_eq!(sum.into_inner(), 5050);
//! ```
//!
//! Observers receive element references only. Changing the list's structure
//! from inside a scan does not compile:
//!
//! ```compile_fail
//! # use dualbuf::DoubleBufferedList;
//! let mut list = DoubleBufferedList::new(4).unwrap();
//! list.add(1);
//! list.par_for_each(|_| list.add(2));
//! ```
//!
//! # Entity Container
//!
//! ```
//! # use dualbuf::{Entity, EntityContainer};
//! struct Particle {
//!     life: u32,
//! }
//!
//! impl Entity for Particle {
//!     fn is_deleted(&self) -> bool {
//!         self.life == 0
//!     }
//! }
//!
//! let mut particles = EntityContainer::default();
//! particles.add_entity(Particle { life: 1 });
//! particles.add_entity(Particle { life: 2 });
//!
//! particles.iterate(|p| p.life -= 1);
//! assert_eq!(particles.count_entities(), 1);
//! ```

mod container;
mod core;
mod error;
mod iter;
mod scan;

// Re-export public types and traits
pub use crate::container::{Entity, EntityContainer};
pub use crate::core::DoubleBufferedList;
pub use crate::error::DualBufError;
pub use crate::iter::{IntoIter, Iter, IterMut};
pub use crate::scan::{ScanConfig, DEFAULT_MIN_CHUNK_LEN};
