//! Typed uniform random values over pluggable entropy sources.
//!
//! randutil supplies uniformly-distributed values of every integer width,
//! floats and doubles in [0, 1), booleans with arbitrary probability, byte
//! buffers and bounded-alphabet strings, from either a fast Lehmer engine
//! or a cryptographically secure OS byte source, with two strategies for
//! safe concurrent use.
//!
//! # Architecture
//!
//! ```text
//! derive       (pure bit-pattern -> typed-value math, shared by everything)
//!     ↑
//! FastRand     (64-bit Lehmer engine — one multiply + shift per draw)
//! CryptoRand   (rejection sampling over an EntropySource, OS-backed)
//!     ↑
//! ConcurrentRand  (one shared FastRand behind a spin lock)
//! thread_rand()   (one FastRand per thread, seeded via a locked seed engine)
//! ```
//!
//! # Examples
//!
//! Deterministic draws from a fixed seed:
//!
//! ```
//! use randutil::FastRand;
//!
//! let mut rng = FastRand::with_seed(0x2545F4914F6CDD1D).unwrap();
//! let roll = rng.next_range(1, 7).unwrap();
//! assert!((1..7).contains(&roll));
//!
//! let token = rng.next_string(&['a', 'b', 'c'], 8).unwrap();
//! assert_eq!(token.len(), 8);
//! ```
//!
//! Secure values, with the source released at scope exit:
//!
//! ```
//! use randutil::CryptoRand;
//!
//! let mut rng = CryptoRand::new();
//! let key_byte = rng.next_u8().unwrap();
//! let fair = rng.next_bool().unwrap();
//! # let _ = (key_byte, fair);
//! rng.close();
//! ```
//!
//! Concurrent draws without owning an engine:
//!
//! ```
//! use randutil::{concurrent, thread_rand};
//!
//! let shared = concurrent::shared().next_u32();
//! let private = thread_rand().next_u32();
//! # let _ = (shared, private);
//! ```

#![deny(clippy::all)]

pub mod concurrent;
pub mod error;

mod crypto_rand;
mod entropy;
mod fast_rand;
mod spin_lock;
mod thread_rand;

pub(crate) mod derive;
pub(crate) mod seed;
pub(crate) mod text;

pub use concurrent::ConcurrentRand;
pub use crypto_rand::CryptoRand;
pub use entropy::{EntropySource, OsEntropy};
pub use error::RandError;
pub use fast_rand::FastRand;
pub use spin_lock::{SpinGuard, SpinLock};
pub use thread_rand::{thread_rand, ThreadRand};
