//! Per-worker concurrency wrapper.
//!
//! Each thread owns an independent [`FastRand`], created lazily on the
//! thread's first access. The one-time seed is drawn through a spin-locked
//! seed engine so threads starting in the same clock tick cannot collide on
//! identical time seeds; after that first draw, no lock is touched. This
//! trades one-time contention at thread startup for unlocked steady-state
//! draws.
//!
//! [`ThreadRand`] is a handle to the calling thread's engine and is neither
//! `Send` nor `Sync`; each thread obtains its own via [`thread_rand`].

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::LazyLock;

use crate::concurrent::ConcurrentRand;
use crate::error::RandError;
use crate::fast_rand::FastRand;

/// Seed-issuing engine shared by all workers; consulted once per thread.
static SEED_SOURCE: LazyLock<ConcurrentRand> = LazyLock::new(ConcurrentRand::new);

thread_local! {
    static WORKER_RNG: Rc<RefCell<FastRand>> = {
        // Redraw on the (1 in 2^64) zero seed; zero is not a valid state.
        let engine = loop {
            if let Ok(engine) = FastRand::with_seed(SEED_SOURCE.next_u64()) {
                break engine;
            }
        };
        Rc::new(RefCell::new(engine))
    };
}

/// Handle to the calling thread's private engine.
///
/// Cheap to obtain and to clone; clones refer to the same per-thread
/// engine.
#[derive(Clone)]
pub struct ThreadRand {
    rng: Rc<RefCell<FastRand>>,
}

/// Returns the calling thread's engine, creating and seeding it on the
/// thread's first call.
pub fn thread_rand() -> ThreadRand {
    ThreadRand {
        rng: WORKER_RNG.with(|r| r.clone()),
    }
}

impl ThreadRand {
    pub fn next_u32(&mut self) -> u32 {
        self.rng.borrow_mut().next_u32()
    }

    pub fn next_i32(&mut self) -> i32 {
        self.rng.borrow_mut().next_i32()
    }

    pub fn next_u64(&mut self) -> u64 {
        self.rng.borrow_mut().next_u64()
    }

    pub fn next_i64(&mut self) -> i64 {
        self.rng.borrow_mut().next_i64()
    }

    pub fn next_u8(&mut self) -> u8 {
        self.rng.borrow_mut().next_u8()
    }

    pub fn next_i8(&mut self) -> i8 {
        self.rng.borrow_mut().next_i8()
    }

    pub fn next_u16(&mut self) -> u16 {
        self.rng.borrow_mut().next_u16()
    }

    pub fn next_i16(&mut self) -> i16 {
        self.rng.borrow_mut().next_i16()
    }

    pub fn next_f64(&mut self) -> f64 {
        self.rng.borrow_mut().next_f64()
    }

    pub fn next_f32(&mut self) -> f32 {
        self.rng.borrow_mut().next_f32()
    }

    pub fn next_bool(&mut self) -> bool {
        self.rng.borrow_mut().next_bool()
    }

    pub fn next_bool_prob(&mut self, probability: f64) -> Result<bool, RandError> {
        self.rng.borrow_mut().next_bool_prob(probability)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> i32 {
        self.rng.borrow_mut().next()
    }

    pub fn next_max(&mut self, max: i32) -> Result<i32, RandError> {
        self.rng.borrow_mut().next_max(max)
    }

    pub fn next_range(&mut self, min: i32, max: i32) -> Result<i32, RandError> {
        self.rng.borrow_mut().next_range(min, max)
    }

    pub fn fill_bytes(&mut self, buffer: &mut [u8]) {
        self.rng.borrow_mut().fill_bytes(buffer)
    }

    pub fn next_string(&mut self, alphabet: &[char], length: usize) -> Result<String, RandError> {
        self.rng.borrow_mut().next_string(alphabet, length)
    }
}
