//! Busy-wait mutual exclusion.
//!
//! A minimal test-and-test-and-set spin lock. Engine draws hold the lock
//! for a handful of arithmetic instructions, far below the cost of parking
//! a thread, which is why the shared facility spins instead of sleeping.
//! The RAII guard releases on all exit paths, including unwinding.

use std::cell::UnsafeCell;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicBool, Ordering};

/// Spin-waiting mutual-exclusion wrapper around a value.
pub struct SpinLock<T> {
    locked: AtomicBool,
    value: UnsafeCell<T>,
}

// The flag serializes all access to `value`; holding the guard is the only
// way to reach it.
unsafe impl<T: Send> Sync for SpinLock<T> {}

impl<T> SpinLock<T> {
    /// Creates an unlocked lock owning `value`.
    pub const fn new(value: T) -> Self {
        SpinLock {
            locked: AtomicBool::new(false),
            value: UnsafeCell::new(value),
        }
    }

    /// Acquires the lock, spinning until it is free.
    pub fn lock(&self) -> SpinGuard<'_, T> {
        loop {
            if self
                .locked
                .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
                .is_ok()
            {
                return SpinGuard { lock: self };
            }
            // Spin on a plain load to keep the cache line shared while the
            // holder works.
            while self.locked.load(Ordering::Relaxed) {
                std::hint::spin_loop();
            }
        }
    }
}

/// Exclusive access to the locked value; releases on drop.
pub struct SpinGuard<'a, T> {
    lock: &'a SpinLock<T>,
}

impl<T> Deref for SpinGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        // Exclusive by the lock protocol.
        unsafe { &*self.lock.value.get() }
    }
}

impl<T> DerefMut for SpinGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        unsafe { &mut *self.lock.value.get() }
    }
}

impl<T> Drop for SpinGuard<'_, T> {
    fn drop(&mut self) {
        self.lock.locked.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_serializes_increments() {
        let lock = Arc::new(SpinLock::new(0u64));
        let mut handles = Vec::new();
        for _ in 0..8 {
            let lock = Arc::clone(&lock);
            handles.push(thread::spawn(move || {
                for _ in 0..10_000 {
                    *lock.lock() += 1;
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(*lock.lock(), 80_000);
    }

    #[test]
    fn test_released_after_panic() {
        let lock = Arc::new(SpinLock::new(5i32));
        let panicking = Arc::clone(&lock);
        let result = thread::spawn(move || {
            let _guard = panicking.lock();
            panic!("poisoning is not a thing here");
        })
        .join();
        assert!(result.is_err());
        // The guard's drop ran during unwinding, so the lock is free.
        assert_eq!(*lock.lock(), 5);
    }

    #[test]
    fn test_guard_gives_mutable_access() {
        let lock = SpinLock::new(String::from("a"));
        lock.lock().push('b');
        assert_eq!(*lock.lock(), "ab");
    }
}
