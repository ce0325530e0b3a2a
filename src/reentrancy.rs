//! Debug-only reentrancy check.
//!
//! The hash table runs caller-supplied hash/match closures while scanning
//! a bucket. Those closures must not call back into the same table; this
//! tracker catches such reentry in debug builds by panicking, and compiles
//! to a zero-cost no-op in release builds.

use core::cell::Cell;
use core::marker::PhantomData;

/// Per-table reentry flag. Guard each public entry point with
/// `let _g = self.reentry.lock();`.
#[derive(Debug)]
pub struct ReentryCheck {
    #[cfg(debug_assertions)]
    busy: Cell<bool>,
    // Keep !Send + !Sync in line with single-threaded design.
    _nosend: PhantomData<*mut ()>,
}

impl ReentryCheck {
    pub const fn new() -> Self {
        Self {
            #[cfg(debug_assertions)]
            busy: Cell::new(false),
            _nosend: PhantomData,
        }
    }

    /// Mark the table busy until the returned guard drops. In debug
    /// builds, panics if the table is already busy.
    #[inline]
    pub fn lock(&self) -> ReentryGuard<'_> {
        #[cfg(debug_assertions)]
        {
            assert!(
                !self.busy.replace(true),
                "reentry detected: hash/match closure called back into the table"
            );
            return ReentryGuard { check: self };
        }

        #[cfg(not(debug_assertions))]
        {
            return ReentryGuard { _z: PhantomData };
        }
    }
}

impl Default for ReentryCheck {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII guard returned by [`ReentryCheck::lock`].
pub struct ReentryGuard<'a> {
    #[cfg(debug_assertions)]
    check: &'a ReentryCheck,
    #[cfg(not(debug_assertions))]
    _z: PhantomData<&'a ()>,
}

impl<'a> Drop for ReentryGuard<'a> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        self.check.busy.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::ReentryCheck;

    #[test]
    fn lock_and_release_is_ok() {
        let c = ReentryCheck::new();
        let _g = c.lock();
    }

    #[test]
    fn sequential_sections_are_ok() {
        let c = ReentryCheck::new();
        {
            let _g = c.lock();
        }
        let _g = c.lock();
    }

    #[cfg(debug_assertions)]
    #[test]
    fn nested_lock_panics_in_debug() {
        let c = ReentryCheck::new();
        let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _g1 = c.lock();
            let _g2 = c.lock();
            let _ = _g2; // silence unused
        }));
        assert!(res.is_err(), "expected nested lock to panic in debug builds");
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn nested_lock_noop_in_release() {
        let c = ReentryCheck::new();
        let _g1 = c.lock();
        let _g2 = c.lock();
        let (_g1, _g2) = (_g1, _g2);
    }
}
