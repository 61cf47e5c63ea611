//! Global library settings.
//!
//! [`Settings`] holds the **default random seed**: the seed used by the
//! samplers when a caller does not pass one explicitly. It is a process-wide
//! singleton accessed via a `std::sync::OnceLock`.
//!
//! Thread safety: the seed is stored behind a `Mutex`, so it can be changed
//! from any thread. Samplers only read it when building their own generator;
//! no generator state is ever shared between calls.

use std::sync::{Mutex, MutexGuard, OnceLock};

/// Process-wide settings used by the numcore library.
pub struct Settings {
    /// Seed used by samplers that are not given one; `None` means fresh
    /// entropy per call.
    random_seed: Mutex<Option<u64>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            random_seed: Mutex::new(None),
        })
    }

    // A panic while holding the lock cannot leave an `Option<u64>` in a
    // torn state, so a poisoned lock is still safe to use.
    fn seed_slot(&self) -> MutexGuard<'_, Option<u64>> {
        self.random_seed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// The default random seed, if one has been set.
    pub fn random_seed(&self) -> Option<u64> {
        *self.seed_slot()
    }

    /// Make unseeded samplers deterministic from now on.
    pub fn set_random_seed(&self, seed: u64) {
        *self.seed_slot() = Some(seed);
    }

    /// Clear the default seed so unseeded samplers draw from entropy again.
    pub fn reset_random_seed(&self) {
        *self.seed_slot() = None;
    }
}

/// RAII guard that sets the default random seed and restores the previous
/// value when dropped.
///
/// ```
/// use nc_core::{ScopedSeed, Settings};
/// {
///     let _guard = ScopedSeed::new(7);
///     assert_eq!(Settings::instance().random_seed(), Some(7));
/// }
/// ```
#[must_use = "the previous seed is restored as soon as the guard is dropped"]
pub struct ScopedSeed {
    previous: Option<u64>,
}

impl ScopedSeed {
    /// Set `seed` as the default for the lifetime of the guard.
    pub fn new(seed: u64) -> Self {
        let settings = Settings::instance();
        let previous = settings.random_seed();
        settings.set_random_seed(seed);
        Self { previous }
    }
}

impl Drop for ScopedSeed {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(seed) => settings.set_random_seed(seed),
            None => settings.reset_random_seed(),
        }
    }
}
