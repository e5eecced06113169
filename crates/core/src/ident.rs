//! Identifier generation for created records.

use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;

/// Length of the identifiers assigned to created records.
pub const DEFAULT_ID_LEN: usize = 8;

/// Random identifier generator.
///
/// Draws lowercase ASCII letters from a [`fastrand::Rng`] seeded once from
/// the system clock at construction. Generated identifiers are not checked
/// against existing records; at this roster size collisions are accepted.
#[derive(Debug)]
pub struct IdentGen {
    rng: Mutex<fastrand::Rng>,
}

impl IdentGen {
    /// Create a generator seeded from the current time.
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_seed(seed)
    }

    /// Create a generator with a fixed seed, for deterministic tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }

    /// Produce an identifier of exactly `len` letters drawn from `a-z`.
    pub fn generate(&self, len: usize) -> String {
        let mut rng = self.rng.lock();
        (0..len).map(|_| rng.lowercase()).collect()
    }
}

impl Default for IdentGen {
    fn default() -> Self {
        Self::new()
    }
}
