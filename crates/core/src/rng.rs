//! RNG module - uniform random piece selection
//!
//! Every draw picks one of the seven kinds with equal probability. Seeded
//! pickers give reproducible sequences for tests and replays.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::types::PieceKind;

/// Uniform piece picker
#[derive(Debug, Clone)]
pub struct PiecePicker {
    rng: StdRng,
}

impl PiecePicker {
    /// Seed from the OS's random data source
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a deterministic picker with the given seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw the next piece kind
    pub fn pick(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.random_range(0..PieceKind::LEN)]
    }
}
