//! The miscue rule: on every third move the written symbol may be swapped
//! for the opponent's.
//!
//! The randomness is an injected capability so tests can force either
//! branch. Sources are shared across games and must be `Send + Sync`.

use parking_lot::Mutex;
use rand::prelude::*;

use super::board::Symbol;

/// Moves whose 1-based index is a multiple of this are miscue-eligible.
pub const MISCUE_PERIOD: usize = 3;

/// Decides whether an eligible move miscues.
pub trait MiscueSource: Send + Sync {
    fn triggers(&self) -> bool;
}

/// Fires with a fixed probability.
pub struct RandomMiscue {
    probability: f64,
    rng: Mutex<StdRng>,
}

impl RandomMiscue {
    /// `probability` is clamped into `[0, 1]`; `Some(seed)` gives a
    /// reproducible sequence, `None` seeds from the OS.
    pub fn new(probability: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        let probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        Self {
            probability,
            rng: Mutex::new(rng),
        }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl MiscueSource for RandomMiscue {
    fn triggers(&self) -> bool {
        self.rng.lock().random_bool(self.probability)
    }
}

/// Never fires.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverMiscue;

impl MiscueSource for NeverMiscue {
    fn triggers(&self) -> bool {
        false
    }
}

/// Always fires.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysMiscue;

impl MiscueSource for AlwaysMiscue {
    fn triggers(&self) -> bool {
        true
    }
}

/// Symbol actually written for a move. Only eligible move indices consult
/// `source`; all others return `intended` untouched.
pub fn resolve_symbol(intended: Symbol, move_index: usize, source: &dyn MiscueSource) -> Symbol {
    if move_index > 0 && move_index % MISCUE_PERIOD == 0 && source.triggers() {
        intended.opposite()
    } else {
        intended
    }
}
