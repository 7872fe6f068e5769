//! Seeded operation traces for randomized testing.
//!
//! A [`TraceFuzzer`] generates insert / erase / lookup sequences over a small
//! key space so that collisions and deletions of present keys are common.
//! [`replay`] runs a trace against an [`RbSet`] and a `BTreeSet` model side by
//! side, validating the tree after every step.

use std::collections::BTreeSet;

use log::trace;
use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use crate::error::{Result, TreeError};
use crate::set::RbSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceOp {
    Insert(i64),
    Erase(i64),
    Find(i64),
}

pub struct TraceFuzzer {
    /// Seed the PRNG was built from; print it to reproduce a failing trace.
    pub seed: [u8; 32],
    rng: Xoshiro256StarStar,
}

impl TraceFuzzer {
    /// Fuzzer from `seed`, or from OS entropy when `None`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });
        Self {
            seed,
            rng: Xoshiro256StarStar::from_seed(seed),
        }
    }

    pub fn from_u64(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&seed.to_le_bytes());
        Self::new(Some(bytes))
    }

    pub fn key(&mut self, key_space: i64) -> i64 {
        self.rng.gen_range(0..key_space.max(1))
    }

    /// One operation, biased towards inserts so traces grow the tree.
    pub fn op(&mut self, key_space: i64) -> TraceOp {
        let key = self.key(key_space);
        match self.rng.gen_range(0..10u8) {
            0..=4 => TraceOp::Insert(key),
            5..=8 => TraceOp::Erase(key),
            _ => TraceOp::Find(key),
        }
    }

    pub fn trace(&mut self, len: usize, key_space: i64) -> Vec<TraceOp> {
        (0..len).map(|_| self.op(key_space)).collect()
    }

    /// Distinct-or-not keys in random order, for bulk loading.
    pub fn keys(&mut self, len: usize, key_space: i64) -> Vec<i64> {
        (0..len).map(|_| self.key(key_space)).collect()
    }
}

fn diverged(step: usize, op: TraceOp, what: &str) -> TreeError {
    TreeError::Invariant(format!("step {step} {op:?}: {what}"))
}

/// Replays `ops` on a fresh set and a model, failing on the first
/// divergence or invariant violation. Returns the final set.
pub fn replay(ops: &[TraceOp]) -> Result<RbSet<i64>> {
    let mut set = RbSet::new();
    let mut model = BTreeSet::new();
    for (step, &op) in ops.iter().enumerate() {
        trace!("replay step {step}: {op:?}");
        match op {
            TraceOp::Insert(k) => {
                let (cursor, inserted) = set.insert(k);
                if cursor.key() != Some(&k) {
                    return Err(diverged(step, op, "cursor not at inserted key"));
                }
                if inserted != model.insert(k) {
                    return Err(diverged(step, op, "inserted flag"));
                }
            }
            TraceOp::Erase(k) => {
                if set.remove(&k) != model.remove(&k) {
                    return Err(diverged(step, op, "erase result"));
                }
            }
            TraceOp::Find(k) => {
                if set.contains(&k) != model.contains(&k) {
                    return Err(diverged(step, op, "membership"));
                }
            }
        }
        set.assert_valid()
            .map_err(|err| diverged(step, op, &err.to_string()))?;
        if set.len() != model.len() || !set.iter().eq(model.iter()) {
            return Err(diverged(step, op, "contents"));
        }
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_trace() {
        let a = TraceFuzzer::from_u64(7).trace(64, 32);
        let b = TraceFuzzer::from_u64(7).trace(64, 32);
        assert_eq!(a, b);
    }

    #[test]
    fn keys_stay_in_space() {
        let mut fuzzer = TraceFuzzer::new(None);
        assert!(fuzzer.keys(200, 10).iter().all(|k| (0..10).contains(k)));
    }

    #[test]
    fn replay_short_trace() {
        let ops = [
            TraceOp::Insert(2),
            TraceOp::Insert(1),
            TraceOp::Insert(2),
            TraceOp::Erase(2),
            TraceOp::Find(1),
            TraceOp::Erase(9),
        ];
        let set = replay(&ops).unwrap();
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1]);
    }
}
