use std::collections::BTreeMap;

use ordered_forest::fuzzer::{replay, TraceFuzzer, TraceOp};
use ordered_forest::RbMap;

#[test]
fn fuzz_small_key_space_traces_matrix() {
    for seed in 0..40u64 {
        let mut fuzzer = TraceFuzzer::from_u64(seed);
        let ops = fuzzer.trace(400, 24);
        if let Err(err) = replay(&ops) {
            panic!("seed {seed}: {err}");
        }
    }
}

#[test]
fn fuzz_wide_key_space_traces_matrix() {
    for seed in 100..110u64 {
        let mut fuzzer = TraceFuzzer::from_u64(seed);
        let ops = fuzzer.trace(2_000, 1_000);
        if let Err(err) = replay(&ops) {
            panic!("seed {seed}: {err}");
        }
    }
}

#[test]
fn fuzz_grow_then_drain_matrix() {
    let mut fuzzer = TraceFuzzer::from_u64(0xD1CE);
    let keys = fuzzer.keys(500, 300);
    let mut ops: Vec<TraceOp> = keys.iter().map(|&k| TraceOp::Insert(k)).collect();
    ops.extend(keys.iter().rev().map(|&k| TraceOp::Erase(k)));
    let set = replay(&ops).unwrap();
    assert!(set.is_empty());
}

#[test]
fn fuzz_map_against_btreemap_matrix() {
    let mut fuzzer = TraceFuzzer::from_u64(42);
    let mut map = RbMap::new();
    let mut model = BTreeMap::new();
    for step in 0..3_000 {
        let k = fuzzer.key(128);
        match fuzzer.op(128) {
            TraceOp::Insert(v) => {
                let inserted = map.insert(k, v).1;
                assert_eq!(inserted, !model.contains_key(&k), "step {step}");
                model.entry(k).or_insert(v);
            }
            TraceOp::Erase(_) => assert_eq!(map.remove(&k), model.remove(&k), "step {step}"),
            TraceOp::Find(_) => assert_eq!(map.get(&k), model.get(&k), "step {step}"),
        }
        map.assert_valid().unwrap();
    }
    assert!(map.iter().eq(model.iter()));
}
