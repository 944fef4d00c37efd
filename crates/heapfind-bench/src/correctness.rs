//! Post-operation invariant checkers for correctness validation.

use std::collections::BTreeMap;

use heapfind_core::{IndexedMinHeap, UnionFind};

/// Verifies the heap ordering and the position index of `heap`.
pub fn check_heap_invariants(heap: &IndexedMinHeap<i64>) -> Result<(), String> {
    if !heap.is_min_heap(0) {
        return Err("heap ordering violated below the root".to_owned());
    }
    if !heap.is_index_consistent() {
        return Err("position index disagrees with storage".to_owned());
    }
    for (position, value) in heap.iter().enumerate() {
        if heap.position_of(value).is_none() {
            return Err(format!("value {value} at position {position} is not indexed"));
        }
    }
    Ok(())
}

/// Verifies that `drained` is ascending and equals the multiset `input`
/// minus one occurrence of every value in `removed`.
pub fn check_drain(input: &[i64], removed: &[i64], drained: &[i64]) -> Result<(), String> {
    if let Some(w) = drained.windows(2).find(|w| w[0] > w[1]) {
        return Err(format!("drain out of order: {} before {}", w[0], w[1]));
    }

    let mut expected: BTreeMap<i64, usize> = BTreeMap::new();
    for &v in input {
        *expected.entry(v).or_default() += 1;
    }
    for v in removed {
        let Some(count) = expected.get_mut(v) else {
            return Err(format!("removed value {v} was never in the input"));
        };
        *count -= 1;
        if *count == 0 {
            expected.remove(v);
        }
    }

    let mut actual: BTreeMap<i64, usize> = BTreeMap::new();
    for &v in drained {
        *actual.entry(v).or_default() += 1;
    }
    if actual != expected {
        return Err(format!(
            "drained multiset differs: {} distinct drained, {} distinct expected",
            actual.len(),
            expected.len()
        ));
    }
    Ok(())
}

/// Verifies union-find invariants after every pair in `pairs` was unified.
///
/// - every pair is connected
/// - root sizes sum to the universe size
/// - the root count equals the component count
/// - `groups` partitions the universe and agrees with `component_size`
pub fn check_union_find_invariants(
    uf: &mut UnionFind,
    pairs: &[(usize, usize)],
) -> Result<(), String> {
    for &(p, q) in pairs {
        let linked = uf.connected(p, q).map_err(|e| e.to_string())?;
        if !linked {
            return Err(format!("pair ({p}, {q}) is not connected"));
        }
    }

    let roots = uf.roots();
    if roots.len() != uf.components() {
        return Err(format!(
            "root count {} differs from component count {}",
            roots.len(),
            uf.components()
        ));
    }

    let mut total = 0usize;
    for &root in &roots {
        total += uf.component_size(root).map_err(|e| e.to_string())?;
    }
    if total != uf.len() {
        return Err(format!(
            "root sizes sum to {total}, universe has {}",
            uf.len()
        ));
    }

    let groups = uf.groups();
    let mut seen = vec![false; uf.len()];
    for group in &groups {
        let Some(&first) = group.first() else {
            return Err("empty group".to_owned());
        };
        let size = uf.component_size(first).map_err(|e| e.to_string())?;
        if size != group.len() {
            return Err(format!(
                "group of {first} has {} members, component size is {size}",
                group.len()
            ));
        }
        for &member in group {
            if std::mem::replace(&mut seen[member], true) {
                return Err(format!("element {member} appears in two groups"));
            }
        }
    }
    if seen.iter().any(|s| !s) {
        return Err("groups do not cover the universe".to_owned());
    }
    Ok(())
}
