// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Binary search over the sorted exception tables.
//!
//! Historical corrections are stored as key-sorted slices. A miss is not an
//! error: the caller falls back to the computed value.

/// Index of `key` in a table of `(key, value)` pairs sorted ascending by key.
///
/// Returns `None` if the key is absent. O(log n).
#[inline]
pub fn search_by_key<K: Ord, V>(key: &K, table: &[(K, V)]) -> Option<usize> {
    table.binary_search_by(|(k, _)| k.cmp(key)).ok()
}

/// Index of `key` in a plain ascending table.
#[inline]
pub fn search_sorted<K: Ord>(key: &K, table: &[K]) -> Option<usize> {
    table.binary_search(key).ok()
}

/// Value paired with `key`, if the table has one.
#[inline]
pub(crate) fn lookup<K: Ord, V: Copy>(key: &K, table: &[(K, V)]) -> Option<V> {
    search_by_key(key, table).map(|i| table[i].1)
}

/// True if the keys of a pair table are strictly ascending.
pub(crate) fn keys_strictly_ascending<K: Ord, V>(table: &[(K, V)]) -> bool {
    table.windows(2).all(|w| w[0].0 < w[1].0)
}
