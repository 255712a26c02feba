use std::{
    borrow::Borrow,
    collections::hash_map::RandomState,
    fmt,
    hash::{BuildHasher, Hash},
    mem,
};

use crate::prime::next_prime;

/// Requested default capacity, rounded up to the prime 11 on construction.
const DEFAULT_CAPACITY: usize = 10;

/// One position in the backing array.
///
/// A slot is in exactly one of three states. `Tombstone` keeps its key and
/// value: the key so that probe sequences for *other* keys keep walking past
/// it, and so that re-inserting the same key can reactivate the slot in
/// place.
#[derive(Debug, Clone)]
enum Slot<K, V> {
    /// Never written since the current backing array was allocated.
    Empty,
    /// A present mapping.
    Active(K, V),
    /// A logically deleted mapping, retained for probe-sequence integrity.
    Tombstone(K, V),
}

impl<K, V> Slot<K, V> {
    /// Key of an `Active` or `Tombstone` slot.
    fn key(&self) -> Option<&K> {
        match self {
            Self::Empty => None,
            Self::Active(key, _) | Self::Tombstone(key, _) => Some(key),
        }
    }
}

/// A hash table using open addressing with linear probing.
///
/// Collisions are resolved by scanning forward one slot at a time, wrapping
/// at the end of the backing array. Deletion marks the slot with a tombstone
/// rather than emptying it, so later probes for colliding keys still find
/// their targets. The array length is always prime and the table rehashes
/// into `next_prime(2 * capacity)` slots as soon as more than half of them
/// have been touched, which bounds every probe sequence by one pass over the
/// array.
///
/// Unlike `std::collections::HashMap`, inserting a key that is already
/// present is rejected rather than updating the stored value.
///
/// Note: this implementation is not thread-safe; wrap the whole table in a
/// lock if it must be shared.
#[derive(Debug, Clone)]
pub struct ProbeMap<K, V, S = RandomState> {
    /// The backing array; its length is the table capacity, always prime.
    slots: Vec<Slot<K, V>>,
    /// Slots in state `Active` or `Tombstone` since the last rehash.
    occupied: usize,
    /// Slots in state `Active`, i.e. the logical size of the map.
    live: usize,
    /// Injected hasher; key hashing always goes through this.
    hasher: S,
}

impl<K, V> ProbeMap<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty table with the default capacity (11 slots).
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty table with at least `capacity` slots, rounded up to
    /// the next prime.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<K, V, S> Default for ProbeMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, S::default())
    }
}

impl<K, V, S> Extend<(K, V)> for ProbeMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, S> ProbeMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Creates an empty table with the default capacity and the given hasher.
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, hasher)
    }

    /// Creates an empty table with at least `capacity` slots (rounded up to
    /// the next prime) and the given hasher.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        let capacity = next_prime(capacity.max(2));
        Self { slots: empty_slots(capacity), occupied: 0, live: 0, hasher }
    }

    /// Returns the probe start index for a key: its hash reduced modulo the
    /// capacity, before any probing occurs.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    pub fn hash_index<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
    {
        let hash = self.hasher.hash_one(key);
        // Capacity is prime, hence never zero.
        (hash % (self.slots.len() as u64)) as usize
    }

    /// Resolves the slot index the probe sequence for `key` terminates at:
    /// the first slot that is either empty or holds `key` (active or
    /// tombstoned).
    ///
    /// Returns `None` only if the probe walks a full cycle without
    /// terminating, which cannot happen while the table is at most half
    /// occupied.
    #[must_use]
    pub fn location<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let capacity = self.slots.len();
        let mut index = self.hash_index(key);

        for _ in 0..capacity {
            match self.slots.get(index) {
                None => return None,
                Some(Slot::Empty) => return Some(index),
                Some(slot) => {
                    if slot.key().map(Borrow::borrow) == Some(key) {
                        return Some(index);
                    }
                }
            }
            index = step(index, capacity);
        }

        None
    }

    /// Inserts a key/value pair.
    ///
    /// Returns `false` if the key is already active, leaving the table
    /// unchanged. Re-inserting a deleted key reactivates its tombstone slot
    /// in place. A successful insert that pushes the table past half
    /// occupancy triggers an immediate rehash into a larger prime capacity.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let Some(position) = self.location(&key) else {
            // Probes always terminate while the half-occupancy invariant
            // holds, so this branch is never taken.
            return false;
        };
        let Some(slot) = self.slots.get_mut(position) else {
            return false;
        };

        let was_empty = match slot {
            Slot::Active(..) => return false,
            Slot::Empty => true,
            Slot::Tombstone(..) => false,
        };

        *slot = Slot::Active(key, value);
        if was_empty {
            self.occupied = self.occupied.saturating_add(1);
        }
        self.live = self.live.saturating_add(1);

        if self.occupied > self.slots.len() / 2 {
            self.rehash();
        }
        true
    }

    /// Returns a reference to the value mapped to `key`, or `None` if the
    /// key is absent or deleted.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = self.location(key)?;
        match self.slots.get(position) {
            Some(Slot::Active(_, value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the value mapped to `key`, or `None`
    /// if the key is absent or deleted.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = self.location(key)?;
        match self.slots.get_mut(position) {
            Some(Slot::Active(_, value)) => Some(value),
            _ => None,
        }
    }

    /// Deletes `key`, leaving a tombstone in its slot.
    ///
    /// Returns `false` if the key is not currently active. The occupied
    /// count is unchanged either way; deletion never shrinks the table or
    /// triggers a rehash.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(position) = self.location(key) else {
            return false;
        };
        let Some(slot) = self.slots.get_mut(position) else {
            return false;
        };

        match mem::replace(slot, Slot::Empty) {
            Slot::Active(stored_key, value) => {
                *slot = Slot::Tombstone(stored_key, value);
                self.live = self.live.saturating_sub(1);
                true
            }
            other => {
                *slot = other;
                false
            }
        }
    }

    /// Returns the number of active mappings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns `true` if the table holds no active mappings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Returns the number of backing slots, which is always prime.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of touched slots, active plus tombstoned.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    /// Returns the ratio of touched slots to capacity. At most 0.5 between
    /// operations.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.occupied as f64 / self.slots.len() as f64
    }

    /// Returns an iterator over the active key/value pairs, in no particular
    /// order.
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { slots: &self.slots, index: 0 }
    }

    /// Removes all mappings and tombstones, keeping the current capacity.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::Empty;
        }
        self.occupied = 0;
        self.live = 0;
    }

    /// Replaces the backing array with a fresh one of capacity
    /// `next_prime(2 * capacity)` and re-inserts every active entry.
    /// Tombstones are dropped for good, which is what resets the occupied
    /// count below the live count's double.
    fn rehash(&mut self) {
        let new_capacity = next_prime(self.slots.len().saturating_mul(2));
        let old_slots = mem::replace(&mut self.slots, empty_slots(new_capacity));
        self.occupied = 0;
        self.live = 0;

        for slot in old_slots {
            if let Slot::Active(key, value) = slot {
                // Entries coming from distinct active slots cannot be
                // duplicates of each other.
                let inserted = self.insert(key, value);
                debug_assert!(inserted);
            }
        }
    }
}

/// Builds an all-`Empty` backing array of the given length.
fn empty_slots<K, V>(capacity: usize) -> Vec<Slot<K, V>> {
    let mut slots = Vec::new();
    slots.resize_with(capacity, || Slot::Empty);
    slots
}

/// Advances a probe index by one, wrapping at `capacity`.
fn step(index: usize, capacity: usize) -> usize {
    let next = index.saturating_add(1);
    if next == capacity { 0 } else { next }
}

/// Renders the slot array, one line per index: bare index for an empty slot,
/// `index  key  value` for an active one, with a trailing `deleted` marker
/// for a tombstone. Fields are two-space separated.
impl<K, V, S> fmt::Display for ProbeMap<K, V, S>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, slot) in self.slots.iter().enumerate() {
            match slot {
                Slot::Empty => writeln!(f, "{index}")?,
                Slot::Active(key, value) => writeln!(f, "{index}  {key}  {value}")?,
                Slot::Tombstone(key, value) => {
                    writeln!(f, "{index}  {key}  {value}  deleted")?;
                }
            }
        }
        Ok(())
    }
}

/// Iterator over the active key/value pairs of a [`ProbeMap`].
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// The slots being walked.
    slots: &'a [Slot<K, V>],
    /// Current position in the walk.
    index: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.slots.get(self.index) {
            self.index = self.index.saturating_add(1);
            if let Slot::Active(key, value) = slot {
                return Some((key, value));
            }
        }
        None
    }
}
