//! Fixed-capacity open-addressing aggregate table.
//!
//! Station names map to [`StationAggregate`]s through a linear-probe table
//! keyed by a precomputed FNV-1a hash. Capacity is fixed at construction
//! (a power of two well above the expected distinct-station count), slots
//! carry the name in a fixed inline buffer, and nothing is ever deleted.
//! Each table has exactly one owner at a time — a partition scanner while
//! scanning, the merge coordinator while folding — so no locking is needed.

use crate::error::{ProcessingError, Result};
use crate::models::aggregate::StationAggregate;
use crate::models::temperature::Tenths;
use crate::utils::constants::{FNV1A_OFFSET, FNV1A_PRIME, KEY_BUFFER_SIZE, TABLE_CAPACITY};

/// FNV-1a over a complete byte string.
///
/// The partition scanner computes the same hash incrementally while it
/// locates the field delimiter; this helper is for callers that already
/// hold the whole name.
#[inline]
pub fn fnv1a_hash(bytes: &[u8]) -> u64 {
    let mut hash = FNV1A_OFFSET;
    for &b in bytes {
        hash = (hash ^ b as u64).wrapping_mul(FNV1A_PRIME);
    }
    hash
}

#[derive(Clone)]
struct Slot {
    // Explicit occupancy tag rather than a sentinel key length, so a
    // zero-length name is a valid key.
    occupied: bool,
    hash: u64,
    key_len: u8,
    key: [u8; KEY_BUFFER_SIZE],
    aggregate: StationAggregate,
}

impl Slot {
    const EMPTY: Slot = Slot {
        occupied: false,
        hash: 0,
        key_len: 0,
        key: [0; KEY_BUFFER_SIZE],
        aggregate: StationAggregate {
            min: 0,
            max: 0,
            sum: 0,
            count: 0,
        },
    };

    fn key(&self) -> &[u8] {
        &self.key[..self.key_len as usize]
    }
}

pub struct AggregateTable {
    slots: Box<[Slot]>,
    mask: u64,
    len: usize,
    verify_keys: bool,
}

impl AggregateTable {
    /// A table with the default capacity.
    ///
    /// `verify_keys` controls the probe hit test: when `true` a hit requires
    /// both a stored-hash match and bytewise key equality; when `false` the
    /// hash match alone counts. Skipping the comparison saves a memcmp per
    /// lookup but silently conflates stations whose names collide under
    /// FNV-1a, so it is only safe for inputs drawn from a small known
    /// station vocabulary.
    pub fn new(verify_keys: bool) -> Self {
        Self::with_capacity(TABLE_CAPACITY, verify_keys)
    }

    /// `capacity` must be a power of two.
    pub fn with_capacity(capacity: usize, verify_keys: bool) -> Self {
        debug_assert!(capacity.is_power_of_two());
        Self {
            slots: vec![Slot::EMPTY; capacity].into_boxed_slice(),
            mask: capacity as u64 - 1,
            len: 0,
            verify_keys,
        }
    }

    /// Number of distinct stations observed so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Record one observation of `value` for `name`. `hash` must be the
    /// FNV-1a hash of `name`. Amortized O(1); the name bytes are copied
    /// into the table only on first sight of the station.
    #[inline]
    pub fn observe(&mut self, name: &[u8], hash: u64, value: Tenths) -> Result<()> {
        let index = self.probe(name, hash)?;
        if self.slots[index].occupied {
            self.slots[index].aggregate.update(value);
        } else {
            self.insert(index, name, hash, StationAggregate::new(value));
        }
        Ok(())
    }

    /// Fold a completed aggregate for `name` in, inserting if absent. The
    /// carried `hash` is reused rather than recomputed from the name.
    pub fn merge_entry(
        &mut self,
        name: &[u8],
        hash: u64,
        aggregate: &StationAggregate,
    ) -> Result<()> {
        let index = self.probe(name, hash)?;
        if self.slots[index].occupied {
            self.slots[index].aggregate.merge(aggregate);
        } else {
            self.insert(index, name, hash, *aggregate);
        }
        Ok(())
    }

    /// Fold every entry of `other` into `self`.
    pub fn merge(&mut self, other: &AggregateTable) -> Result<()> {
        for slot in other.slots.iter().filter(|s| s.occupied) {
            self.merge_entry(slot.key(), slot.hash, &slot.aggregate)?;
        }
        Ok(())
    }

    /// Iterate occupied entries as `(name, aggregate)`, in slot order.
    pub fn entries(&self) -> impl Iterator<Item = (&[u8], &StationAggregate)> {
        self.slots
            .iter()
            .filter(|s| s.occupied)
            .map(|s| (s.key(), &s.aggregate))
    }

    /// Linear probe from `hash & mask` to the matching or first empty slot.
    /// A wrap of the whole table without either means capacity exhaustion,
    /// which is a fatal configuration error rather than silent data loss.
    #[inline]
    fn probe(&self, name: &[u8], hash: u64) -> Result<usize> {
        if name.len() > KEY_BUFFER_SIZE {
            return Err(ProcessingError::InvalidFormat(format!(
                "station name of {} bytes exceeds the {} byte key buffer",
                name.len(),
                KEY_BUFFER_SIZE
            )));
        }

        let mut index = (hash & self.mask) as usize;
        let mut probed = 0;
        loop {
            if probed == self.slots.len() {
                return Err(ProcessingError::TableCapacity {
                    capacity: self.slots.len(),
                });
            }

            let slot = &self.slots[index];
            if !slot.occupied {
                return Ok(index);
            }
            if slot.hash == hash && (!self.verify_keys || slot.key() == name) {
                return Ok(index);
            }

            index = (index + 1) & self.mask as usize;
            probed += 1;
        }
    }

    fn insert(&mut self, index: usize, name: &[u8], hash: u64, aggregate: StationAggregate) {
        let slot = &mut self.slots[index];
        slot.occupied = true;
        slot.hash = hash;
        slot.key_len = name.len() as u8;
        slot.key[..name.len()].copy_from_slice(name);
        slot.aggregate = aggregate;
        self.len += 1;
    }
}
