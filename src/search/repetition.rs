/* =======================================================================
Artisan is a chess playing engine.
Copyright (C) 2024-2025, the Artisan authors

Artisan is written in the Rust programming language. It builds on
concepts which are well-known and are in use by most if not all
classical alpha/beta-based chess engines.

Artisan is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License version 3 as published by
the Free Software Foundation.

Artisan is distributed in the hope that it will be useful, but WITHOUT
ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
FITNESS FOR A PARTICULAR PURPOSE.  See the GNU General Public License
for more details.

You should have received a copy of the GNU General Public License along
with this program.  If not, see <http://www.gnu.org/licenses/>.
======================================================================= */

// The repetition table records every position on the path from the start
// of the game through the current search line, keyed by Zobrist key. It is
// a linear-probed open-addressing table; each slot counts how often its
// key is currently present, because a position reached twice must count
// twice. The search inserts a position before descending into it and
// removes it on the way back up, so the table always mirrors the line
// being searched on top of the moves actually played.

use crate::board::defs::ZobristKey;

const SIZE_BITS: usize = 20;
const SIZE: usize = 1 << SIZE_BITS;
const MASK: usize = SIZE - 1;

#[derive(Copy, Clone)]
struct Slot {
    key: ZobristKey,
    count: u16,
}

pub struct RepetitionTable {
    slots: Vec<Slot>,
}

impl RepetitionTable {
    pub fn new() -> Self {
        Self {
            slots: vec![Slot { key: 0, count: 0 }; SIZE],
        }
    }

    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.count = 0;
        }
    }

    // Record one more occurrence of the position.
    pub fn insert(&mut self, key: ZobristKey) {
        let mut index = (key as usize) & MASK;

        while self.slots[index].count > 0 {
            if self.slots[index].key == key {
                self.slots[index].count += 1;
                return;
            }
            index = (index + 1) & MASK;
        }

        self.slots[index] = Slot { key, count: 1 };
    }

    // Remove one occurrence. When a slot empties, the probe cluster
    // behind it is re-inserted so later lookups still find their keys.
    pub fn remove(&mut self, key: ZobristKey) {
        let mut index = (key as usize) & MASK;

        while self.slots[index].count > 0 {
            if self.slots[index].key == key {
                self.slots[index].count -= 1;
                if self.slots[index].count == 0 {
                    self.repair_cluster(index);
                }
                return;
            }
            index = (index + 1) & MASK;
        }
    }

    fn occurrences(&self, key: ZobristKey) -> u16 {
        let mut index = (key as usize) & MASK;

        while self.slots[index].count > 0 {
            if self.slots[index].key == key {
                return self.slots[index].count;
            }
            index = (index + 1) & MASK;
        }

        0
    }

    // A position that stands on the board for the second time is scored as
    // a draw by the search: the first repetition already proves neither
    // side is making progress.
    pub fn is_repetition(&self, key: ZobristKey) -> bool {
        self.occurrences(key) >= 2
    }

    // The strict threefold rule, for adjudicating the game itself.
    pub fn is_threefold(&self, key: ZobristKey) -> bool {
        self.occurrences(key) >= 3
    }

    // Re-insert the cluster that follows a freed slot. Without this, a
    // key that probed across the freed slot would become unreachable.
    fn repair_cluster(&mut self, freed: usize) {
        let mut index = (freed + 1) & MASK;

        while self.slots[index].count > 0 {
            let slot = self.slots[index];
            self.slots[index].count = 0;

            let mut target = (slot.key as usize) & MASK;
            while self.slots[target].count > 0 {
                target = (target + 1) & MASK;
            }
            self.slots[target] = slot;

            index = (index + 1) & MASK;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_rise_and_fall_with_insert_and_remove() {
        let mut table = RepetitionTable::new();

        table.insert(42);
        assert!(!table.is_repetition(42));

        table.insert(42);
        assert!(table.is_repetition(42));
        assert!(!table.is_threefold(42));

        table.insert(42);
        assert!(table.is_threefold(42));

        table.remove(42);
        table.remove(42);
        assert!(!table.is_repetition(42));

        table.remove(42);
        assert_eq!(table.occurrences(42), 0);
    }

    #[test]
    fn colliding_keys_stay_reachable_after_removal() {
        let mut table = RepetitionTable::new();

        // Three keys that hash to the same slot.
        let a = 7u64;
        let b = 7u64 + (1 << SIZE_BITS as u64);
        let c = 7u64 + (2 << SIZE_BITS as u64);

        table.insert(a);
        table.insert(b);
        table.insert(c);

        // Removing the first key frees its slot; the cluster repair must
        // keep the keys that probed across it reachable.
        table.remove(a);
        assert_eq!(table.occurrences(b), 1);
        assert_eq!(table.occurrences(c), 1);

        table.remove(b);
        assert_eq!(table.occurrences(c), 1);
        assert_eq!(table.occurrences(a), 0);
    }
}
