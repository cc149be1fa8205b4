//! Pool of dynamic per-object flag bits
//!
//! A traversal leases one bit position ("mark") from a fixed 64-bit space
//! for its visited state. Bits are handed out through RAII handles so a
//! mark is returned to the pool on every exit path. Running out of bits
//! means some earlier mark was never released, which is a lifecycle bug,
//! not a runtime condition.

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::board::Object;

pub const DYNFLAG_BITS: u8 = 64;

/// Shared allocator for dynamic flag bit positions
#[derive(Debug)]
pub struct DynFlagPool {
    used: u64,
    names: [Option<String>; DYNFLAG_BITS as usize],
}

impl Default for DynFlagPool {
    fn default() -> Self {
        Self {
            used: 0,
            names: std::array::from_fn(|_| None),
        }
    }
}

impl DynFlagPool {
    pub fn new_shared() -> Arc<Mutex<DynFlagPool>> {
        Arc::new(Mutex::new(DynFlagPool::default()))
    }

    /// Lease an unused bit position. Panics when the pool is exhausted:
    /// that signals a leaked mark from an unreleased traversal.
    pub fn allocate(pool: &Arc<Mutex<DynFlagPool>>, name: &str) -> Mark {
        let mut p = pool.lock().expect("dynamic flag pool lock poisoned");
        for bit in 0..DYNFLAG_BITS {
            if p.used & (1u64 << bit) == 0 {
                p.used |= 1u64 << bit;
                p.names[bit as usize] = Some(name.to_string());
                return Mark {
                    bit,
                    pool: Arc::clone(pool),
                };
            }
        }
        panic!(
            "dynamic flag pool exhausted while allocating {:?}: an earlier mark was never released",
            name
        );
    }

    fn free(&mut self, bit: u8) {
        self.used &= !(1u64 << bit);
        self.names[bit as usize] = None;
    }

    /// Number of bits currently leased
    pub fn in_use(&self) -> u32 {
        self.used.count_ones()
    }
}

/// Handle to one leased bit position; the bit returns to the pool on drop
pub struct Mark {
    bit: u8,
    pool: Arc<Mutex<DynFlagPool>>,
}

impl Mark {
    fn mask(&self) -> u64 {
        1u64 << self.bit
    }

    pub fn test(&self, obj: &Object) -> bool {
        obj.dynflags & self.mask() != 0
    }

    pub fn set(&self, obj: &mut Object) {
        obj.dynflags |= self.mask();
    }

    pub fn clear(&self, obj: &mut Object) {
        obj.dynflags &= !self.mask();
    }
}

impl Drop for Mark {
    fn drop(&mut self) {
        if let Ok(mut p) = self.pool.lock() {
            p.free(self.bit);
        }
    }
}

impl fmt::Debug for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mark(bit {})", self.bit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocated_marks_are_distinct() {
        let pool = DynFlagPool::new_shared();
        let a = DynFlagPool::allocate(&pool, "a");
        let b = DynFlagPool::allocate(&pool, "b");
        assert_ne!(a.mask(), b.mask());
        assert_eq!(pool.lock().unwrap().in_use(), 2);
    }

    #[test]
    fn test_drop_returns_bit_to_pool() {
        let pool = DynFlagPool::new_shared();
        {
            let _m = DynFlagPool::allocate(&pool, "scoped");
            assert_eq!(pool.lock().unwrap().in_use(), 1);
        }
        assert_eq!(pool.lock().unwrap().in_use(), 0);
    }

    #[test]
    #[should_panic(expected = "dynamic flag pool exhausted")]
    fn test_exhaustion_panics() {
        let pool = DynFlagPool::new_shared();
        let mut held = Vec::new();
        for i in 0..=DYNFLAG_BITS {
            held.push(DynFlagPool::allocate(&pool, &format!("m{}", i)));
        }
    }
}
