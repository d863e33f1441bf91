//! Growable limb storage behind every magnitude.

use std::hash::{Hash, Hasher};

use crate::big_num_constants::*;

/// Owned little-endian limb array plus the count of significant limbs.
///
/// `limbs.len()` is the allocated capacity, every slot at or above `len` is
/// scratch. Unless the buffer has been detached, `len >= 1` and
/// `limbs[len - 1] != 0` whenever `len > 1`, so zero is always the single limb `[0]`.
#[derive(Debug, Clone)]
pub struct LimbBuffer {
    limbs: Vec<Limb>,
    len: usize,
}

// 构造
impl LimbBuffer {
    /// The canonical zero with `INITIAL_LIMB_CAPACITY` slots.
    pub fn new() -> Self {
        LimbBuffer::with_capacity(INITIAL_LIMB_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        LimbBuffer { limbs: vec![0; capacity.max(1)], len: 1 }
    }

    pub fn from_limb(value: Limb) -> Self {
        let mut buf = LimbBuffer::new();
        buf.limbs[0] = value;
        buf
    }

    /// Takes ownership of `limbs` (least significant first) and trims leading zeros.
    /// An empty vector becomes zero.
    pub fn from_limbs(mut limbs: Vec<Limb>) -> Self {
        if limbs.is_empty() {
            limbs.push(0);
        }
        let len = limbs.len();
        let mut buf = LimbBuffer { limbs, len };
        buf.normalize();
        buf
    }
}

// 查询
impl LimbBuffer {
    pub fn capacity(&self) -> usize {
        self.limbs.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// True once [`LimbBuffer::detach`] has handed the storage away.
    pub fn is_detached(&self) -> bool {
        self.len == 0
    }

    pub fn is_zero(&self) -> bool {
        self.len == 1 && self.limbs[0] == 0
    }

    pub fn as_slice(&self) -> &[Limb] {
        &self.limbs[..self.len]
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Limb] {
        &mut self.limbs[..self.len]
    }
}

// 内存管理
impl LimbBuffer {
    /// Grows the allocation to at least `required` slots, never shrinks.
    ///
    /// The new capacity is `max(capacity * LIMB_GROWTH, required)`; significant
    /// limbs are preserved and everything above them is zeroed.
    pub fn ensure_capacity(&mut self, required: usize) {
        let capacity = self.capacity();
        if capacity >= required {
            return;
        }
        let new_capacity = (capacity * LIMB_GROWTH).max(required);
        self.limbs.truncate(self.len);
        self.limbs.reserve_exact(new_capacity - self.len);
        self.limbs.resize(new_capacity, 0);
    }

    /// Sets the significant length to `new_len`, zeroing any newly exposed limbs.
    /// The result is not normalized.
    pub fn resize_zeroed(&mut self, new_len: usize) {
        self.ensure_capacity(new_len);
        if new_len > self.len {
            self.limbs[self.len..new_len].fill(0);
        }
        self.len = new_len;
    }

    /// Drops non-significant leading zero limbs, stopping at a single limb.
    pub fn normalize(&mut self) {
        while self.len > 1 && self.limbs[self.len - 1] == 0 {
            self.len -= 1;
        }
    }

    /// Overwrites the value with a single limb.
    pub fn set_limb(&mut self, value: Limb) {
        self.ensure_capacity(1);
        self.limbs[0] = value;
        self.len = 1;
    }

    /// Hands the significant limbs to the caller and leaves an empty buffer
    /// (`capacity == len == 0`). The owner must not use the buffer again
    /// without rebuilding it.
    pub fn detach(&mut self) -> Vec<Limb> {
        let mut limbs = std::mem::take(&mut self.limbs);
        limbs.truncate(self.len);
        self.len = 0;
        limbs
    }

    /// Moves the storage out, leaving a fresh zero behind.
    pub fn take(&mut self) -> LimbBuffer {
        std::mem::take(self)
    }
}

impl Default for LimbBuffer {
    fn default() -> Self {
        LimbBuffer::new()
    }
}

impl PartialEq for LimbBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for LimbBuffer {}

impl Hash for LimbBuffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_canonical_zero() {
        let buf = LimbBuffer::new();
        assert_eq!(buf.len(), 1);
        assert_eq!(buf.capacity(), INITIAL_LIMB_CAPACITY);
        assert!(buf.is_zero());
        assert_eq!(buf.as_slice(), &[0]);
    }

    #[test]
    fn test_from_limbs_normalizes() {
        let buf = LimbBuffer::from_limbs(vec![5, 0, 7, 0, 0]);
        assert_eq!(buf.as_slice(), &[5, 0, 7]);
        assert_eq!(buf.capacity(), 5);

        assert!(LimbBuffer::from_limbs(vec![0, 0, 0]).is_zero());
        assert!(LimbBuffer::from_limbs(vec![]).is_zero());
    }

    #[test]
    fn test_ensure_capacity_doubles_or_fits() {
        let mut buf = LimbBuffer::from_limbs(vec![1, 2, 3]);
        buf.ensure_capacity(4);
        assert_eq!(buf.capacity(), 6);
        assert_eq!(buf.as_slice(), &[1, 2, 3]);

        buf.ensure_capacity(40);
        assert_eq!(buf.capacity(), 40);

        buf.ensure_capacity(2);
        assert_eq!(buf.capacity(), 40);
    }

    #[test]
    fn test_resize_zeroed_clears_stale_limbs() {
        let mut buf = LimbBuffer::from_limbs(vec![1, 2, 3]);
        buf.resize_zeroed(1);
        buf.resize_zeroed(3);
        assert_eq!(buf.as_slice(), &[1, 0, 0]);
        buf.normalize();
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn test_detach_leaves_empty_buffer() {
        let mut buf = LimbBuffer::from_limbs(vec![9, 8, 7]);
        buf.ensure_capacity(10);
        let limbs = buf.detach();
        assert_eq!(limbs, vec![9, 8, 7]);
        assert!(buf.is_detached());
        assert_eq!(buf.capacity(), 0);
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn test_take_leaves_zero() {
        let mut buf = LimbBuffer::from_limbs(vec![1, 1]);
        let moved = buf.take();
        assert_eq!(moved.as_slice(), &[1, 1]);
        assert!(buf.is_zero());
    }

    #[test]
    fn test_set_limb() {
        let mut buf = LimbBuffer::from_limbs(vec![1, 2, 3]);
        buf.set_limb(42);
        assert_eq!(buf.as_slice(), &[42]);
        assert_eq!(buf.capacity(), 3);
    }
}
