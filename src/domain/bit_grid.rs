//! Bit-packed cell storage.
//! One bit per cell in a single contiguous buffer, cell `i` living in
//! byte `i / 8` at bit `i % 8`. A 1000x1000 board fits in 125KB.

/// Flat bit set addressed by linear cell index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitCells {
    len: usize,
    bytes: Vec<u8>,
}

impl BitCells {
    /// All-dead storage for `len` cells
    pub fn new(len: usize) -> Self {
        Self {
            len,
            bytes: vec![0; len.div_ceil(8)],
        }
    }

    /// Number of addressable cells
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        debug_assert!(idx < self.len);
        (self.bytes[idx / 8] >> (idx % 8)) & 1 == 1
    }

    #[inline]
    pub fn set(&mut self, idx: usize, alive: bool) {
        debug_assert!(idx < self.len);
        let mask = 1u8 << (idx % 8);
        if alive {
            self.bytes[idx / 8] |= mask;
        } else {
            self.bytes[idx / 8] &= !mask;
        }
    }

    /// Count live cells (population count)
    pub fn count_alive(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Kill every cell without reallocating
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Bytes held by the buffer
    pub fn memory_bytes(&self) -> usize {
        self.bytes.len()
    }

    /// Indices of live cells in ascending order
    pub fn iter_alive(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).filter(move |&i| self.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut cells = BitCells::new(20);

        assert!(!cells.get(0));
        assert!(!cells.get(19));

        cells.set(0, true);
        cells.set(7, true);
        cells.set(8, true);
        cells.set(19, true);

        assert!(cells.get(0));
        assert!(!cells.get(1));
        assert!(cells.get(7));
        assert!(cells.get(8));
        assert!(cells.get(19));

        cells.set(7, false);
        assert!(!cells.get(7));
        assert!(cells.get(8), "clearing one bit must not touch its neighbour");
    }

    #[test]
    fn test_byte_layout() {
        let mut cells = BitCells::new(16);
        cells.set(9, true);
        // index 9 -> byte 1, bit 1
        assert_eq!(cells.bytes, vec![0b0000_0000, 0b0000_0010]);
    }

    #[test]
    fn test_partial_trailing_byte() {
        let cells = BitCells::new(9);
        assert_eq!(cells.memory_bytes(), 2);
        assert_eq!(cells.len(), 9);
    }

    #[test]
    fn test_count_and_clear() {
        let mut cells = BitCells::new(100);
        cells.set(3, true);
        cells.set(50, true);
        cells.set(99, true);
        assert_eq!(cells.count_alive(), 3);
        assert_eq!(cells.iter_alive().collect::<Vec<_>>(), vec![3, 50, 99]);

        cells.clear();
        assert_eq!(cells.count_alive(), 0);
        assert_eq!(cells.len(), 100);
    }

    #[test]
    fn test_memory_reduction() {
        let cells = BitCells::new(1000 * 1000);
        assert_eq!(cells.memory_bytes(), 125_000);
    }
}
