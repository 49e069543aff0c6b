/// Compact square bit matrix, used to mark function (reserved) modules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    size: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create a `size` x `size` matrix with every bit cleared
    pub fn new(size: usize) -> Self {
        let bytes_needed = (size * size).div_ceil(8);
        Self {
            size,
            data: vec![0; bytes_needed],
        }
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get bit at (x, y). Out-of-range reads are false.
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.size || y >= self.size {
            return false;
        }
        let index = y * self.size + x;
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Set bit at (x, y). Out-of-range writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if x >= self.size || y >= self.size {
            return;
        }
        let index = y * self.size + x;
        if value {
            self.data[index / 8] |= 1 << (index % 8);
        } else {
            self.data[index / 8] &= !(1 << (index % 8));
        }
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }
}
