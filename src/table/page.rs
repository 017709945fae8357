//! Page windowing state.

/// Allowed rows-per-page choices. No other size is valid input.
pub const PAGE_SIZES: [usize; 3] = [5, 10, 25];

/// Current page window. `index` is zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub index: usize,
    pub size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            index: 0,
            size: PAGE_SIZES[0],
        }
    }
}

impl PageState {
    /// Offset of the first row of the current page within the filtered set.
    pub fn start(&self) -> usize {
        self.index * self.size
    }

    /// Sets a new page size and jumps back to page 0. Sizes outside
    /// `PAGE_SIZES` are ignored; returns whether the change was accepted.
    pub fn set_size(&mut self, size: usize) -> bool {
        if !PAGE_SIZES.contains(&size) {
            return false;
        }
        self.size = size;
        self.index = 0;
        true
    }

    /// The next larger allowed page size, wrapping to the smallest.
    pub fn next_size(&self) -> usize {
        let pos = PAGE_SIZES.iter().position(|&s| s == self.size).unwrap_or(0);
        PAGE_SIZES[(pos + 1) % PAGE_SIZES.len()]
    }

    /// The next smaller allowed page size, wrapping to the largest.
    pub fn prev_size(&self) -> usize {
        let pos = PAGE_SIZES.iter().position(|&s| s == self.size).unwrap_or(0);
        PAGE_SIZES[(pos + PAGE_SIZES.len() - 1) % PAGE_SIZES.len()]
    }
}
