use core::ops::Range;

use heapless::Vec;

use crate::error::ConfigError;

/// Maximum number of rings in a layout
pub const MAX_RINGS: usize = 8;

/// Ordered ring sizes of the LED chain
///
/// Rings are laid out back to back: ring 0 occupies flat pixels
/// `0..sizes[0]`, ring 1 follows it, and so on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingLayout {
    sizes: Vec<u16, MAX_RINGS>,
    total: usize,
}

impl RingLayout {
    /// Build a layout from ring sizes
    pub fn new(sizes: &[u16]) -> Result<Self, ConfigError> {
        if sizes.is_empty() {
            return Err(ConfigError::EmptyLayout);
        }
        if let Some(ring) = sizes.iter().position(|&size| size == 0) {
            return Err(ConfigError::EmptyRing { ring });
        }
        let sizes = Vec::from_slice(sizes).map_err(|()| ConfigError::TooManyRings {
            count: sizes.len(),
            max: MAX_RINGS,
        })?;
        let total = sizes.iter().map(|&size| usize::from(size)).sum();

        Ok(Self { sizes, total })
    }

    /// Total number of pixels over all rings
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of rings
    pub fn ring_count(&self) -> usize {
        self.sizes.len()
    }

    /// Number of pixels in the ring, zero for unknown rings
    pub fn ring_len(&self, ring: usize) -> usize {
        self.sizes.get(ring).map_or(0, |&size| usize::from(size))
    }

    /// Flat pixel range covered by the ring
    pub fn ring_range(&self, ring: usize) -> Option<Range<usize>> {
        let len = self.sizes.get(ring).map(|&size| usize::from(size))?;
        let start = self.ring_offset(ring);
        Some(start..start + len)
    }

    /// Translate a flat pixel index into `(ring, index)`
    pub fn locate(&self, pixel: usize) -> Option<(usize, usize)> {
        let mut start = 0;
        for (ring, &size) in self.sizes.iter().enumerate() {
            let end = start + usize::from(size);
            if pixel < end {
                return Some((ring, pixel - start));
            }
            start = end;
        }
        None
    }

    /// Translate `(ring, index)` into a flat pixel index
    pub fn flat_index(&self, ring: usize, index: usize) -> Option<usize> {
        let range = self.ring_range(ring)?;
        (index < range.len()).then_some(range.start + index)
    }

    fn ring_offset(&self, ring: usize) -> usize {
        self.sizes
            .iter()
            .take(ring)
            .map(|&size| usize::from(size))
            .sum()
    }
}
