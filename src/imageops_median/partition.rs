use std::num::NonZeroUsize;
use std::ops::Range;

/// Vertical strip of consecutive columns assigned to one worker
///
/// A region spans the full image height and the half-open column range
/// `x_start..x_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    x_start: u32,
    x_end: u32,
    height: u32,
}

impl Region {
    pub const fn x_start(&self) -> u32 {
        self.x_start
    }

    pub const fn x_end(&self) -> u32 {
        self.x_end
    }

    pub const fn width(&self) -> u32 {
        self.x_end - self.x_start
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Columns covered by this region
    pub const fn columns(&self) -> Range<u32> {
        self.x_start..self.x_end
    }

    /// Number of output pixels the owning worker writes
    pub const fn pixel_count(&self) -> usize {
        self.width() as usize * self.height as usize
    }
}

/// Splits `width` columns into at most `worker_count` vertical strips
///
/// Strips are returned left to right. Each one is `width / n` columns wide,
/// where `n` is the number of strips, and the leftmost `width % n` strips
/// take one extra column each. Together they cover every column exactly
/// once.
///
/// When there are more workers than columns, only `width` single-column
/// strips are produced and the surplus workers stay idle. A zero-width
/// image yields no strips.
///
/// # Examples
///
/// ```rust
/// use std::num::NonZeroUsize;
/// use imageops_median::partition;
///
/// let regions = partition(10, 4, NonZeroUsize::new(3).unwrap());
/// let widths: Vec<u32> = regions.iter().map(|r| r.width()).collect();
/// assert_eq!(widths, vec![4, 3, 3]);
/// ```
pub fn partition(width: u32, height: u32, worker_count: NonZeroUsize) -> Vec<Region> {
    if width == 0 {
        return Vec::new();
    }

    let region_count = u32::try_from(worker_count.get())
        .unwrap_or(u32::MAX)
        .min(width);
    let stripe_width = width / region_count;
    let remainder = width % region_count;

    let mut regions = Vec::with_capacity(region_count as usize);
    let mut x_start = 0;
    for index in 0..region_count {
        let region_width = stripe_width + u32::from(index < remainder);
        let region = Region {
            x_start,
            x_end: x_start + region_width,
            height,
        };
        x_start = region.x_end;
        regions.push(region);
    }

    debug_assert_eq!(x_start, width, "regions must cover every column");
    regions
}
