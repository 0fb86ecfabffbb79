use crate::error::MedianFilterError;
use crate::imageops_median::partition::Region;
use crate::imageops_median::reducer::ChannelMedianReducer;
use crate::imageops_median::window::Window;
use crate::Image;
use image::Pixel;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::mem;
use std::num::NonZeroUsize;

/// Fixed-size pool of threads that filters regions in parallel
///
/// Every call to [`WorkerPool::run`] turns each region into one task. Tasks
/// write into disjoint slices of a single output buffer, so no locking is
/// involved, and the call returns only once every task has finished.
pub struct WorkerPool {
    pool: ThreadPool,
    worker_count: NonZeroUsize,
}

impl WorkerPool {
    /// Spawns `worker_count` worker threads
    ///
    /// # Errors
    ///
    /// * `MedianFilterError::ThreadPoolCreationFailed` - If the threads cannot be spawned
    pub fn new(worker_count: NonZeroUsize) -> Result<Self, MedianFilterError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(worker_count.get())
            .thread_name(|index| format!("median-worker-{index}"))
            .build()
            .map_err(|e| MedianFilterError::ThreadPoolCreationFailed(e.to_string()))?;

        Ok(Self { pool, worker_count })
    }

    pub const fn worker_count(&self) -> NonZeroUsize {
        self.worker_count
    }

    /// Filters `image` region by region and assembles the result
    ///
    /// `regions` must be ordered left to right and cover every column of
    /// the image exactly once, as produced by
    /// [`partition`](crate::partition).
    ///
    /// # Panics
    ///
    /// Panics if the regions do not tile the image, or if a worker panics.
    /// A failed worker never yields a partially filled image.
    pub fn run<P>(&self, image: &Image<P>, regions: &[Region], window: Window) -> Image<P>
    where
        P: Pixel + Send + Sync,
        P::Subpixel: Ord + Send + Sync,
    {
        let (width, height) = image.dimensions();
        let Some(&fill) = image.pixels().next() else {
            return Image::new(width, height);
        };

        // Column-major: each region owns one contiguous run of columns
        let mut strips = vec![fill; width as usize * height as usize];

        self.pool.scope(|scope| {
            let mut remaining = strips.as_mut_slice();
            let mut next_column = 0;
            for &region in regions {
                assert!(
                    region.x_start() == next_column && region.height() == height,
                    "region {region:?} does not continue the tiling at column {next_column}"
                );
                let (strip, rest) = mem::take(&mut remaining).split_at_mut(region.pixel_count());
                remaining = rest;
                next_column = region.x_end();

                scope.spawn(move |_| filter_region(image, region, window, strip));
            }
            assert!(
                remaining.is_empty(),
                "regions stop at column {next_column} of {width}"
            );
        });

        assemble_strips(&strips, width, height)
    }
}

/// Computes every output pixel of one region into its strip
fn filter_region<P>(image: &Image<P>, region: Region, window: Window, strip: &mut [P])
where
    P: Pixel,
    P::Subpixel: Ord,
{
    let (width, height) = image.dimensions();
    let span = |extent: u32| window.size().min(extent) as usize;
    let mut neighborhood = Vec::with_capacity(span(width) * span(height));
    let mut reducer = ChannelMedianReducer::new();

    let columns = strip.chunks_exact_mut(region.height() as usize);
    for (x, column) in region.columns().zip(columns) {
        for (y, output) in (0..region.height()).zip(column.iter_mut()) {
            window.sample_weighted_into(image, x, y, &mut neighborhood);
            *output = reducer.reduce_weighted(&neighborhood);
        }
    }

    log::trace!(
        "filtered columns {}..{} ({} pixels)",
        region.x_start(),
        region.x_end(),
        region.pixel_count()
    );
}

/// Rebuilds a row-major image from the column-major strip buffer
fn assemble_strips<P: Pixel>(strips: &[P], width: u32, height: u32) -> Image<P> {
    let column_length = height as usize;
    Image::from_fn(width, height, |x, y| strips[x as usize * column_length + y as usize])
}
