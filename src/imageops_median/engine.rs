use crate::error::MedianFilterError;
use crate::imageops_median::config::FilterConfig;
use crate::imageops_median::partition::partition;
use crate::imageops_median::pool::WorkerPool;
use crate::utils::validate_non_empty_image;
use crate::Image;
use image::Pixel;

/// Median filter trait
///
/// Replaces every pixel with the per-channel median of the square window
/// centered on it. Compared to a box filter, impulse noise (isolated
/// outliers) is removed entirely instead of being smeared, and step edges
/// stay sharp.
///
/// This implementation supports any pixel type with totally ordered
/// channels, for example:
/// - Grayscale images (`Image<Luma<u8>>`, `Image<Luma<u16>>`)
/// - RGB color images (`Image<Rgb<u8>>`)
/// - RGBA color images (`Image<Rgba<u8>>`), alpha filtered like any channel
///
/// # Algorithm
///
/// 1. The columns are split into one vertical strip per worker
/// 2. Each worker walks its strip, gathering the clamped window of every pixel
/// 3. Every channel of the window is reduced to its middle order statistic
/// 4. Once all workers have finished, the strips are assembled into the output
///
/// Window samples outside the image repeat the nearest edge pixel.
///
/// # Examples
///
/// ```rust
/// use image::{ImageBuffer, Rgba};
/// use imageops_median::MedianFilter;
///
/// let mut image = ImageBuffer::from_pixel(8, 8, Rgba([100u8, 150, 200, 255]));
/// image.put_pixel(4, 4, Rgba([255, 0, 0, 255]));
///
/// let filtered = image.median_filter(3, 2).unwrap();
/// assert_eq!(filtered.dimensions(), (8, 8));
/// assert_eq!(filtered.get_pixel(4, 4), &Rgba([100, 150, 200, 255]));
/// ```
pub trait MedianFilter {
    /// Filtered image type
    type Output;

    /// Error returned when the request is rejected
    type Error;

    /// Applies the median filter
    ///
    /// # Arguments
    ///
    /// * `window_size` - Side length of the square window (must be odd and positive)
    /// * `worker_count` - Number of worker threads (must be at least 1)
    ///
    /// # Errors
    ///
    /// * `MedianFilterError::InvalidWindowSize` - If `window_size` is zero or even
    /// * `MedianFilterError::InvalidWorkerCount` - If `worker_count` is zero
    /// * `MedianFilterError::EmptyImage` - If the image has no pixels
    /// * `MedianFilterError::ThreadPoolCreationFailed` - If the workers cannot be spawned
    fn median_filter(
        &self,
        window_size: u32,
        worker_count: usize,
    ) -> Result<Self::Output, Self::Error>;

    /// Applies the median filter with a pre-validated configuration
    fn median_filter_with(&self, config: &FilterConfig) -> Result<Self::Output, Self::Error>;
}

impl<P> MedianFilter for Image<P>
where
    P: Pixel + Send + Sync,
    P::Subpixel: Ord + Send + Sync,
{
    type Output = Self;
    type Error = MedianFilterError;

    fn median_filter(
        &self,
        window_size: u32,
        worker_count: usize,
    ) -> Result<Self::Output, Self::Error> {
        median_filter(self, window_size, worker_count)
    }

    fn median_filter_with(&self, config: &FilterConfig) -> Result<Self::Output, Self::Error> {
        median_filter_with(self, config)
    }
}

/// Applies the median filter to `image`
///
/// Free-function form of [`MedianFilter::median_filter`]. All parameters
/// are validated before any pixel is processed.
pub fn median_filter<P>(
    image: &Image<P>,
    window_size: u32,
    worker_count: usize,
) -> Result<Image<P>, MedianFilterError>
where
    P: Pixel + Send + Sync,
    P::Subpixel: Ord + Send + Sync,
{
    let config = FilterConfig::new(window_size, worker_count)?;
    median_filter_with(image, &config)
}

/// Applies the median filter to `image` using a validated configuration
///
/// Blocks until every worker has finished. The result always has the
/// dimensions of the input, and it does not depend on the worker count.
pub fn median_filter_with<P>(
    image: &Image<P>,
    config: &FilterConfig,
) -> Result<Image<P>, MedianFilterError>
where
    P: Pixel + Send + Sync,
    P::Subpixel: Ord + Send + Sync,
{
    let (width, height) = image.dimensions();
    validate_non_empty_image(width, height)?;

    let window = config.window();
    let regions = partition(width, height, config.worker_count());
    let pool = WorkerPool::new(config.worker_count())?;

    log::debug!(
        "median filter {}x{}: window {} (radius {}), {} regions on {} workers",
        width,
        height,
        window.size(),
        window.radius(),
        regions.len(),
        pool.worker_count()
    );

    Ok(pool.run(image, &regions, window))
}
