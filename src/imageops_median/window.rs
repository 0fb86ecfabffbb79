use crate::error::MedianFilterError;
use crate::utils::clamp_coordinate;
use crate::Image;
use image::Pixel;
use itertools::iproduct;

/// Square sampling window of odd side length
///
/// The window is centered on the output pixel and extends `radius` pixels
/// in every direction. Coordinates falling outside the image are clamped to
/// the nearest edge, so a window always yields exactly `size²` samples.
///
/// # Examples
///
/// ```rust
/// use imageops_median::Window;
///
/// let window = Window::new(5).unwrap();
/// assert_eq!(window.radius(), 2);
/// assert_eq!(window.area(), 25);
///
/// assert!(Window::new(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    size: u32,
}

impl Window {
    /// Creates a window with the given side length
    ///
    /// # Errors
    ///
    /// * `MedianFilterError::InvalidWindowSize` - If `size` is zero or even
    pub fn new(size: u32) -> Result<Self, MedianFilterError> {
        if size == 0 || size % 2 == 0 {
            return Err(MedianFilterError::InvalidWindowSize { size });
        }
        Ok(Self { size })
    }

    /// Side length in pixels
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Half-extent of the window, `(size - 1) / 2`
    pub const fn radius(&self) -> u32 {
        (self.size - 1) / 2
    }

    /// Number of samples taken per output pixel, always odd
    pub const fn area(&self) -> u64 {
        self.size as u64 * self.size as u64
    }

    /// Gathers the clamped neighborhood of `(x, y)`
    ///
    /// Samples are ordered column by column: the outer loop walks the
    /// horizontal offset, the inner loop the vertical offset.
    ///
    /// Every repeat is materialized, so memory grows with `size²` even when
    /// the window is far larger than the image. Prefer
    /// [`Window::sample_weighted_into`] for such windows.
    ///
    /// # Panics
    ///
    /// Panics if the image is empty, or if `size²` samples cannot be allocated.
    pub fn sample<P: Pixel>(&self, image: &Image<P>, x: u32, y: u32) -> Vec<P> {
        let mut neighborhood = Vec::new();
        self.sample_into(image, x, y, &mut neighborhood);
        neighborhood
    }

    /// Same as [`Window::sample`], but refills a caller-owned buffer
    pub fn sample_into<P: Pixel>(&self, image: &Image<P>, x: u32, y: u32, buffer: &mut Vec<P>) {
        let (width, height) = image.dimensions();
        let radius = i64::from(self.radius());

        buffer.clear();
        buffer.extend(
            iproduct!(-radius..=radius, -radius..=radius).map(|(dx, dy)| {
                let nx = clamp_coordinate(x, dx, width);
                let ny = clamp_coordinate(y, dy, height);
                *image.get_pixel(nx, ny)
            }),
        );
    }

    /// Gathers the distinct source pixels of the clamped neighborhood of
    /// `(x, y)`, each paired with the number of window offsets landing on it
    ///
    /// The counts always sum to [`Window::area`]. Clamping only repeats edge
    /// pixels, so the buffer never holds more than
    /// `min(size, width) * min(size, height)` entries. An empty image leaves
    /// the buffer empty.
    pub fn sample_weighted_into<P: Pixel>(
        &self,
        image: &Image<P>,
        x: u32,
        y: u32,
        buffer: &mut Vec<(P, u64)>,
    ) {
        let (width, height) = image.dimensions();
        let radius = self.radius();

        buffer.clear();
        buffer.extend(
            iproduct!(
                axis_multiplicities(x, radius, width),
                axis_multiplicities(y, radius, height)
            )
            .map(|((nx, x_count), (ny, y_count))| (*image.get_pixel(nx, ny), x_count * y_count)),
        );
    }
}

/// Source coordinates one axis of the window reaches, with the number of
/// offsets in `-radius..=radius` that clamp onto each of them
fn axis_multiplicities(
    center: u32,
    radius: u32,
    extent: u32,
) -> impl Iterator<Item = (u32, u64)> + Clone {
    let (low, high) = (
        i64::from(center) - i64::from(radius),
        i64::from(center) + i64::from(radius),
    );
    let last = i64::from(extent) - 1;

    (low.max(0)..=high.min(last)).map(move |coordinate| {
        // Offsets past either edge all collapse onto the edge coordinate
        let first = if coordinate == 0 { low } else { coordinate };
        let end = if coordinate == last { high } else { coordinate };
        (coordinate as u32, (end - first + 1) as u64)
    })
}

impl Default for Window {
    /// The 3x3 window
    fn default() -> Self {
        Self { size: 3 }
    }
}
