use crate::error::MedianFilterError;
use crate::imageops_median::window::Window;
use std::num::NonZeroUsize;
use std::thread;

/// Validated parameters of a median filter run
///
/// Holding a `FilterConfig` proves the window size is odd and positive and
/// that at least one worker is requested, so filtering with it can only
/// fail for reasons outside the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    window: Window,
    worker_count: NonZeroUsize,
}

impl FilterConfig {
    /// Validates and bundles the filter parameters
    ///
    /// # Errors
    ///
    /// * `MedianFilterError::InvalidWindowSize` - If `window_size` is zero or even
    /// * `MedianFilterError::InvalidWorkerCount` - If `worker_count` is zero
    pub fn new(window_size: u32, worker_count: usize) -> Result<Self, MedianFilterError> {
        let window = Window::new(window_size)?;
        let worker_count = NonZeroUsize::new(worker_count).ok_or(
            MedianFilterError::InvalidWorkerCount {
                count: worker_count,
            },
        )?;
        Ok(Self {
            window,
            worker_count,
        })
    }

    pub const fn window(&self) -> Window {
        self.window
    }

    pub const fn worker_count(&self) -> NonZeroUsize {
        self.worker_count
    }

    /// Returns a copy with a different window size
    pub fn with_window_size(self, window_size: u32) -> Result<Self, MedianFilterError> {
        Ok(Self {
            window: Window::new(window_size)?,
            ..self
        })
    }

    /// Returns a copy with a different worker count
    pub fn with_worker_count(self, worker_count: usize) -> Result<Self, MedianFilterError> {
        Self::new(self.window.size(), worker_count)
    }
}

impl Default for FilterConfig {
    /// 3x3 window with one worker per available CPU
    fn default() -> Self {
        let worker_count = thread::available_parallelism().unwrap_or(NonZeroUsize::MIN);
        Self {
            window: Window::default(),
            worker_count,
        }
    }
}
