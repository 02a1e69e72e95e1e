//! Testimonial carousel.
//!
//! The page delegates sliding to a third-party widget; this module
//! keeps the widget's configuration and the handful of state the page
//! observes (active slide, initialized-or-destroyed).

use std::time::Duration;

/// Responsive breakpoint: at viewports at least `min_width` px wide,
/// show `slides_per_view` slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    /// Minimum viewport width in pixels.
    pub min_width: u32,
    /// Slides visible at once from this width up.
    pub slides_per_view: u32,
}

/// Carousel settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderConfig {
    /// Wrap from the last slide back to the first.
    pub looped: bool,
    /// Show a grab cursor over the slider.
    pub grab_cursor: bool,
    /// Gap between slides in pixels.
    pub space_between: u32,
    /// Delay between automatic advances.
    pub autoplay_delay: Duration,
    /// Responsive slides-per-view table, sorted by `min_width`.
    pub breakpoints: Vec<Breakpoint>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            looped: true,
            grab_cursor: true,
            space_between: 25,
            autoplay_delay: Duration::from_millis(3000),
            breakpoints: vec![
                Breakpoint {
                    min_width: 0,
                    slides_per_view: 1,
                },
                Breakpoint {
                    min_width: 768,
                    slides_per_view: 2,
                },
                Breakpoint {
                    min_width: 1024,
                    slides_per_view: 3,
                },
            ],
        }
    }
}

impl SliderConfig {
    /// Slides visible at a given viewport width: the entry with the
    /// largest `min_width` not exceeding `viewport_width`. Defaults to
    /// 1 when no breakpoint applies.
    #[must_use]
    pub fn slides_per_view(&self, viewport_width: u32) -> u32 {
        self.breakpoints
            .iter()
            .filter(|bp| bp.min_width <= viewport_width)
            .max_by_key(|bp| bp.min_width)
            .map_or(1, |bp| bp.slides_per_view)
    }
}

/// The testimonial slider handle.
///
/// Mirrors the widget lifecycle: created with a config, initialized
/// against however many slides the page holds, optionally destroyed.
/// `init` with no slides leaves the slider inert, the way the page
/// skips initialization when the slider markup is absent.
#[derive(Debug, Clone)]
pub struct TestimonialSlider {
    config: SliderConfig,
    slide_count: usize,
    active: usize,
    initialized: bool,
}

impl TestimonialSlider {
    /// Create an uninitialized slider.
    #[must_use]
    pub const fn new(config: SliderConfig) -> Self {
        Self {
            config,
            slide_count: 0,
            active: 0,
            initialized: false,
        }
    }

    /// Attach to `slide_count` slides. Zero slides is a no-op.
    pub const fn init(&mut self, slide_count: usize) {
        if slide_count == 0 {
            return;
        }
        self.slide_count = slide_count;
        self.active = 0;
        self.initialized = true;
    }

    /// Tear the slider down; navigation becomes inert.
    pub const fn destroy(&mut self) {
        self.initialized = false;
    }

    /// Whether the slider is live.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Index of the active slide, if live.
    #[must_use]
    pub const fn active_slide(&self) -> Option<usize> {
        if self.initialized { Some(self.active) } else { None }
    }

    /// Advance one slide, wrapping when looping is on and stopping at
    /// the end otherwise.
    pub const fn next(&mut self) {
        if !self.initialized {
            return;
        }
        if self.active + 1 < self.slide_count {
            self.active += 1;
        } else if self.config.looped {
            self.active = 0;
        }
    }

    /// Step back one slide, wrapping when looping is on.
    pub const fn prev(&mut self) {
        if !self.initialized {
            return;
        }
        if self.active > 0 {
            self.active -= 1;
        } else if self.config.looped {
            self.active = self.slide_count - 1;
        }
    }

    /// The slider's configuration.
    #[must_use]
    pub const fn config(&self) -> &SliderConfig {
        &self.config
    }
}
