//! Geometry for the scroll-aware controls that live outside routed content.

use crate::config::SiteConfig;

/// Keeps the floating logo clear of the footer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingLogo {
    margin: f64,
}

impl Default for FloatingLogo {
    fn default() -> Self {
        Self::new(&SiteConfig::default())
    }
}

impl FloatingLogo {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            margin: config.logo_margin,
        }
    }

    /// CSS `bottom` offset in pixels.
    ///
    /// Once the footer's top edge rises above the viewport bottom, the logo
    /// rides `margin` above the footer; otherwise it rests `margin` above the
    /// viewport bottom.
    pub fn bottom_offset(&self, viewport_height: f64, footer_top: f64) -> f64 {
        let overlap = (viewport_height - footer_top).max(0.0);
        if overlap > 0.0 {
            overlap + self.margin
        } else {
            self.margin
        }
    }
}

/// Visibility rule for the scroll-to-top button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollToTop {
    threshold: f64,
}

impl Default for ScrollToTop {
    fn default() -> Self {
        Self::new(&SiteConfig::default())
    }
}

impl ScrollToTop {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            threshold: config.scroll_top_threshold,
        }
    }

    pub fn is_visible(&self, scroll_y: f64) -> bool {
        scroll_y > self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_rests_above_viewport_bottom() {
        let logo = FloatingLogo::default();
        assert_eq!(logo.bottom_offset(800.0, 1200.0), 18.0);
        assert_eq!(logo.bottom_offset(800.0, 800.0), 18.0);
    }

    #[test]
    fn test_logo_rides_above_footer() {
        let logo = FloatingLogo::default();
        assert_eq!(logo.bottom_offset(800.0, 700.0), 118.0);
    }

    #[test]
    fn test_scroll_threshold_is_exclusive() {
        let button = ScrollToTop::default();
        assert!(!button.is_visible(0.0));
        assert!(!button.is_visible(300.0));
        assert!(button.is_visible(300.5));
    }
}
