// Copyright 2025 the Driftline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Graph properties.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;

use crate::error::ConfigError;
use crate::hover::DEFAULT_HIT_RADIUS;
use crate::sample::{Sample, default_samples};

/// Properties of an [`InteractiveGraph`](crate::InteractiveGraph).
///
/// Every field has a default; use the `with_*` setters to override individual properties.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
    /// Samples to plot, in x order.
    pub samples: Vec<Sample>,
    /// Target plot height in pixels.
    pub height: f64,
    /// Primary stroke and marker colour.
    pub main_line_color: Color,
    /// Secondary stroke and marker colour.
    pub secondary_line_color: Color,
    /// Top stop of the primary area gradient.
    pub bg_from: Color,
    /// Bottom stop of the primary area gradient.
    pub bg_to: Color,
    /// Show the secondary series.
    pub show_secondary_line: bool,
    /// Show horizontal grid lines.
    pub show_grid_lines: bool,
    /// Show the hover tooltip and marker highlight.
    pub enable_data_hover: bool,
    /// Fill the areas under the strokes.
    pub show_bg_gradient: bool,
    /// Stroke draw-in duration in milliseconds.
    pub animation_duration_ms: u32,
    /// Heading shown above the plot.
    pub title: String,
    /// Smaller heading shown under the title.
    pub subtitle: String,
    /// Radius of the hover hit region around each primary point.
    pub hit_radius: f64,
    /// Delay between mount and the appear animation.
    pub appear_delay_ms: u32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            height: 300.0,
            main_line_color: Color::from_rgba8(111, 66, 193, 204),
            secondary_line_color: Color::from_rgba8(59, 130, 246, 179),
            bg_from: Color::from_rgba8(139, 92, 246, 26),
            bg_to: Color::from_rgba8(59, 130, 246, 13),
            show_secondary_line: true,
            show_grid_lines: true,
            enable_data_hover: true,
            show_bg_gradient: true,
            animation_duration_ms: 1500,
            title: String::from("Interactive Graph"),
            subtitle: String::from("Performance Metrics"),
            hit_radius: DEFAULT_HIT_RADIUS,
            appear_delay_ms: 300,
        }
    }
}

impl GraphConfig {
    /// Sets the samples.
    pub fn with_samples(mut self, samples: Vec<Sample>) -> Self {
        self.samples = samples;
        self
    }

    /// Sets the target plot height.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Sets the primary and secondary line colours.
    pub fn with_line_colors(mut self, main: Color, secondary: Color) -> Self {
        self.main_line_color = main;
        self.secondary_line_color = secondary;
        self
    }

    /// Sets the primary area gradient stops.
    pub fn with_gradient(mut self, from: Color, to: Color) -> Self {
        self.bg_from = from;
        self.bg_to = to;
        self
    }

    /// Shows or hides the secondary series.
    pub fn with_secondary_line(mut self, show: bool) -> Self {
        self.show_secondary_line = show;
        self
    }

    /// Shows or hides the grid lines.
    pub fn with_grid_lines(mut self, show: bool) -> Self {
        self.show_grid_lines = show;
        self
    }

    /// Enables or disables hover feedback.
    pub fn with_data_hover(mut self, enable: bool) -> Self {
        self.enable_data_hover = enable;
        self
    }

    /// Shows or hides the area fills.
    pub fn with_bg_gradient(mut self, show: bool) -> Self {
        self.show_bg_gradient = show;
        self
    }

    /// Sets the stroke draw-in duration.
    pub fn with_animation_duration_ms(mut self, ms: u32) -> Self {
        self.animation_duration_ms = ms;
        self
    }

    /// Sets the title and subtitle.
    pub fn with_titles(mut self, title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        self.title = title.into();
        self.subtitle = subtitle.into();
        self
    }

    /// Sets the hover hit radius.
    pub fn with_hit_radius(mut self, radius: f64) -> Self {
        self.hit_radius = radius;
        self
    }

    /// Sets the delay before the appear animation.
    pub fn with_appear_delay_ms(mut self, ms: u32) -> Self {
        self.appear_delay_ms = ms;
        self
    }

    /// Checks that the numeric properties describe a drawable graph.
    ///
    /// Sample values are not checked: degenerate data degrades to an empty or flat graph.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(ConfigError::InvalidHeight(self.height));
        }
        if !(self.hit_radius.is_finite() && self.hit_radius >= 0.0) {
            return Err(ConfigError::InvalidHitRadius(self.hit_radius));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = GraphConfig::default();
        assert_eq!(c.validate(), Ok(()));
        assert_eq!(c.samples.len(), 12);
        assert_eq!(c.height, 300.0);
        assert_eq!(c.animation_duration_ms, 1500);
        assert_eq!(c.main_line_color.to_rgba8().a, 204);
    }

    #[test]
    fn rejects_unusable_height() {
        for h in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = GraphConfig::default().with_height(h).validate().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidHeight(_)));
        }
    }

    #[test]
    fn rejects_negative_hit_radius() {
        assert_eq!(
            GraphConfig::default().with_hit_radius(-2.0).validate(),
            Err(ConfigError::InvalidHitRadius(-2.0))
        );
        assert_eq!(GraphConfig::default().with_hit_radius(0.0).validate(), Ok(()));
    }

    #[test]
    fn error_messages_name_the_value() {
        use alloc::string::ToString;
        let msg = ConfigError::InvalidHeight(-3.0).to_string();
        assert!(msg.contains("-3"), "{msg}");
    }
}
