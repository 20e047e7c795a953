// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay appearance and placement.
//!
//! A [`MarqueeStyle`] is configured once, handed to the
//! [`MarqueeController`](crate::MarqueeController), and applied to every
//! overlay it creates. A single tint drives both the translucent fill and the
//! opaque border.
//!
//! ```
//! use peniko::Color;
//! use understory_marquee::MarqueeStyle;
//!
//! let style = MarqueeStyle::default()
//!     .with_tint(Color::from_rgba8(52, 119, 154, 255))
//!     .with_stack_order(2);
//!
//! assert_eq!(style.stack_order, 2);
//! assert_eq!(style.border_color().to_rgba8().to_u8_array(), [52, 119, 154, 255]);
//! assert_eq!(style.fill_color().components[3], 0.1);
//! ```

use peniko::Color;
use peniko::color::palette;

/// Fill opacity used when none is configured.
pub const DEFAULT_FILL_ALPHA: f32 = 0.1;

/// Border width used when none is configured.
pub const DEFAULT_BORDER_WIDTH: f64 = 1.0;

/// Appearance and stacking of the marquee overlay.
#[derive(Clone, Copy, Debug)]
pub struct MarqueeStyle {
    /// Base color; the border uses it as-is and the fill uses it at [`Self::fill_alpha`].
    pub tint: Color,
    /// Opacity of the fill, in `0.0..=1.0`.
    pub fill_alpha: f32,
    /// Border stroke width in the container's coordinate space.
    pub border_width: f64,
    /// Index at which the overlay is inserted among the container's children.
    pub stack_order: usize,
}

impl Default for MarqueeStyle {
    fn default() -> Self {
        Self {
            tint: palette::css::YELLOW,
            fill_alpha: DEFAULT_FILL_ALPHA,
            border_width: DEFAULT_BORDER_WIDTH,
            stack_order: 0,
        }
    }
}

impl MarqueeStyle {
    /// Returns a copy with the given tint.
    #[must_use]
    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }

    /// Returns a copy with the given fill opacity, clamped to `0.0..=1.0`.
    ///
    /// NaN falls back to [`DEFAULT_FILL_ALPHA`].
    #[must_use]
    pub fn with_fill_alpha(mut self, alpha: f32) -> Self {
        self.fill_alpha = if alpha.is_nan() {
            DEFAULT_FILL_ALPHA
        } else {
            alpha.clamp(0.0, 1.0)
        };
        self
    }

    /// Returns a copy with the given border width. Negative widths become zero.
    #[must_use]
    pub fn with_border_width(mut self, width: f64) -> Self {
        self.border_width = width.max(0.0);
        self
    }

    /// Returns a copy with the given stack order.
    #[must_use]
    pub fn with_stack_order(mut self, stack_order: usize) -> Self {
        self.stack_order = stack_order;
        self
    }

    /// Fill color: the tint with its alpha replaced by [`Self::fill_alpha`].
    #[must_use]
    pub fn fill_color(&self) -> Color {
        self.tint.with_alpha(self.fill_alpha)
    }

    /// Border color: the tint unchanged.
    #[must_use]
    pub fn border_color(&self) -> Color {
        self.tint
    }
}
