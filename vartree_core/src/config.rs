// Copyright 2026 the Vartree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout spacing configuration.

/// Spacing constants shared by layout, hit testing, and painting.
///
/// All values are in surface logical units (CSS pixels on the web).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Margin around the drawn tree. The root sits at `(pad, pad)`.
    pub pad: f64,
    /// Distance between adjacent depth rows and between sibling columns.
    pub space: f64,
    /// Hit radius as a fraction of [`space`](Self::space).
    pub hit_radius_factor: f64,
}

impl LayoutConfig {
    /// The default spacing: 11 unit margin, 19 unit grid, hits within
    /// `0.4 × space`.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            pad: 11.0,
            space: 19.0,
            hit_radius_factor: 0.4,
        }
    }

    /// Returns the maximum pointer-to-node distance counted as a hit
    /// (exclusive).
    #[must_use]
    pub fn hit_radius(&self) -> f64 {
        self.space * self.hit_radius_factor
    }

    /// Returns the required size of a tree containing only a root.
    #[must_use]
    pub fn min_extent(&self) -> f64 {
        self.pad * 2.0
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_hit_radius() {
        let config = LayoutConfig::standard();
        assert!(
            (config.hit_radius() - 7.6).abs() < 1e-9,
            "0.4 × 19 should be 7.6"
        );
        assert_eq!(config.min_extent(), 22.0, "two margins");
    }
}
