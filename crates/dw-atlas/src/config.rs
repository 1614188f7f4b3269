//! Walk and viewport settings.

use dw_core::Compass;

use crate::error::{AtlasError, AtlasResult};

/// Grid units between neighbouring rooms on the minimap. The cell in
/// between holds the connector glyph.
pub const MAP_STEP: i64 = 2;

/// Largest accepted minimap dimension.
pub const MAX_MAP_DIMENSION: usize = 255;

/// Configuration for a single worm walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkConfig {
    /// Grid units per exit.
    pub step: i64,
    /// How many exits deep the worm may go. `None` = until exhausted.
    pub max_depth: Option<usize>,
    /// Which directions the worm follows.
    pub compass: Compass,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self::reset()
    }
}

impl WalkConfig {
    /// Zone resets: one unit per exit, all eight directions, no depth limit.
    pub fn reset() -> Self {
        Self {
            step: 1,
            max_depth: None,
            compass: Compass::Full,
        }
    }

    /// Minimap walks: two units per exit, cardinals only, `radius` exits deep.
    pub fn map(radius: usize) -> Self {
        Self {
            step: MAP_STEP,
            max_depth: Some(radius),
            compass: Compass::Cardinal,
        }
    }

    /// Set the grid units per exit.
    pub fn with_step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    /// Limit the walk depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Remove the depth limit.
    pub fn unbounded(mut self) -> Self {
        self.max_depth = None;
        self
    }

    /// Set which directions are followed.
    pub fn with_compass(mut self, compass: Compass) -> Self {
        self.compass = compass;
        self
    }

    /// Reject configurations the worm cannot run.
    pub fn validate(&self) -> AtlasResult<()> {
        if self.step <= 0 {
            return Err(AtlasError::InvalidStep(self.step));
        }
        Ok(())
    }
}

/// Minimap viewport size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapConfig {
    /// Columns; must be odd.
    pub width: usize,
    /// Rows; must be odd.
    pub height: usize,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self::square(21)
    }
}

impl MapConfig {
    /// A square viewport.
    pub fn square(size: usize) -> Self {
        Self {
            width: size,
            height: size,
        }
    }

    /// Set the width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the height.
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Both dimensions must be odd and in `1..=MAX_MAP_DIMENSION`.
    pub fn validate(&self) -> AtlasResult<()> {
        let ok = |n: usize| n % 2 == 1 && n <= MAX_MAP_DIMENSION;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(AtlasError::InvalidDimensions {
                width: self.width,
                height: self.height,
                max: MAX_MAP_DIMENSION,
            })
        }
    }

    /// The center cell as `(row, col)`.
    pub fn center(&self) -> (usize, usize) {
        (self.height / 2, self.width / 2)
    }

    /// How many exits away from the viewer the map can show.
    pub fn radius(&self) -> usize {
        (self.width.min(self.height) / 2) / MAP_STEP as usize
    }
}
