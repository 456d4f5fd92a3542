//! Coordinate mapping from screen space to normalized canvas space.
//!
//! Pointer events arrive in screen pixels. Placed items are stored as
//! percentages of the canvas width and height so a layout renders the same
//! at any on-screen size.
//!
//! ```text
//! x = clamp((pointer_x - left) / width * 100, 0, 100)
//! y = clamp((pointer_y - top) / height * 100, 0, 100)
//! ```
//!
//! With snapping enabled each axis is then rounded to the nearest multiple of
//! the grid step.

use planmark_core::{DesignerError, DesignerResult};
use serde::{Deserialize, Serialize};

/// Upper bound of the normalized coordinate range.
pub const CANVAS_EXTENT: f64 = 100.0;

/// Default snap step in percent (50 grid lines per axis).
pub const DEFAULT_GRID_STEP: f64 = 2.0;

/// Screen-space bounding rectangle of the mounted canvas element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Returns true if the rectangle has a finite, positive area.
    pub fn is_measurable(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// Pointer position in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Normalized canvas position, each axis in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

impl CanvasPoint {
    /// Creates a new canvas point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point in percent units.
    pub fn distance_to(&self, other: &CanvasPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Converts pointer events into normalized canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    grid_step: f64,
}

impl CoordinateMapper {
    /// Creates a mapper with the given snap step.
    ///
    /// Steps outside `(0, 100]` fall back to the default.
    pub fn new(grid_step: f64) -> Self {
        let grid_step = if grid_step.is_finite() && grid_step > 0.0 && grid_step <= CANVAS_EXTENT
        {
            grid_step
        } else {
            tracing::warn!(
                "Invalid grid step {}, using {}",
                grid_step,
                DEFAULT_GRID_STEP
            );
            DEFAULT_GRID_STEP
        };
        Self { grid_step }
    }

    /// Gets the snap step.
    pub fn grid_step(&self) -> f64 {
        self.grid_step
    }

    /// Maps a pointer position to a normalized canvas point.
    ///
    /// Fails with [`DesignerError::NoSurface`] when the canvas is not mounted
    /// or has no area. The result is always clamped into range.
    pub fn map(
        &self,
        surface: Option<&SurfaceRect>,
        pointer: ScreenPoint,
        snap_to_grid: bool,
    ) -> DesignerResult<CanvasPoint> {
        let rect = match surface {
            Some(rect) if rect.is_measurable() => rect,
            _ => return Err(DesignerError::NoSurface),
        };

        let x = clamp_percent((pointer.x - rect.left) / rect.width * CANVAS_EXTENT);
        let y = clamp_percent((pointer.y - rect.top) / rect.height * CANVAS_EXTENT);

        if snap_to_grid {
            Ok(CanvasPoint::new(self.snap(x), self.snap(y)))
        } else {
            Ok(CanvasPoint::new(x, y))
        }
    }

    /// Rounds an in-range value to the nearest multiple of the grid step.
    pub fn snap(&self, value: f64) -> f64 {
        let mut snapped = (clamp_percent(value) / self.grid_step).round() * self.grid_step;
        // Steps that do not divide 100 can round past the edge.
        if snapped > CANVAS_EXTENT {
            snapped -= self.grid_step;
        }
        snapped
    }
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self {
            grid_step: DEFAULT_GRID_STEP,
        }
    }
}

/// Clamps a value into `[0, 100]`. NaN maps to 0.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, CANVAS_EXTENT)
}
