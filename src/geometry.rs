//! Sector layout for the wheel
//!
//! All coordinates live in a fixed 0–100 logical viewbox. Angles are in
//! degrees, measured from the positive x axis and increasing clockwise (the
//! y axis points down, as in SVG). The whole wheel is drawn rotated by
//! [`FRAME_ROTATION`] so that logical 0° ends up at the top, under the
//! pointer.

use crate::segment::Segment;
use serde::Serialize;

/// Center of the wheel in viewbox units
pub const CENTER: Point = Point { x: 50.0, y: 50.0 };
/// Outer radius of every sector
pub const RADIUS: f64 = 50.0;
/// Distance from the center to the label anchor
pub const TEXT_RADIUS: f64 = 38.0;
/// Distance from the center to the icon anchor
pub const ICON_RADIUS: f64 = 24.0;
/// Vertical distance between stacked label lines
pub const LINE_HEIGHT: f64 = 3.5;
/// Upward shift of the first line of a multi-line label
pub const FIRST_LINE_OFFSET: f64 = -1.2;
/// Extra rotation applied to icons so they face the center
pub const ICON_FLIP: f64 = 180.0;
/// Global rotation of the drawing that puts logical 0° at the top
pub const FRAME_ROTATION: f64 = -90.0;

/// A point in viewbox coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `center` along `angle` degrees
    pub fn polar(center: Point, radius: f64, angle: f64) -> Self {
        let rad = angle.to_radians();
        Self {
            x: radius.mul_add(rad.cos(), center.x),
            y: radius.mul_add(rad.sin(), center.y),
        }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Placement of a label or icon: translate to `position`, then rotate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Anchor {
    pub position: Point,
    /// Rotation in degrees applied after translation
    pub rotation: f64,
}

/// Drawable geometry for one segment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorGeometry {
    pub index: usize,
    pub total: usize,
    pub span: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub mid_angle: f64,
    /// Boundary point on the rim at `start_angle`
    pub start_point: Point,
    /// Boundary point on the rim at `end_angle`
    pub end_point: Point,
    pub label: Anchor,
    /// Icon anchor; the icon itself is additionally flipped by [`ICON_FLIP`]
    pub icon: Anchor,
}

impl SectorGeometry {
    /// SVG path data for the pie slice: two radial edges and one rim arc.
    ///
    /// A single-segment wheel is emitted as two half arcs, since an SVG arc
    /// whose endpoints coincide draws nothing.
    pub fn path_data(&self) -> String {
        let c = CENTER;
        let (s, e) = (self.start_point, self.end_point);
        if self.total == 1 {
            let opposite = Point::polar(CENTER, RADIUS, self.start_angle + 180.0);
            return format!(
                "M {} {} L {} {} A {r} {r} 0 1 1 {} {} A {r} {r} 0 1 1 {} {} Z",
                fmt_num(c.x),
                fmt_num(c.y),
                fmt_num(s.x),
                fmt_num(s.y),
                fmt_num(opposite.x),
                fmt_num(opposite.y),
                fmt_num(s.x),
                fmt_num(s.y),
                r = fmt_num(RADIUS),
            );
        }

        let large_arc = if self.span > 180.0 { 1 } else { 0 };
        format!(
            "M {} {} L {} {} A {r} {r} 0 {large_arc} 1 {} {} Z",
            fmt_num(c.x),
            fmt_num(c.y),
            fmt_num(s.x),
            fmt_num(s.y),
            fmt_num(e.x),
            fmt_num(e.y),
            r = fmt_num(RADIUS),
        )
    }

    /// Whether `angle` (degrees, any range) falls inside this sector
    pub fn contains_angle(&self, angle: f64) -> bool {
        let a = angle.rem_euclid(360.0);
        a >= self.start_angle && a < self.end_angle
    }
}

/// Computes the geometry of segment `index` out of `total`.
///
/// Returns `None` for an empty wheel. The index is not range checked.
pub fn compute_sector(index: usize, total: usize) -> Option<SectorGeometry> {
    if total == 0 {
        return None;
    }

    let span = 360.0 / total as f64;
    let start_angle = index as f64 * span;
    let end_angle = start_angle + span;
    let mid_angle = start_angle + span / 2.0;
    let item_rotation = mid_angle + 90.0;

    Some(SectorGeometry {
        index,
        total,
        span,
        start_angle,
        end_angle,
        mid_angle,
        start_point: Point::polar(CENTER, RADIUS, start_angle),
        end_point: Point::polar(CENTER, RADIUS, end_angle),
        label: Anchor {
            position: Point::polar(CENTER, TEXT_RADIUS, mid_angle),
            rotation: item_rotation,
        },
        icon: Anchor {
            position: Point::polar(CENTER, ICON_RADIUS, mid_angle),
            rotation: item_rotation,
        },
    })
}

/// Lays out every segment of the wheel, in order
pub fn layout_wheel(segments: &[Segment]) -> Vec<SectorGeometry> {
    let total = segments.len();
    (0..total)
        .filter_map(|index| compute_sector(index, total))
        .collect()
}

/// Index of the sector under the pointer when the wheel is turned by `rotation`
pub fn sector_under_pointer(rotation: f64, total: usize) -> Option<usize> {
    if total == 0 {
        return None;
    }
    // The pointer sits at logical 0° before the wheel turns.
    let logical = (-rotation).rem_euclid(360.0);
    let span = 360.0 / total as f64;
    Some(((logical / span) as usize).min(total - 1))
}

/// One line of a label, positioned relative to the label anchor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelLine {
    pub text: String,
    /// Shift relative to the previous line (SVG `dy`)
    pub dy: f64,
    /// Absolute vertical offset from the anchor
    pub offset: f64,
}

/// Splits a label on line breaks and stacks the lines around the anchor
pub fn layout_label(label: &str) -> Vec<LabelLine> {
    let texts: Vec<&str> = label.split('\n').collect();
    let multi = texts.len() > 1;

    let mut offset = 0.0;
    texts
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let dy = match (i, multi) {
                (0, true) => FIRST_LINE_OFFSET,
                (0, false) => 0.0,
                _ => LINE_HEIGHT,
            };
            offset += dy;
            LabelLine {
                text: text.to_string(),
                dy,
                offset,
            }
        })
        .collect()
}

/// Formats a coordinate with at most three decimals and no trailing zeros
pub fn fmt_num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let s = format!("{:.3}", rounded);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
