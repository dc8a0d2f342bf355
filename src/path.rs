use std::f64::consts::TAU;
use std::fmt;

use kurbo::{Affine, Arc, BezPath, PathEl, Vec2};

pub use kurbo::Point;

/// Default maximum deviation, in pixels, allowed when flattening curves.
pub const DEFAULT_FLATTEN_TOLERANCE: f64 = 0.25;

/// Accuracy of the cubic approximation of arcs in SVG output.
const SVG_ARC_ACCURACY: f64 = 0.01;

/// Point at `radius` from the origin in direction `angle` (radians).
pub fn polar(radius: f64, angle: f64) -> Point {
    Point::ORIGIN + Vec2::from_angle(angle) * radius
}

/// One drawing primitive, in the order a 2D canvas context would receive it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    /// Quadratic Bézier from the current point through `ctrl` to `to`.
    QuadTo { ctrl: Point, to: Point },
    /// Circular arc swept in the positive angle direction (clockwise on
    /// screen). A line joins the current point to the arc start, as with
    /// the canvas `arc()` call.
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Close,
}

impl PathSegment {
    /// Move every point through `affine`. Arc angles are left alone, so the
    /// transform must not rotate.
    fn translated(self, affine: Affine) -> Self {
        match self {
            PathSegment::MoveTo(p) => PathSegment::MoveTo(affine * p),
            PathSegment::LineTo(p) => PathSegment::LineTo(affine * p),
            PathSegment::QuadTo { ctrl, to } => PathSegment::QuadTo {
                ctrl: affine * ctrl,
                to: affine * to,
            },
            PathSegment::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => PathSegment::Arc {
                center: affine * center,
                radius,
                start_angle,
                end_angle,
            },
            PathSegment::Close => PathSegment::Close,
        }
    }
}

/// Closed vector outline of a mask, centred on the origin with rotation applied.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaskPath {
    segments: Vec<PathSegment>,
}

impl MaskPath {
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of quadratic curve segments, i.e. rounded corners.
    pub fn curve_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, PathSegment::QuadTo { .. }))
            .count()
    }

    /// Return a copy of the path shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> MaskPath {
        let shift = Affine::translate((dx, dy));
        MaskPath {
            segments: self.segments.iter().map(|s| s.translated(shift)).collect(),
        }
    }

    /// Convert to a [`BezPath`] with canvas subpath rules.
    ///
    /// Arcs become cubic Béziers that stay within `accuracy` pixels of the
    /// circle. Drawing after a close starts a new subpath at the closed
    /// one's start point.
    pub fn to_bez_path(&self, accuracy: f64) -> BezPath {
        let accuracy = sanitize_tolerance(accuracy);
        let mut path = BezPath::new();
        let mut pen = Pen::default();

        for segment in &self.segments {
            match *segment {
                PathSegment::MoveTo(p) => pen.move_to(&mut path, p),
                PathSegment::LineTo(p) => {
                    if pen.ensure_subpath(&mut path, p) {
                        path.line_to(p);
                    }
                    pen.current = Some(p);
                }
                PathSegment::QuadTo { ctrl, to } => {
                    pen.ensure_subpath(&mut path, ctrl);
                    path.quad_to(ctrl, to);
                    pen.current = Some(to);
                }
                PathSegment::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                } => {
                    let sweep = (end_angle - start_angle).clamp(-TAU, TAU);
                    let radius = if radius > 0.0 { radius } else { 0.0 };
                    let first = center + Vec2::from_angle(start_angle) * radius;
                    if pen.ensure_subpath(&mut path, first) && !pen.is_at(first) {
                        path.line_to(first);
                    }
                    if radius > 0.0 {
                        let arc = Arc {
                            center,
                            radii: Vec2::new(radius, radius),
                            start_angle,
                            sweep_angle: sweep,
                            x_rotation: 0.0,
                        };
                        for el in arc.append_iter(accuracy) {
                            path.push(el);
                        }
                    }
                    pen.current = Some(center + Vec2::from_angle(start_angle + sweep) * radius);
                }
                PathSegment::Close => pen.close(&mut path),
            }
        }
        path
    }

    /// Convert the path into polylines, one per subpath.
    ///
    /// Each polyline is implicitly closed. Curves are subdivided until they
    /// deviate from the polyline by at most `tolerance` pixels.
    pub fn flatten(&self, tolerance: f64) -> Vec<Vec<Point>> {
        let tolerance = sanitize_tolerance(tolerance);
        // half the budget for the arc approximation, half for flattening
        let path = self.to_bez_path(tolerance * 0.5);

        let mut contours = Vec::new();
        let mut current: Vec<Point> = Vec::new();
        kurbo::flatten(path.elements().iter().copied(), tolerance * 0.5, |el| match el {
            PathEl::MoveTo(p) => {
                finish_contour(&mut current, &mut contours);
                current.push(p);
            }
            PathEl::LineTo(p) => current.push(p),
            PathEl::ClosePath => finish_contour(&mut current, &mut contours),
            PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
        });
        finish_contour(&mut current, &mut contours);
        contours
    }

    /// Render the path as SVG path data (the `d` attribute).
    ///
    /// Arcs are written as cubic Béziers.
    pub fn to_svg_path_data(&self) -> String {
        self.to_bez_path(SVG_ARC_ACCURACY).to_svg()
    }
}

impl fmt::Display for MaskPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_svg_path_data())
    }
}

/// Subpath state while replaying segments into a [`BezPath`].
#[derive(Debug, Default)]
struct Pen {
    start: Option<Point>,
    current: Option<Point>,
    open: bool,
}

impl Pen {
    fn move_to(&mut self, path: &mut BezPath, p: Point) {
        path.move_to(p);
        self.start = Some(p);
        self.current = Some(p);
        self.open = true;
    }

    /// Open a subpath if none is open. Returns `false` when the subpath had
    /// to start at `fallback` because nothing was drawn before.
    fn ensure_subpath(&mut self, path: &mut BezPath, fallback: Point) -> bool {
        if self.open {
            return true;
        }
        match self.start {
            Some(start) => {
                path.move_to(start);
                self.current = Some(start);
                self.open = true;
                true
            }
            None => {
                self.move_to(path, fallback);
                false
            }
        }
    }

    fn is_at(&self, p: Point) -> bool {
        self.current.is_some_and(|c| c.distance(p) <= 1e-9)
    }

    fn close(&mut self, path: &mut BezPath) {
        if self.open {
            path.close_path();
            self.open = false;
        }
        self.current = self.start;
    }
}

/// Accumulates segments, mapping every coordinate through the frame rotation.
#[derive(Debug)]
pub(crate) struct PathBuilder {
    frame: Affine,
    radians: f64,
    segments: Vec<PathSegment>,
}

impl PathBuilder {
    /// Start a path in a frame rotated clockwise by `radians`.
    pub(crate) fn rotated(radians: f64) -> Self {
        Self {
            frame: Affine::rotate(radians),
            radians,
            segments: Vec::new(),
        }
    }

    pub(crate) fn move_to(&mut self, p: Point) {
        self.segments.push(PathSegment::MoveTo(self.frame * p));
    }

    pub(crate) fn line_to(&mut self, p: Point) {
        self.segments.push(PathSegment::LineTo(self.frame * p));
    }

    pub(crate) fn quad_to(&mut self, ctrl: Point, to: Point) {
        self.segments.push(PathSegment::QuadTo {
            ctrl: self.frame * ctrl,
            to: self.frame * to,
        });
    }

    pub(crate) fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        self.segments.push(PathSegment::Arc {
            center: self.frame * center,
            radius,
            start_angle: start_angle + self.radians,
            end_angle: end_angle + self.radians,
        });
    }

    pub(crate) fn close(&mut self) {
        self.segments.push(PathSegment::Close);
    }

    pub(crate) fn finish(self) -> MaskPath {
        MaskPath {
            segments: self.segments,
        }
    }
}

fn sanitize_tolerance(tolerance: f64) -> f64 {
    if tolerance.is_finite() && tolerance > 0.0 {
        tolerance
    } else {
        DEFAULT_FLATTEN_TOLERANCE
    }
}

fn finish_contour(current: &mut Vec<Point>, contours: &mut Vec<Vec<Point>>) {
    // the closing edge is implicit
    if current.len() > 1 && current.first() == current.last() {
        current.pop();
    }
    if current.len() >= 2 {
        contours.push(std::mem::take(current));
    } else {
        current.clear();
    }
}
