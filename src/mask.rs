use std::f64::consts::{FRAC_PI_2, PI, TAU};

use image::{GrayImage, Luma, Rgba, RgbaImage};
use imageproc::drawing::draw_polygon_mut;
use imageproc::point::Point as PixelPoint;
use kurbo::Vec2;
use log::debug;

use crate::path::{MaskPath, PathBuilder, Point, polar};
use crate::shape::{AspectRatio, ShapeKind, ShapeSpec};

/// Circle, polygon and star radius as a fraction of the canvas size.
pub const SHAPE_RADIUS_FACTOR: f64 = 0.4;
/// Rectangle width as a fraction of the canvas size.
pub const RECTANGLE_WIDTH_FACTOR: f64 = 0.95;

const RECTANGLE_RADIUS_SCALE: f64 = 0.5;
const POLYGON_ROUNDING_LIMIT: f64 = 0.2;
const POLYGON_EDGE_CAP: f64 = 0.4;
const STAR_INNER_RATIO: f64 = 0.5;
const STAR_ROUNDING_LIMIT: f64 = 0.3;
const STAR_EDGE_CAP: f64 = 0.3;

/// Radius of the circle mask, and of the polygon's circumscribed circle.
pub fn circle_radius(canvas_size: u32) -> f64 {
    canvas_size as f64 * SHAPE_RADIUS_FACTOR
}

/// Width and height of the rectangle mask before rotation.
pub fn rectangle_size(canvas_size: u32, aspect_ratio: AspectRatio) -> (f64, f64) {
    let width = canvas_size as f64 * RECTANGLE_WIDTH_FACTOR;
    (width, width * aspect_ratio.height_factor())
}

/// Build the closed outline for `spec`, centred on the origin.
///
/// The generation frame is rotated by the shape's rotation before any vertex is
/// placed, so every coordinate in the result is already rotated. Corner
/// rounding never moves further than a fixed fraction of the adjacent edges
/// (40% for polygons, 30% for stars), so the outline cannot self-intersect.
pub fn generate_mask_path(spec: &ShapeSpec) -> MaskPath {
    let size = spec.canvas_size as f64;
    let mut builder = PathBuilder::rotated(spec.rotation_degrees * PI / 180.0);

    match spec.shape {
        ShapeKind::Circle => {
            builder.arc(Point::ORIGIN, circle_radius(spec.canvas_size), 0.0, TAU);
            builder.close();
        }
        ShapeKind::Rectangle => {
            let (width, height) = rectangle_size(spec.canvas_size, spec.aspect_ratio);
            rounded_rect(
                &mut builder,
                Point::new(-width / 2.0, -height / 2.0),
                width,
                height,
                spec.corner_radius * RECTANGLE_RADIUS_SCALE,
            );
        }
        ShapeKind::Polygon => {
            let radius = size * SHAPE_RADIUS_FACTOR;
            let count = spec.vertex_count as usize;
            let step = TAU / count as f64;
            let vertices = ring(count, step, |_| radius);
            let rounding = spec.corner_radius.min(radius * POLYGON_ROUNDING_LIMIT);
            outline(
                &mut builder,
                &vertices,
                polar(radius, -FRAC_PI_2),
                rounding_radius(rounding, spec.vertex_count),
                POLYGON_EDGE_CAP,
            );
        }
        ShapeKind::Star => {
            let outer = size * spec.outer_radius_fraction;
            let inner = outer * STAR_INNER_RATIO;
            let count = spec.vertex_count as usize * 2;
            let step = PI / spec.vertex_count as f64;
            let vertices = ring(count, step, |i| if i % 2 == 0 { outer } else { inner });
            let rounding = spec.corner_radius.min(inner * STAR_ROUNDING_LIMIT);
            outline(
                &mut builder,
                &vertices,
                polar(outer, -FRAC_PI_2),
                rounding_radius(rounding, spec.vertex_count),
                STAR_EDGE_CAP,
            );
        }
    }

    let path = builder.finish();
    debug!(
        "generated {} mask path: {} segments, {} rounded corners",
        spec.shape,
        path.len(),
        path.curve_count()
    );
    path
}

/// Rounding is only applied to real polygons with a positive radius.
fn rounding_radius(radius: f64, vertex_count: u32) -> Option<f64> {
    (radius > 0.0 && vertex_count >= 3).then_some(radius)
}

/// Vertices evenly spaced by `step`, the first one pointing up.
fn ring(count: usize, step: f64, radius_at: impl Fn(usize) -> f64) -> Vec<Point> {
    (0..count)
        .map(|i| polar(radius_at(i), i as f64 * step - FRAC_PI_2))
        .collect()
}

fn outline(
    builder: &mut PathBuilder,
    vertices: &[Point],
    top: Point,
    rounding: Option<f64>,
    edge_cap: f64,
) {
    match rounding {
        Some(radius) => rounded_outline(builder, vertices, radius, edge_cap),
        None => {
            builder.move_to(top);
            for &vertex in vertices.iter().skip(1) {
                builder.line_to(vertex);
            }
            builder.close();
        }
    }
}

fn rounded_outline(builder: &mut PathBuilder, vertices: &[Point], radius: f64, edge_cap: f64) {
    let count = vertices.len();
    for (i, &current) in vertices.iter().enumerate() {
        let prev = vertices[(i + count - 1) % count];
        let next = vertices[(i + 1) % count];

        let (v1, len1) = unit(current - prev);
        let (v2, len2) = unit(next - current);

        let offset = radius.min(len1 * edge_cap).min(len2 * edge_cap);
        let entry = current - v1 * offset;
        let exit = current + v2 * offset;

        if i == 0 {
            builder.move_to(entry);
        } else {
            builder.line_to(entry);
        }
        builder.quad_to(current, exit);
    }
    builder.close();
}

/// Normalize `v`, leaving zero-length vectors untouched.
fn unit(v: Vec2) -> (Vec2, f64) {
    let len = v.hypot();
    if len > 0.0 { (v / len, len) } else { (v, len) }
}

/// Rounded rectangle with the corner handling of the canvas `roundRect` call.
fn rounded_rect(builder: &mut PathBuilder, origin: Point, width: f64, height: f64, radius: f64) {
    let (x, y) = (origin.x, origin.y);
    // radii that do not fit shrink to half the shorter side
    let r = radius.max(0.0).min(width / 2.0).min(height / 2.0);

    if !(r > 0.0) {
        builder.move_to(Point::new(x, y));
        builder.line_to(Point::new(x + width, y));
        builder.line_to(Point::new(x + width, y + height));
        builder.line_to(Point::new(x, y + height));
        builder.close();
        return;
    }

    builder.move_to(Point::new(x + r, y));
    builder.line_to(Point::new(x + width - r, y));
    builder.arc(Point::new(x + width - r, y + r), r, -FRAC_PI_2, 0.0);
    builder.line_to(Point::new(x + width, y + height - r));
    builder.arc(Point::new(x + width - r, y + height - r), r, 0.0, FRAC_PI_2);
    builder.line_to(Point::new(x + r, y + height));
    builder.arc(Point::new(x + r, y + height - r), r, FRAC_PI_2, PI);
    builder.line_to(Point::new(x, y + r));
    builder.arc(Point::new(x + r, y + r), r, PI, PI + FRAC_PI_2);
    builder.close();
}

/// Rasterize the mask for `spec` onto a transparent square canvas.
pub fn render_mask(spec: &ShapeSpec, fill: Rgba<u8>, tolerance: f64) -> RgbaImage {
    let size = spec.canvas_size;
    let center = size as f64 / 2.0;
    let path = generate_mask_path(spec).translated(center, center);

    let mut canvas = RgbaImage::new(size, size);
    fill_path(&mut canvas, &path, fill, tolerance);
    debug!("rendered {size}x{size} {} mask", spec.shape);
    canvas
}

/// Fill every subpath of `path` (in canvas coordinates) with `fill`.
pub fn fill_path(canvas: &mut RgbaImage, path: &MaskPath, fill: Rgba<u8>, tolerance: f64) {
    for contour in path.flatten(tolerance) {
        let polygon = to_pixel_polygon(&contour);
        // imageproc needs at least a triangle whose first and last points differ
        if polygon.len() < 3 {
            continue;
        }
        draw_polygon_mut(canvas, &polygon, fill);
    }
}

fn to_pixel_polygon(contour: &[Point]) -> Vec<PixelPoint<i32>> {
    let mut polygon: Vec<PixelPoint<i32>> = Vec::with_capacity(contour.len());
    for p in contour {
        let px = PixelPoint::new(p.x.round() as i32, p.y.round() as i32);
        if polygon.last() != Some(&px) {
            polygon.push(px);
        }
    }
    while polygon.len() > 1 && polygon.first() == polygon.last() {
        polygon.pop();
    }
    polygon
}

/// Extract the alpha channel of a rendered mask as a grayscale image.
pub fn alpha_channel(image: &RgbaImage) -> GrayImage {
    let (w, h) = image.dimensions();
    GrayImage::from_fn(w, h, |x, y| Luma([image.get_pixel(x, y)[3]]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathSegment;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn spec(shape: ShapeKind) -> ShapeSpec {
        ShapeSpec::new(shape)
    }

    /// Split a rounded outline into (entry, vertex, exit) triples.
    fn corners(path: &MaskPath) -> Vec<(Point, Point, Point)> {
        let segments = path.segments();
        let mut out = Vec::new();
        for (i, segment) in segments.iter().enumerate() {
            if let PathSegment::QuadTo { ctrl, to } = *segment {
                let entry = match segments[i - 1] {
                    PathSegment::MoveTo(p) | PathSegment::LineTo(p) => p,
                    other => panic!("unexpected segment before curve: {other:?}"),
                };
                out.push((entry, ctrl, to));
            }
        }
        out
    }

    fn assert_close(a: f64, b: f64, tol: f64) {
        assert!((a - b).abs() <= tol, "{a} != {b} (tol {tol})");
    }

    mod generate_mask_path {
        use super::*;

        mod unit {
            use super::*;

            #[test]
            fn circle_radius_for_1024() {
                let path = generate_mask_path(&spec(ShapeKind::Circle));
                assert_eq!(path.len(), 2);
                match path.segments()[0] {
                    PathSegment::Arc {
                        center,
                        radius,
                        start_angle,
                        end_angle,
                    } => {
                        assert_eq!(center, Point::ORIGIN);
                        assert_close(radius, 409.6, 1e-9);
                        assert_close(end_angle - start_angle, TAU, 1e-12);
                    }
                    other => panic!("unexpected segment {other:?}"),
                }
                assert_eq!(path.segments()[1], PathSegment::Close);
            }

            #[test]
            fn circle_ignores_corner_radius() {
                let plain = generate_mask_path(&spec(ShapeKind::Circle));
                let rounded = generate_mask_path(&spec(ShapeKind::Circle).with_corner_radius(80.0));
                assert_eq!(plain, rounded);
            }

            #[test]
            fn rectangle_16_9_dimensions() {
                let (w, h) = rectangle_size(1024, AspectRatio::Widescreen);
                assert_close(w, 972.8, 1e-9);
                assert_close(h, 547.2, 1e-9);
            }

            #[test]
            fn rectangle_other_ratios() {
                let (w, h) = rectangle_size(1024, AspectRatio::Standard);
                assert_close(h, w * 0.75, 1e-9);
                let (w, h) = rectangle_size(1024, AspectRatio::Square);
                assert_eq!(w, h);
            }

            #[test]
            fn sharp_rectangle_corners() {
                let path = generate_mask_path(&spec(ShapeKind::Rectangle));
                assert_eq!(path.len(), 5);
                assert_eq!(path.curve_count(), 0);
                let expected = [(-486.4, -273.6), (486.4, -273.6), (486.4, 273.6), (-486.4, 273.6)];
                for (segment, (x, y)) in path.segments().iter().zip(expected) {
                    match *segment {
                        PathSegment::MoveTo(p) | PathSegment::LineTo(p) => {
                            assert_close(p.x, x, 1e-9);
                            assert_close(p.y, y, 1e-9);
                        }
                        other => panic!("unexpected segment {other:?}"),
                    }
                }
                assert_eq!(path.segments()[4], PathSegment::Close);
            }

            #[test]
            fn rounded_rectangle_uses_half_corner_radius() {
                let path = generate_mask_path(&spec(ShapeKind::Rectangle).with_corner_radius(40.0));
                let radii: Vec<f64> = path
                    .segments()
                    .iter()
                    .filter_map(|s| match s {
                        PathSegment::Arc { radius, .. } => Some(*radius),
                        _ => None,
                    })
                    .collect();
                assert_eq!(radii, vec![20.0; 4]);
                let PathSegment::MoveTo(start) = path.segments()[0] else {
                    panic!("expected move");
                };
                assert_close(start.x, -466.4, 1e-9);
                assert_close(start.y, -273.6, 1e-9);
            }

            #[test]
            fn oversized_rectangle_radius_is_scaled_to_fit() {
                let s = spec(ShapeKind::Rectangle)
                    .with_aspect_ratio(AspectRatio::Widescreen)
                    .with_corner_radius(10_000.0);
                let path = generate_mask_path(&s);
                let (_, height) = rectangle_size(1024, AspectRatio::Widescreen);
                for segment in path.segments() {
                    if let PathSegment::Arc { radius, .. } = segment {
                        assert_close(*radius, height / 2.0, 1e-9);
                    }
                }
            }

            #[test]
            fn infinite_rectangle_radius_stays_finite() {
                let mut builder = PathBuilder::rotated(0.0);
                rounded_rect(&mut builder, Point::new(-50.0, -25.0), 100.0, 50.0, f64::INFINITY);
                let path = builder.finish();
                assert_eq!(path.len(), 10);
                for segment in path.segments() {
                    match *segment {
                        PathSegment::Arc { center, radius, .. } => {
                            assert_eq!(radius, 25.0);
                            assert!(center.is_finite());
                        }
                        PathSegment::MoveTo(p) | PathSegment::LineTo(p) => assert!(p.is_finite()),
                        _ => {}
                    }
                }
            }

            #[test]
            fn nan_rectangle_radius_gives_sharp_corners() {
                let mut builder = PathBuilder::rotated(0.0);
                rounded_rect(&mut builder, Point::new(-50.0, -25.0), 100.0, 50.0, f64::NAN);
                let path = builder.finish();
                assert_eq!(path.len(), 5);
                assert!(path.segments().iter().all(|s| !matches!(s, PathSegment::Arc { .. })));
            }

            #[test]
            fn infinite_corner_radius_still_renders() {
                let s = spec(ShapeKind::Rectangle)
                    .with_corner_radius(f64::INFINITY)
                    .with_canvas_size(64);
                let path = generate_mask_path(&s);
                assert!(!path.to_svg_path_data().contains("NaN"));
                let img = render_mask(&s, WHITE, 0.25);
                assert_eq!(img.get_pixel(32, 32)[3], 255);
            }

            #[test]
            fn polygon_sharp_matches_vertices_exactly() {
                let s = spec(ShapeKind::Polygon).with_vertex_count(6);
                let path = generate_mask_path(&s);
                let radius = 1024.0 * 0.4;
                let step = TAU / 6.0;
                let mut expected = vec![PathSegment::MoveTo(polar(radius, -FRAC_PI_2))];
                for i in 1..6 {
                    expected.push(PathSegment::LineTo(polar(
                        radius,
                        i as f64 * step - FRAC_PI_2,
                    )));
                }
                expected.push(PathSegment::Close);
                assert_eq!(path.segments(), expected.as_slice());
            }

            #[test]
            fn star_sharp_alternates_radii() {
                let s = spec(ShapeKind::Star).with_vertex_count(5);
                let path = generate_mask_path(&s);
                assert_eq!(path.curve_count(), 0);
                assert_eq!(path.len(), 11);
                let points: Vec<Point> = path
                    .segments()
                    .iter()
                    .filter_map(|s| match s {
                        PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(*p),
                        _ => None,
                    })
                    .collect();
                for (i, p) in points.iter().enumerate() {
                    let expected = if i % 2 == 0 { 409.6 } else { 204.8 };
                    assert_close(p.to_vec2().hypot(), expected, 1e-9);
                }
            }

            #[test]
            fn star_outer_radius_follows_fraction() {
                let s = spec(ShapeKind::Star).with_outer_radius_fraction(0.25);
                let path = generate_mask_path(&s);
                let PathSegment::MoveTo(top) = path.segments()[0] else {
                    panic!("expected move");
                };
                assert_close(top.y, -256.0, 1e-9);
            }

            #[test]
            fn rounded_polygon_emits_one_curve_per_vertex() {
                let s = spec(ShapeKind::Polygon)
                    .with_vertex_count(6)
                    .with_corner_radius(30.0);
                let path = generate_mask_path(&s);
                assert_eq!(path.curve_count(), 6);
                assert!(matches!(path.segments()[0], PathSegment::MoveTo(_)));
                assert_eq!(*path.segments().last().unwrap(), PathSegment::Close);
                for (entry, vertex, exit) in corners(&path) {
                    assert_close(entry.distance(vertex), 30.0, 1e-9);
                    assert_close(exit.distance(vertex), 30.0, 1e-9);
                }
            }

            #[test]
            fn polygon_rounding_limited_to_fifth_of_radius() {
                let s = spec(ShapeKind::Polygon)
                    .with_vertex_count(4)
                    .with_corner_radius(500.0);
                let path = generate_mask_path(&s);
                for (entry, vertex, _) in corners(&path) {
                    assert_close(entry.distance(vertex), 1024.0 * 0.4 * 0.2, 1e-9);
                }
            }

            #[test]
            fn star_rounding_limited_by_inner_radius() {
                let s = spec(ShapeKind::Star)
                    .with_vertex_count(5)
                    .with_corner_radius(500.0);
                let path = generate_mask_path(&s);
                assert_eq!(path.curve_count(), 10);
                let limit = 204.8 * 0.3;
                for (entry, vertex, exit) in corners(&path) {
                    assert!(entry.distance(vertex) <= limit + 1e-9);
                    assert!(exit.distance(vertex) <= limit + 1e-9);
                }
            }

            #[test]
            fn rotation_quarter_turn_moves_top_vertex_right() {
                let s = spec(ShapeKind::Polygon)
                    .with_vertex_count(3)
                    .with_rotation(90.0);
                let path = generate_mask_path(&s);
                let PathSegment::MoveTo(p) = path.segments()[0] else {
                    panic!("expected move");
                };
                assert_close(p.x, 409.6, 1e-9);
                assert_close(p.y, 0.0, 1e-9);
            }

            #[test]
            fn rotation_does_not_change_rounding_geometry() {
                let base = spec(ShapeKind::Star)
                    .with_vertex_count(7)
                    .with_corner_radius(12.0);
                let upright = corners(&generate_mask_path(&base));
                let turned = corners(&generate_mask_path(&base.with_rotation(37.0)));
                assert_eq!(upright.len(), turned.len());
                for ((e1, v1, x1), (e2, v2, x2)) in upright.into_iter().zip(turned) {
                    assert_close(e1.distance(v1), e2.distance(v2), 1e-9);
                    assert_close(x1.distance(v1), x2.distance(v2), 1e-9);
                    assert_close(v1.to_vec2().hypot(), v2.to_vec2().hypot(), 1e-9);
                }
            }

            #[test]
            fn fewer_than_three_vertices_fall_back_to_sharp() {
                for count in [0, 1, 2] {
                    for shape in [ShapeKind::Polygon, ShapeKind::Star] {
                        let s = spec(shape).with_vertex_count(count).with_corner_radius(25.0);
                        let path = generate_mask_path(&s);
                        assert_eq!(path.curve_count(), 0, "{shape} with {count} vertices");
                        let PathSegment::MoveTo(top) = path.segments()[0] else {
                            panic!("expected move");
                        };
                        assert!(top.x.is_finite() && top.y.is_finite());
                        assert_eq!(*path.segments().last().unwrap(), PathSegment::Close);
                    }
                }
            }

            #[test]
            fn identical_specs_give_identical_paths() {
                let s = spec(ShapeKind::Star)
                    .with_vertex_count(9)
                    .with_corner_radius(7.5)
                    .with_rotation(12.0);
                assert_eq!(generate_mask_path(&s), generate_mask_path(&s));
            }
        }

        mod prop {
            use super::*;
            use proptest::prelude::*;

            fn shape_strategy() -> impl Strategy<Value = ShapeKind> {
                prop_oneof![
                    Just(ShapeKind::Rectangle),
                    Just(ShapeKind::Circle),
                    Just(ShapeKind::Polygon),
                    Just(ShapeKind::Star),
                ]
            }

            proptest! {
                /// Zero corner radius never produces curves.
                #[test]
                fn zero_radius_is_sharp(
                    shape in shape_strategy(),
                    count in 3u32..32,
                    rotation in -720.0f64..720.0,
                    size in 16u32..4096,
                ) {
                    let s = ShapeSpec::new(shape)
                        .with_vertex_count(count)
                        .with_rotation(rotation)
                        .with_canvas_size(size);
                    let path = generate_mask_path(&s);
                    prop_assert_eq!(path.curve_count(), 0);
                    if matches!(shape, ShapeKind::Polygon | ShapeKind::Star) {
                        let expected = if shape == ShapeKind::Star { count * 2 } else { count };
                        // move + (n - 1) lines + close
                        prop_assert_eq!(path.len(), expected as usize + 1);
                    }
                }

                /// Rounding offsets never exceed the edge cap of either neighbouring edge.
                #[test]
                fn rounding_offset_respects_edge_cap(
                    star in proptest::bool::ANY,
                    count in 3u32..32,
                    corner in 0.01f64..2000.0,
                    rotation in -720.0f64..720.0,
                    size in 16u32..4096,
                ) {
                    let shape = if star { ShapeKind::Star } else { ShapeKind::Polygon };
                    let cap = if star { 0.3 } else { 0.4 };
                    let s = ShapeSpec::new(shape)
                        .with_vertex_count(count)
                        .with_corner_radius(corner)
                        .with_rotation(rotation)
                        .with_canvas_size(size);
                    let path = generate_mask_path(&s);
                    let corners = corners(&path);
                    let n = corners.len();
                    prop_assert_eq!(n, if star { count as usize * 2 } else { count as usize });

                    let eps = 1e-9 * size as f64;
                    for i in 0..n {
                        let (entry, vertex, exit) = corners[i];
                        let prev = corners[(i + n - 1) % n].1;
                        let next = corners[(i + 1) % n].1;
                        let shortest = prev.distance(vertex).min(vertex.distance(next));
                        prop_assert!(entry.distance(vertex) <= cap * shortest + eps);
                        prop_assert!(exit.distance(vertex) <= cap * shortest + eps);
                        prop_assert!(entry.distance(vertex) <= corner + eps);
                    }
                }

                /// The generator is a pure function of its input.
                #[test]
                fn deterministic(
                    shape in shape_strategy(),
                    count in 0u32..16,
                    corner in 0.0f64..200.0,
                    rotation in -360.0f64..360.0,
                ) {
                    let s = ShapeSpec::new(shape)
                        .with_vertex_count(count)
                        .with_corner_radius(corner)
                        .with_rotation(rotation);
                    prop_assert_eq!(generate_mask_path(&s), generate_mask_path(&s));
                }
            }
        }
    }

    mod render_mask {
        use super::*;

        mod unit {
            use super::*;

            #[test]
            fn canvas_matches_spec_size() {
                let s = spec(ShapeKind::Circle).with_canvas_size(64);
                let img = render_mask(&s, WHITE, 0.25);
                assert_eq!(img.dimensions(), (64, 64));
            }

            #[test]
            fn circle_fills_center_not_corners() {
                let img = render_mask(&spec(ShapeKind::Circle), WHITE, 0.25);
                assert_eq!(*img.get_pixel(512, 512), WHITE);
                assert_eq!(*img.get_pixel(512 + 400, 512), WHITE);
                assert_eq!(img.get_pixel(512 + 420, 512)[3], 0);
                assert_eq!(img.get_pixel(0, 0)[3], 0);
                assert_eq!(img.get_pixel(1023, 1023)[3], 0);
            }

            #[test]
            fn rectangle_height_follows_aspect_ratio() {
                let img = render_mask(&spec(ShapeKind::Rectangle), WHITE, 0.25);
                // half height is 273.6
                assert_eq!(img.get_pixel(512, 512 - 260)[3], 255);
                assert_eq!(img.get_pixel(512, 512 - 290)[3], 0);
                assert_eq!(img.get_pixel(512 + 480, 512)[3], 255);
                assert_eq!(img.get_pixel(512 + 500, 512)[3], 0);
            }

            #[test]
            fn star_leaves_gaps_between_points() {
                let s = spec(ShapeKind::Star).with_vertex_count(5).with_corner_radius(10.0);
                let img = render_mask(&s, WHITE, 0.25);
                // top point
                assert_eq!(img.get_pixel(512, 512 - 380)[3], 255);
                // between the two upper points, beyond the inner radius
                let angle = -FRAC_PI_2 + PI / 5.0;
                let p = polar(300.0, angle);
                let (x, y) = ((512.0 + p.x) as u32, (512.0 + p.y) as u32);
                assert_eq!(img.get_pixel(x, y)[3], 0);
            }

            #[test]
            fn uses_fill_color() {
                let fill = Rgba([10, 20, 30, 40]);
                let img = render_mask(&spec(ShapeKind::Circle).with_canvas_size(32), fill, 0.25);
                assert_eq!(*img.get_pixel(16, 16), fill);
            }

            #[test]
            fn tiny_canvas_does_not_panic() {
                for shape in [
                    ShapeKind::Rectangle,
                    ShapeKind::Circle,
                    ShapeKind::Polygon,
                    ShapeKind::Star,
                ] {
                    let img = render_mask(&spec(shape).with_canvas_size(1), WHITE, 0.25);
                    assert_eq!(img.dimensions(), (1, 1));
                }
            }

            #[test]
            fn repeated_renders_are_pixel_identical() {
                let s = spec(ShapeKind::Polygon)
                    .with_vertex_count(8)
                    .with_corner_radius(20.0)
                    .with_rotation(15.0)
                    .with_canvas_size(256);
                let a = render_mask(&s, WHITE, 0.25);
                let b = render_mask(&s, WHITE, 0.25);
                assert_eq!(a.as_raw(), b.as_raw());
            }
        }

        mod prop {
            use super::*;
            use proptest::prelude::*;

            proptest! {
                /// Any polygon or star renders without panicking and touches the centre.
                #[test]
                fn center_is_always_covered(
                    star in proptest::bool::ANY,
                    count in 3u32..24,
                    corner in 0.0f64..100.0,
                    rotation in -360.0f64..360.0,
                ) {
                    let shape = if star { ShapeKind::Star } else { ShapeKind::Polygon };
                    let s = ShapeSpec::new(shape)
                        .with_vertex_count(count)
                        .with_corner_radius(corner)
                        .with_rotation(rotation)
                        .with_canvas_size(128);
                    let img = render_mask(&s, WHITE, 0.25);
                    prop_assert_eq!(img.get_pixel(64, 64)[3], 255);
                }
            }
        }
    }

    mod to_pixel_polygon {
        use super::*;

        #[test]
        fn drops_duplicates_and_closing_point() {
            let contour = [
                Point::new(0.1, 0.1),
                Point::new(0.2, 0.2),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.4, -0.3),
            ];
            let polygon = to_pixel_polygon(&contour);
            assert_eq!(
                polygon,
                vec![
                    PixelPoint::new(0, 0),
                    PixelPoint::new(10, 0),
                    PixelPoint::new(10, 10),
                ]
            );
        }
    }

    mod alpha_channel {
        use super::*;

        #[test]
        fn copies_alpha_values() {
            let mut img = RgbaImage::new(2, 1);
            img.put_pixel(0, 0, Rgba([1, 2, 3, 0]));
            img.put_pixel(1, 0, Rgba([1, 2, 3, 200]));
            let alpha = alpha_channel(&img);
            assert_eq!(alpha.as_raw().as_slice(), &[0u8, 200]);
        }
    }
}
