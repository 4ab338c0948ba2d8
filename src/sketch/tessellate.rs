//! Decoding TrueType quadratic contours into path commands, and flattening
//! those paths into polygon rings.

use crate::float_types::{Real, tolerance};
use crate::sketch::{Contour, ContourPoint, PathCommand};
use nalgebra::Point2;

#[inline]
fn midpoint(a: &ContourPoint, b: &ContourPoint) -> Point2<Real> {
    Point2::new((a.x + b.x) * 0.5, (a.y + b.y) * 0.5)
}

/// Decode one contour into a closed path.
///
/// Two consecutive off-curve points imply an on-curve point halfway between
/// them. The walk uses a circular `(prev, curr, next)` window and starts on the
/// last point if it is on-curve, else on the first point if that one is,
/// else on the implied midpoint between last and first.
///
/// The anchor of the final drawing command always coincides with the
/// `MoveTo` anchor, so the trailing `Close` adds no visible segment.
pub fn contour_to_path(contour: &Contour) -> Vec<PathCommand> {
    let points = &contour.points;
    let n = points.len();
    if n == 0 {
        return Vec::new();
    }

    let mut commands = Vec::with_capacity(n + 2);

    let mut curr = points[n - 1];
    let mut next = points[0];

    let start = if curr.on_curve {
        curr.position()
    } else if next.on_curve {
        next.position()
    } else {
        midpoint(&curr, &next)
    };
    commands.push(PathCommand::MoveTo(start));

    for i in 0..n {
        let prev = curr;
        curr = next;
        next = points[(i + 1) % n];

        if curr.on_curve {
            commands.push(PathCommand::LineTo(curr.position()));
            continue;
        }

        if !prev.on_curve {
            commands.push(PathCommand::LineTo(midpoint(&prev, &curr)));
        }
        let to = if next.on_curve {
            next.position()
        } else {
            midpoint(&curr, &next)
        };
        commands.push(PathCommand::QuadTo {
            ctrl: curr.position(),
            to,
        });
    }

    commands.push(PathCommand::Close);
    commands
}

/// Sample a quadratic Bézier at `t`.
#[inline]
fn quad_point(from: Point2<Real>, ctrl: Point2<Real>, to: Point2<Real>, t: Real) -> Point2<Real> {
    let mt = 1.0 - t;
    Point2::from(from.coords * (mt * mt) + ctrl.coords * (2.0 * mt * t) + to.coords * (t * t))
}

/// Flatten a closed path into a polygon ring.
///
/// Each quadratic segment is split into `curve_segments` straight pieces.
/// Consecutive points closer than [`tolerance`] are merged and the closing
/// duplicate of the first point is dropped, so the ring is implicitly closed.
pub fn flatten(commands: &[PathCommand], curve_segments: usize) -> Vec<Point2<Real>> {
    let segments = curve_segments.max(1);
    let eps = tolerance();
    let mut ring: Vec<Point2<Real>> = Vec::new();

    let push = |ring: &mut Vec<Point2<Real>>, p: Point2<Real>| {
        if ring.last().is_none_or(|last| (p - last).norm() > eps) {
            ring.push(p);
        }
    };

    let mut pen: Option<Point2<Real>> = None;
    for command in commands {
        match *command {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => push(&mut ring, p),
            PathCommand::QuadTo { ctrl, to } => {
                let from = pen.unwrap_or(ctrl);
                for i in 1..segments {
                    let t = i as Real / segments as Real;
                    push(&mut ring, quad_point(from, ctrl, to, t));
                }
                push(&mut ring, to);
            },
            PathCommand::Close => {},
        }
        if let Some(p) = command.end_point() {
            pen = Some(p);
        }
    }

    while ring.len() > 1 {
        let (first, last) = (ring[0], ring[ring.len() - 1]);
        if (last - first).norm() > eps {
            break;
        }
        ring.pop();
    }
    ring
}
