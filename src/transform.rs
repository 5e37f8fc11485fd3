//! Affine Transformations
//!
//! A [Transform] maps `(x,y)` to
//!
//! ```text
//! x' = sx  * x + shx * y + tx
//! y' = shy * x + sy  * y + ty
//! ```
//!
//! Transforms are values; every operation returns a new Transform.
//!
//! Composition order: [combine]`(first, then)` applies `first` to a point,
//!   then `then`.  `a * b` and `a.then(&b)` mean the same thing.

use crate::curves::{Curve3, Curve4};
use crate::geom::Point;
use crate::path_storage::{Path, PathSegment, Vertex};
use crate::VertexSource;

use std::ops::Mul;

/// Transformation
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Transform {
    /// x scale (a)
    pub sx: f64,
    /// y shear (b)
    pub shy: f64,
    /// x shear (c)
    pub shx: f64,
    /// y scale (d)
    pub sy: f64,
    /// x translation (e)
    pub tx: f64,
    /// y translation (f)
    pub ty: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Identity Transform, (1,0,0,1,0,0)
    pub fn identity() -> Self {
        Self { sx: 1.0,  shy: 0.0,
               shx: 0.0, sy: 1.0,
               tx: 0.0,  ty: 0.0,
        }
    }
    /// Create a Transform from its six coefficients, (a,b,c,d,e,f) order
    pub fn from_row(sx: f64, shy: f64, shx: f64, sy: f64, tx: f64, ty: f64) -> Self {
        Self { sx, shy, shx, sy, tx, ty }
    }
    /// Scaling Transform
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::from_row(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }
    /// Translation Transform
    pub fn translate(tx: f64, ty: f64) -> Self {
        Self::from_row(1.0, 0.0, 0.0, 1.0, tx, ty)
    }
    /// Skew Transform, `kx` and `ky` are the shear factors
    pub fn skew(kx: f64, ky: f64) -> Self {
        Self::from_row(1.0, ky, kx, 1.0, 0.0, 0.0)
    }
    /// Rotation Transform about the origin
    ///
    /// angle is in radians; positive angles turn +x toward +y
    pub fn rotate(angle: f64) -> Self {
        let ca = angle.cos();
        let sa = angle.sin();
        Self::from_row(ca, sa, -sa, ca, 0.0, 0.0)
    }
    /// Rotation Transform about the point (`cx`,`cy`)
    pub fn rotate_at(angle: f64, cx: f64, cy: f64) -> Self {
        Self::translate(-cx, -cy)
            .then(&Self::rotate(angle))
            .then(&Self::translate(cx, cy))
    }

    /// Apply `self`, then `m`
    pub fn then(&self, m: &Transform) -> Self {
        let sx  = self.sx  * m.sx  + self.shy * m.shx;
        let shx = self.shx * m.sx  + self.sy  * m.shx;
        let tx  = self.tx  * m.sx  + self.ty  * m.shx + m.tx;
        let shy = self.sx  * m.shy + self.shy * m.sy;
        let sy  = self.shx * m.shy + self.sy  * m.sy;
        let ty  = self.tx  * m.shy + self.ty  * m.sy + m.ty;
        Transform { sx, shy, shx, sy, tx, ty }
    }
    /// Apply `m`, then `self`
    pub fn pre_then(&self, m: &Transform) -> Self {
        m.then(self)
    }

    /// Perform the transform
    pub fn map_point(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.sx  + y * self.shx + self.tx,
         x * self.shy + y * self.sy  + self.ty)
    }
    /// Transform a set of points in place
    pub fn map_points(&self, pts: &mut [Point]) {
        for p in pts.iter_mut() {
            let (x, y) = self.map_point(p.x, p.y);
            p.x = x;
            p.y = y;
        }
    }
    pub fn determinant(&self) -> f64 {
        self.sx * self.sy - self.shy * self.shx
    }
    /// Inverse Transform
    ///
    /// Returns None if the transform is singular or not finite
    pub fn invert(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let d   = 1.0 / det;
        let sx  =  self.sy  * d;
        let sy  =  self.sx  * d;
        let shy = -self.shy * d;
        let shx = -self.shx * d;
        let tx  = -self.tx * sx  - self.ty * shx;
        let ty  = -self.tx * shy - self.ty * sy;
        let t = Transform { sx, shy, shx, sy, tx, ty };
        if t.is_finite() { Some(t) } else { None }
    }
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
    /// All coefficients are neither NaN nor infinite
    pub fn is_finite(&self) -> bool {
        self.sx.is_finite() && self.shy.is_finite() &&
            self.shx.is_finite() && self.sy.is_finite() &&
            self.tx.is_finite() && self.ty.is_finite()
    }
}

/// Combine two Transforms: apply `first`, then `then`
///
///     use rasterfill::{combine, Transform};
///
///     let t = combine(Transform::scale(2.0, 2.0), Transform::scale(3.0, 1.5));
///     assert_eq!(t.sy, 3.0);
///
///     let t = combine(Transform::scale(2.0, 2.0), Transform::translate(1.0, 0.0));
///     assert_eq!(t.map_point(1.0, 1.0), (3.0, 2.0));
///
pub fn combine(first: Transform, then: Transform) -> Transform {
    first.then(&then)
}

/// `a * b` applies `a` first, then `b`
impl Mul<Transform> for Transform {
    type Output = Transform;
    fn mul(self, rhs: Transform) -> Self {
        self.then(&rhs)
    }
}

/// Path Transform
///
/// Maps a [Path] through a Transform and flattens its curves into
///   line segments in the transformed space
#[derive(Debug)]
pub struct ConvTransform<'a> {
    /// Source Path to Transform
    pub source: &'a Path,
    /// Transform to apply
    pub trans: Transform,
}

impl<'a> ConvTransform<'a> {
    /// Create a new Path Transform
    pub fn new(source: &'a Path, trans: Transform) -> Self {
        Self { source, trans }
    }
}

impl<'a> VertexSource for ConvTransform<'a> {
    /// Apply the Transform
    fn xconvert(&self) -> Vec<Vertex> {
        let mut out = Vec::with_capacity(self.source.len());
        let mut start = Point::default();
        let mut last = Point::default();
        for seg in self.source.segments() {
            match seg.map(&self.trans) {
                PathSegment::MoveTo(p) => {
                    out.push(Vertex::move_to(p));
                    start = p;
                    last = p;
                }
                PathSegment::LineTo(p) => {
                    out.push(Vertex::line_to(p));
                    last = p;
                }
                PathSegment::QuadTo(p1, p) => {
                    out.extend(Curve3::new(last, p1, p, 1.0).map(Vertex::line_to));
                    last = p;
                }
                PathSegment::CubicTo(p1, p2, p) => {
                    out.extend(Curve4::new(last, p1, p2, p, 1.0).map(Vertex::line_to));
                    last = p;
                }
                PathSegment::Close => {
                    out.push(Vertex::close_polygon(last));
                    last = start;
                }
            }
        }
        out
    }
}

impl VertexSource for Path {
    fn xconvert(&self) -> Vec<Vertex> {
        ConvTransform::new(self, Transform::identity()).xconvert()
    }
}
