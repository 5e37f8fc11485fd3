//! Bezier curve flattening
//!
//! Quadratic and cubic curves are approximated by line segments using
//!   incremental forward differencing.  The number of steps follows the
//!   length of the control polygon: `len * 0.25 * scale`, at least
//!   [CURVE_MIN_STEPS] and at most [CURVE_MAX_STEPS].
//!
//! Both iterators yield the points after the start point, ending exactly
//!   on the curve's end point.

use crate::geom::Point;

/// Fewest line segments used for any curve
pub const CURVE_MIN_STEPS: usize = 4;
/// Most line segments used for any curve
pub const CURVE_MAX_STEPS: usize = 4096;

fn dist(a: Point, b: Point) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

fn num_steps(len: f64, scale: f64) -> usize {
    let n = (len * 0.25 * scale).round();
    if !n.is_finite() {
        return CURVE_MIN_STEPS;
    }
    (n as usize).max(CURVE_MIN_STEPS).min(CURVE_MAX_STEPS)
}

/// Quadratic Bezier curve, (p0, p1, p2)
#[derive(Debug,Clone)]
pub struct Curve3 {
    end: Point,
    step: usize,
    num_steps: usize,
    f: Point,
    df: Point,
    ddf: Point,
}

impl Curve3 {
    /// Create a flattening iterator for a quadratic curve
    ///
    /// `scale` is the approximation scale; 1.0 for pixel units
    pub fn new(p0: Point, p1: Point, p2: Point, scale: f64) -> Self {
        let num_steps = num_steps(dist(p0, p1) + dist(p1, p2), scale);
        let s  = 1.0 / num_steps as f64;
        let s2 = s * s;

        let tmpx = (p0.x - p1.x * 2.0 + p2.x) * s2;
        let tmpy = (p0.y - p1.y * 2.0 + p2.y) * s2;

        let df  = Point::new(tmpx + (p1.x - p0.x) * (2.0 * s),
                             tmpy + (p1.y - p0.y) * (2.0 * s));
        let ddf = Point::new(tmpx * 2.0, tmpy * 2.0);
        Self { end: p2, step: 0, num_steps, f: p0, df, ddf }
    }
}

impl Iterator for Curve3 {
    type Item = Point;
    fn next(&mut self) -> Option<Point> {
        if self.step >= self.num_steps {
            return None;
        }
        self.step += 1;
        if self.step == self.num_steps {
            return Some(self.end);
        }
        self.f.x  += self.df.x;
        self.f.y  += self.df.y;
        self.df.x += self.ddf.x;
        self.df.y += self.ddf.y;
        Some(self.f)
    }
}

/// Cubic Bezier curve, (p0, p1, p2, p3)
#[derive(Debug,Clone)]
pub struct Curve4 {
    end: Point,
    step: usize,
    num_steps: usize,
    f: Point,
    df: Point,
    ddf: Point,
    dddf: Point,
}

impl Curve4 {
    /// Create a flattening iterator for a cubic curve
    pub fn new(p0: Point, p1: Point, p2: Point, p3: Point, scale: f64) -> Self {
        let len = dist(p0, p1) + dist(p1, p2) + dist(p2, p3);
        let num_steps = num_steps(len, scale);

        let s  = 1.0 / num_steps as f64;
        let s2 = s * s;
        let s3 = s2 * s;

        let pre1 = 3.0 * s;
        let pre2 = 3.0 * s2;
        let pre4 = 6.0 * s2;
        let pre5 = 6.0 * s3;

        let tmp1x = p0.x - p1.x * 2.0 + p2.x;
        let tmp1y = p0.y - p1.y * 2.0 + p2.y;
        let tmp2x = (p1.x - p2.x) * 3.0 - p0.x + p3.x;
        let tmp2y = (p1.y - p2.y) * 3.0 - p0.y + p3.y;

        let df = Point::new((p1.x - p0.x) * pre1 + tmp1x * pre2 + tmp2x * s3,
                            (p1.y - p0.y) * pre1 + tmp1y * pre2 + tmp2y * s3);
        let ddf  = Point::new(tmp1x * pre4 + tmp2x * pre5,
                              tmp1y * pre4 + tmp2y * pre5);
        let dddf = Point::new(tmp2x * pre5, tmp2y * pre5);
        Self { end: p3, step: 0, num_steps, f: p0, df, ddf, dddf }
    }
}

impl Iterator for Curve4 {
    type Item = Point;
    fn next(&mut self) -> Option<Point> {
        if self.step >= self.num_steps {
            return None;
        }
        self.step += 1;
        if self.step == self.num_steps {
            return Some(self.end);
        }
        self.f.x   += self.df.x;
        self.f.y   += self.df.y;
        self.df.x  += self.ddf.x;
        self.df.y  += self.ddf.y;
        self.ddf.x += self.dddf.x;
        self.ddf.y += self.dddf.y;
        Some(self.f)
    }
}
