//! Points and Rectangles

use crate::error::{Error, Result};

/// Location in 2D space
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new Point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle
///
/// Always satisfies `left < right` and `top < bottom` with finite bounds
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Rect {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl Rect {
    /// Create a Rectangle from its left, top, right and bottom edges
    ///
    ///     use rasterfill::Rect;
    ///
    ///     let r = Rect::from_ltrb(0.0, 0.0, 10.0, 20.0).unwrap();
    ///     assert_eq!(r.width(), 10.0);
    ///     assert!(Rect::from_ltrb(10.0, 0.0, 0.0, 20.0).is_err());
    ///
    pub fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Result<Self> {
        let finite = left.is_finite() && top.is_finite()
            && right.is_finite() && bottom.is_finite();
        if !finite || left >= right || top >= bottom {
            return Err(Error::InvalidRect { left, top, right, bottom });
        }
        Ok(Self { left, top, right, bottom })
    }
    /// Create a Rectangle from an origin and a size
    pub fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Result<Self> {
        Self::from_ltrb(x, y, x + w, y + h)
    }
    pub fn left(&self) -> f64 { self.left }
    pub fn top(&self) -> f64 { self.top }
    pub fn right(&self) -> f64 { self.right }
    pub fn bottom(&self) -> f64 { self.bottom }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
}

/// Bounding box accumulator
///
/// Unlike [Rect] it may be degenerate (a single point or a line)
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Bounds {
    /// Minimum x value
    pub x1: f64,
    /// Minimum y value
    pub y1: f64,
    /// Maximum x value
    pub x2: f64,
    /// Maximum y value
    pub y2: f64,
}

impl Bounds {
    /// Bounds containing only `p`
    pub fn at(p: Point) -> Self {
        Self { x1: p.x, y1: p.y, x2: p.x, y2: p.y }
    }
    /// Expand if the point (x,y) is outside
    pub fn expand(&mut self, p: Point) {
        if p.x < self.x1 { self.x1 = p.x; }
        if p.x > self.x2 { self.x2 = p.x; }
        if p.y < self.y1 { self.y1 = p.y; }
        if p.y > self.y2 { self.y2 = p.y; }
    }
}
