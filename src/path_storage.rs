//! Paths and Path Building
//!
//! A [PathBuilder] accumulates segments and enforces their order; finishing
//!   it yields an immutable [Path].
//!
//!     use rasterfill::PathBuilder;
//!
//!     let mut pb = PathBuilder::new();
//!     pb.move_to(0.0, 0.0);
//!     pb.line_to(10.0, 0.0).unwrap();
//!     pb.line_to(10.0, 20.0).unwrap();
//!     pb.line_to(0.0, 20.0).unwrap();
//!     pb.close().unwrap();
//!     let path = pb.finish();
//!     assert_eq!(path.len(), 5);
//!

use crate::error::{Error, Result};
use crate::geom::{Bounds, Point, Rect};
use crate::transform::Transform;

/// Quarter circle cubic approximation constant, 4/3 * (sqrt(2) - 1)
const KAPPA: f64 = 0.552_284_749_8;

/// Path segment, one verb with its points
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    /// Quadratic curve: control point, end point
    QuadTo(Point, Point),
    /// Cubic curve: two control points, end point
    CubicTo(Point, Point, Point),
    Close,
}

impl PathSegment {
    pub(crate) fn map(&self, ts: &Transform) -> PathSegment {
        let m = |p: &Point| {
            let (x, y) = ts.map_point(p.x, p.y);
            Point::new(x, y)
        };
        match self {
            PathSegment::MoveTo(p) => PathSegment::MoveTo(m(p)),
            PathSegment::LineTo(p) => PathSegment::LineTo(m(p)),
            PathSegment::QuadTo(p1, p) => PathSegment::QuadTo(m(p1), m(p)),
            PathSegment::CubicTo(p1, p2, p) => PathSegment::CubicTo(m(p1), m(p2), m(p)),
            PathSegment::Close => PathSegment::Close,
        }
    }
}

/// Subpath state of a [PathBuilder]
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum BuilderState {
    /// No subpath has been started
    Empty,
    /// A subpath is open and accepts segments
    InSubpath,
    /// The last subpath was closed; only `move_to` is accepted
    Closed,
}

/// Mutable accumulator of path segments
#[derive(Debug,Clone)]
pub struct PathBuilder {
    segments: Vec<PathSegment>,
    state: BuilderState,
    start: Point,
    current: Point,
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathBuilder {
    /// Create a new, empty builder
    pub fn new() -> Self {
        Self { segments: vec![],
               state: BuilderState::Empty,
               start: Point::default(),
               current: Point::default(),
        }
    }
    /// Current subpath state
    pub fn state(&self) -> BuilderState {
        self.state
    }
    /// Number of segments added so far
    pub fn len(&self) -> usize {
        self.segments.len()
    }
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
    /// End point of the last segment, None before the first `move_to`
    pub fn current_point(&self) -> Option<Point> {
        match self.state {
            BuilderState::Empty => None,
            _ => Some(self.current),
        }
    }
    /// Start a new subpath at (`x`,`y`)
    pub fn move_to(&mut self, x: f64, y: f64) {
        let p = Point::new(x, y);
        self.segments.push(PathSegment::MoveTo(p));
        self.start = p;
        self.current = p;
        self.state = BuilderState::InSubpath;
    }
    fn require_open(&self, verb: &'static str) -> Result<()> {
        match self.state {
            BuilderState::InSubpath => Ok(()),
            BuilderState::Empty | BuilderState::Closed => {
                Err(Error::NoOpenSubpath { verb })
            }
        }
    }
    /// Add a line from the current point to (`x`,`y`)
    pub fn line_to(&mut self, x: f64, y: f64) -> Result<()> {
        self.require_open("line_to")?;
        let p = Point::new(x, y);
        self.segments.push(PathSegment::LineTo(p));
        self.current = p;
        Ok(())
    }
    /// Add a quadratic curve with control point (`x1`,`y1`) ending at (`x`,`y`)
    pub fn quad_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) -> Result<()> {
        self.require_open("quad_to")?;
        let p = Point::new(x, y);
        self.segments.push(PathSegment::QuadTo(Point::new(x1, y1), p));
        self.current = p;
        Ok(())
    }
    /// Add a cubic curve with control points (`x1`,`y1`), (`x2`,`y2`)
    ///   ending at (`x`,`y`)
    pub fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> Result<()> {
        self.require_open("cubic_to")?;
        let p = Point::new(x, y);
        self.segments.push(PathSegment::CubicTo(Point::new(x1, y1),
                                                Point::new(x2, y2), p));
        self.current = p;
        Ok(())
    }
    /// Close the current subpath back to its start point
    pub fn close(&mut self) -> Result<()> {
        self.require_open("close")?;
        self.segments.push(PathSegment::Close);
        self.current = self.start;
        self.state = BuilderState::Closed;
        Ok(())
    }
    /// Add a closed rectangle as its own subpath
    pub fn push_rect(&mut self, rect: Rect) {
        self.move_to(rect.left(), rect.top());
        self.segments.push(PathSegment::LineTo(Point::new(rect.right(), rect.top())));
        self.segments.push(PathSegment::LineTo(Point::new(rect.right(), rect.bottom())));
        self.segments.push(PathSegment::LineTo(Point::new(rect.left(), rect.bottom())));
        self.segments.push(PathSegment::Close);
        self.state = BuilderState::Closed;
    }
    /// Add a closed rectangle with elliptical corners as its own subpath
    ///
    /// Radii are limited to half the width and height; zero radii
    ///   produce a plain rectangle.
    pub fn push_rounded_rect(&mut self, rect: Rect, rx: f64, ry: f64) {
        let rx = rx.max(0.0).min(rect.width() / 2.0);
        let ry = ry.max(0.0).min(rect.height() / 2.0);
        if rx == 0.0 || ry == 0.0 {
            self.push_rect(rect);
            return;
        }
        let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
        let (kx, ky) = (rx * KAPPA, ry * KAPPA);
        let p = Point::new;
        self.move_to(l + rx, t);
        self.segments.extend_from_slice(&[
            PathSegment::LineTo(p(r - rx, t)),
            PathSegment::CubicTo(p(r - rx + kx, t), p(r, t + ry - ky), p(r, t + ry)),
            PathSegment::LineTo(p(r, b - ry)),
            PathSegment::CubicTo(p(r, b - ry + ky), p(r - rx + kx, b), p(r - rx, b)),
            PathSegment::LineTo(p(l + rx, b)),
            PathSegment::CubicTo(p(l + rx - kx, b), p(l, b - ry + ky), p(l, b - ry)),
            PathSegment::LineTo(p(l, t + ry)),
            PathSegment::CubicTo(p(l, t + ry - ky), p(l + rx - kx, t), p(l + rx, t)),
            PathSegment::Close,
        ]);
        self.current = self.start;
        self.state = BuilderState::Closed;
    }
    /// Rectangle as a finished Path
    pub fn from_rect(rect: Rect) -> Path {
        let mut pb = PathBuilder::new();
        pb.push_rect(rect);
        pb.finish()
    }
    /// Consume the builder, producing an immutable Path
    ///
    /// An empty builder produces an empty Path
    pub fn finish(self) -> Path {
        log::debug!("path finished with {} segments", self.segments.len());
        Path { segments: self.segments }
    }
}

/// Immutable sequence of path segments
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Number of verbs (moves, lines, curves and closes)
    pub fn len(&self) -> usize {
        self.segments.len()
    }
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
    /// Rectangle with elliptical corners
    pub fn rounded_rect(rect: Rect, rx: f64, ry: f64) -> Path {
        let mut pb = PathBuilder::new();
        pb.push_rounded_rect(rect, rx, ry);
        pb.finish()
    }
    /// Bounds of all points, control points included
    ///
    /// None for a Path without points
    pub fn bounds(&self) -> Option<Bounds> {
        fn grow(bounds: Option<Bounds>, p: Point) -> Option<Bounds> {
            match bounds {
                Some(mut b) => { b.expand(p); Some(b) }
                None => Some(Bounds::at(p)),
            }
        }
        let mut bounds = None;
        for seg in &self.segments {
            bounds = match *seg {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => grow(bounds, p),
                PathSegment::QuadTo(p1, p) => grow(grow(bounds, p1), p),
                PathSegment::CubicTo(p1, p2, p) => grow(grow(grow(bounds, p1), p2), p),
                PathSegment::Close => bounds,
            };
        }
        bounds
    }
    /// New Path with every point mapped through `ts`
    pub fn transform(&self, ts: &Transform) -> Path {
        Path { segments: self.segments.iter().map(|s| s.map(ts)).collect() }
    }
}

/// Command of a flattened vertex
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum PathCommand {
    MoveTo,
    LineTo,
    Close,
}

/// Flattened path vertex
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub cmd: PathCommand
}

impl Vertex {
    pub fn new(x: f64, y: f64, cmd: PathCommand) -> Self {
        Self { x, y, cmd }
    }
    pub fn move_to(p: Point) -> Self {
        Self::new(p.x, p.y, PathCommand::MoveTo)
    }
    pub fn line_to(p: Point) -> Self {
        Self::new(p.x, p.y, PathCommand::LineTo)
    }
    pub fn close_polygon(p: Point) -> Self {
        Self::new(p.x, p.y, PathCommand::Close)
    }
}
