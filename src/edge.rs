//! Polygon edge storage
//!
//! Edges are kept with `y0 < y1` and cover the half-open interval
//!   `[y0, y1)` vertically, so a vertex shared by two edges is crossed by
//!   exactly one of them.  Horizontal edges never cross a scanline and
//!   are not stored.
//!
//! Edges are collected one contour at a time and committed by
//!   [EdgeList::close_contour].  A contour with a NaN or infinite vertex,
//!   or an edge whose slope overflows, is discarded as a whole so that it
//!   cannot leave unpaired edges behind.

/// Non-horizontal polygon edge
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Edge {
    /// Top end, x
    pub x0: f64,
    /// Top end, y
    pub y0: f64,
    /// Bottom end, y
    pub y1: f64,
    /// Change in x per unit y
    pub dxdy: f64,
    /// +1 if the edge runs downward in the source path, -1 if upward
    pub dir: i32,
}

impl Edge {
    /// Create an edge between two points
    ///
    /// Returns None for horizontal or non-finite edges
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Option<Self> {
        if y0 == y1 {
            return None;
        }
        let (x0, y0, x1, y1, dir) = if y0 < y1 {
            (x0, y0, x1, y1, 1)
        } else {
            (x1, y1, x0, y0, -1)
        };
        let dxdy = (x1 - x0) / (y1 - y0);
        if !dxdy.is_finite() {
            return None;
        }
        Some(Edge { x0, y0, y1, dxdy, dir })
    }
    /// Edge crosses the horizontal line at `y`
    pub fn crosses(&self, y: f64) -> bool {
        self.y0 <= y && y < self.y1
    }
    /// x location at `y`
    pub fn x_at(&self, y: f64) -> f64 {
        self.x0 + (y - self.y0) * self.dxdy
    }
}

/// Collection of Edges of one or more polygons
#[derive(Debug)]
pub struct EdgeList {
    pub edges: Vec<Edge>,
    pub min_y: f64,
    pub max_y: f64,
    /// Contours discarded because of a non-finite vertex or slope
    pub dropped: usize,
    /// Edges of the contour being added
    contour: Vec<Edge>,
    contour_valid: bool,
    sorted: bool,
}

impl Default for EdgeList {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeList {
    pub fn new() -> Self {
        Self { edges: vec![],
               min_y: std::f64::INFINITY,
               max_y: std::f64::NEG_INFINITY,
               dropped: 0,
               contour: vec![],
               contour_valid: true,
               sorted: false,
        }
    }
    /// Committed edges; the open contour is not included
    pub fn total_edges(&self) -> usize {
        self.edges.len()
    }
    /// Add a line from (`x1`,`y1`) to (`x2`,`y2`) to the current contour
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        if !(x1.is_finite() && y1.is_finite() && x2.is_finite() && y2.is_finite()) {
            self.contour_valid = false;
            return;
        }
        if y1 == y2 {
            return;
        }
        match Edge::new(x1, y1, x2, y2) {
            Some(e) => self.contour.push(e),
            None => self.contour_valid = false,
        }
    }
    /// Commit the edges of the current contour, or discard all of them
    ///   if any were invalid
    pub fn close_contour(&mut self) {
        if self.contour_valid {
            for e in self.contour.drain(..) {
                self.min_y = self.min_y.min(e.y0);
                self.max_y = self.max_y.max(e.y1);
                self.edges.push(e);
                self.sorted = false;
            }
        } else {
            self.dropped += 1;
            self.contour.clear();
        }
        self.contour_valid = true;
    }
    /// Sort edges by their top y value
    pub fn sort_edges(&mut self) {
        if self.sorted {
            return;
        }
        self.edges.sort_by(|a, b| a.y0.partial_cmp(&b.y0).unwrap_or(std::cmp::Ordering::Equal));
        self.sorted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_edges_are_skipped() {
        let mut el = EdgeList::new();
        el.line(0.0, 5.0, 10.0, 5.0);
        el.close_contour();
        assert_eq!(el.total_edges(), 0);
        assert_eq!(el.dropped, 0);
    }

    #[test]
    fn non_finite_vertex_drops_whole_contour() {
        let mut el = EdgeList::new();
        el.line(0.0, 0.0, 10.0, 10.0);
        el.line(10.0, 10.0, std::f64::NAN, 5.0);
        el.line(std::f64::NAN, 5.0, 0.0, 0.0);
        assert_eq!(el.total_edges(), 0);
        el.close_contour();
        assert_eq!(el.total_edges(), 0);
        assert_eq!(el.dropped, 1);

        el.line(0.0, 0.0, 1.0, std::f64::INFINITY);
        el.close_contour();
        assert_eq!(el.dropped, 2);

        // Later contours are unaffected
        el.line(0.0, 0.0, 0.0, 10.0);
        el.line(0.0, 10.0, 5.0, 0.0);
        el.close_contour();
        assert_eq!(el.total_edges(), 2);
        assert_eq!((el.min_y, el.max_y), (0.0, 10.0));
    }

    #[test]
    fn slope_overflow_drops_contour() {
        let mut el = EdgeList::new();
        el.line(0.0, 0.0, 1e300, 1e-300);
        el.line(1e300, 1e-300, 0.0, 10.0);
        el.close_contour();
        assert_eq!(el.total_edges(), 0);
        assert_eq!(el.dropped, 1);
    }

    #[test]
    fn upward_edges_are_flipped() {
        let e = Edge::new(4.0, 10.0, 0.0, 0.0).unwrap();
        assert_eq!((e.x0, e.y0, e.y1, e.dir), (0.0, 0.0, 10.0, -1));
        assert_eq!(e.x_at(5.0), 2.0);
    }

    #[test]
    fn shared_vertex_crossed_once() {
        let a = Edge::new(0.0, 0.0, 0.0, 10.0).unwrap();
        let b = Edge::new(0.0, 10.0, 5.0, 20.0).unwrap();
        assert!(!a.crosses(10.0));
        assert!(b.crosses(10.0));
    }
}
