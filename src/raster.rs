//! Scanline polygon rasterizer
//!
//! Edges are collected in pixel space, then each pixel row is swept:
//!
//! - Anti-aliased: [SUBSCANLINES] sample lines per row.  On each, edge
//!   crossings are sorted by x and paired by the fill rule into interior
//!   spans, whose exact horizontal pixel overlap is accumulated.
//! - Aliased: one sample line through the pixel centers; a pixel is
//!   covered if its center lies inside a span.
//!
//! Accumulated coverage is converted to 0..=255 and emitted as a
//!   [ScanlineU8] for the renderer.
//!
//! Vertical coverage is point sampled.  Geometry thinner than the gap
//!   between two sample lines, such as a horizontal sliver covering
//!   `y` in `[0.3, 0.35)`, can fall between them and receive no coverage.

use crate::edge::EdgeList;
use crate::path_storage::PathCommand;
use crate::scan::ScanlineU8;

use crate::Rasterize;
use crate::VertexSource;

/// Sample lines per pixel row when anti-aliasing
pub const SUBSCANLINES: usize = 4;

/// Rule deciding which regions of a path are inside
#[derive(Debug,PartialEq,Eq,Copy,Clone)]
pub enum FillRule {
    /// Inside where the winding number is not zero
    NonZero,
    /// Inside where an odd number of edges is crossed
    EvenOdd,
}

impl Default for FillRule {
    fn default() -> FillRule {
        FillRule::EvenOdd
    }
}

impl FillRule {
    fn inside(self, winding: i32) -> bool {
        match self {
            FillRule::NonZero => winding != 0,
            FillRule::EvenOdd => winding % 2 != 0,
        }
    }
}

#[derive(Debug,PartialEq,Copy,Clone)]
pub enum PathStatus {
    Initial,
    Closed,
    MoveTo,
    LineTo
}

impl Default for PathStatus {
    fn default() -> PathStatus {
        PathStatus::Initial
    }
}

/// Scanline Rasterizer
///
/// Coverage is produced for pixels in `[0,width) x [0,height)` only
#[derive(Debug)]
pub struct RasterizerScanline {
    pub outline: EdgeList,
    pub status: PathStatus,
    /// Start of the current polygon
    x0: f64,
    y0: f64,
    /// Current point
    x: f64,
    y: f64,
    width: usize,
    height: usize,
    scan_y: i64,
    end_y: i64,
    next_edge: usize,
    active: Vec<usize>,
    crossings: Vec<(f64, i32)>,
    cover: Vec<f64>,
    filling_rule: FillRule,
    anti_alias: bool,
}

impl Rasterize for RasterizerScanline {
    fn add_path<VS: VertexSource>(&mut self, path: &VS) {
        for v in path.xconvert() {
            match v.cmd {
                PathCommand::MoveTo => self.move_to_d(v.x, v.y),
                PathCommand::LineTo => self.line_to_d(v.x, v.y),
                PathCommand::Close  => self.close_polygon(),
            }
        }
    }
    fn rewind_scanlines(&mut self) -> bool {
        self.close_polygon();
        if self.outline.dropped > 0 {
            log::warn!("dropped {} contours with non-finite coordinates", self.outline.dropped);
        }
        self.outline.sort_edges();
        if self.outline.total_edges() == 0 {
            return false;
        }
        let min_y = self.outline.min_y.floor().max(0.0);
        let max_y = self.outline.max_y.ceil().min(self.height as f64);
        if min_y >= max_y {
            return false;
        }
        self.scan_y = min_y as i64;
        self.end_y = max_y as i64;
        self.next_edge = 0;
        self.active.clear();
        log::trace!("sweep rows {}..{} over {} edges",
                    self.scan_y, self.end_y, self.outline.total_edges());
        true
    }
    fn sweep_scanline(&mut self, sl: &mut ScanlineU8) -> bool {
        while self.scan_y < self.end_y {
            let y = self.scan_y;
            self.scan_y += 1;
            sl.reset_spans();
            let (lo, hi) = self.accumulate_row(y as f64);
            for x in lo .. hi {
                let c = self.cover[x];
                self.cover[x] = 0.0;
                let alpha = (c.min(1.0) * 255.0).round() as u8;
                if alpha > 0 {
                    sl.add_cell(x as i64, alpha);
                }
            }
            if sl.num_spans() != 0 {
                sl.finalize(y);
                return true;
            }
        }
        false
    }
}

impl RasterizerScanline {
    /// Create a new rasterizer for a `width` x `height` pixel area
    pub fn new(width: usize, height: usize) -> Self {
        Self { outline: EdgeList::new(),
               status: PathStatus::Initial,
               x0: 0.0, y0: 0.0, x: 0.0, y: 0.0,
               width, height,
               scan_y: 0, end_y: 0, next_edge: 0,
               active: vec![],
               crossings: vec![],
               cover: vec![0.0; width],
               filling_rule: FillRule::default(),
               anti_alias: true,
        }
    }
    pub fn filling_rule(&mut self, rule: FillRule) {
        self.filling_rule = rule;
    }
    pub fn anti_alias(&mut self, aa: bool) {
        self.anti_alias = aa;
    }
    /// Start a new polygon, closing the current one
    pub fn move_to_d(&mut self, x: f64, y: f64) {
        self.close_polygon();
        self.x0 = x;
        self.y0 = y;
        self.x = x;
        self.y = y;
        self.status = PathStatus::MoveTo;
    }
    pub fn line_to_d(&mut self, x: f64, y: f64) {
        if self.status == PathStatus::Initial || self.status == PathStatus::Closed {
            // Polygon without a start; begin at this point
            self.move_to_d(x, y);
            return;
        }
        self.outline.line(self.x, self.y, x, y);
        self.x = x;
        self.y = y;
        self.status = PathStatus::LineTo;
    }
    /// Connect the current point back to the start of the polygon
    ///
    /// The polygon's edges are committed only if all of its vertices
    ///   were finite
    pub fn close_polygon(&mut self) {
        if self.status == PathStatus::LineTo {
            self.outline.line(self.x, self.y, self.x0, self.y0);
            self.x = self.x0;
            self.y = self.y0;
            self.status = PathStatus::Closed;
        }
        self.outline.close_contour();
    }

    /// Accumulate coverage of pixel row `y` into `self.cover`
    ///
    /// Returns the range of pixels touched
    fn accumulate_row(&mut self, y: f64) -> (usize, usize) {
        let mut lo = self.width;
        let mut hi = 0;
        let (samples, weight) = if self.anti_alias {
            (SUBSCANLINES, 1.0 / SUBSCANLINES as f64)
        } else {
            (1, 1.0)
        };
        for i in 0 .. samples {
            let sy = y + (i as f64 + 0.5) / samples as f64;
            self.update_active(sy);
            self.crossings.clear();
            for &k in &self.active {
                let e = &self.outline.edges[k];
                self.crossings.push((e.x_at(sy), e.dir));
            }
            self.crossings.sort_by(|a, b| {
                a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal)
            });
            let mut winding = 0;
            let mut start = 0.0;
            for &(x, dir) in &self.crossings {
                let was_inside = self.filling_rule.inside(winding);
                winding += dir;
                let inside = self.filling_rule.inside(winding);
                if !was_inside && inside {
                    start = x;
                } else if was_inside && !inside {
                    let touched = if self.anti_alias {
                        accumulate_span(&mut self.cover, start, x, weight)
                    } else {
                        accumulate_centers(&mut self.cover, start, x)
                    };
                    if let Some((a, b)) = touched {
                        lo = lo.min(a);
                        hi = hi.max(b);
                    }
                }
            }
        }
        if lo >= hi { (0, 0) } else { (lo, hi) }
    }

    /// Update the active edge list for the sample line at `sy`
    fn update_active(&mut self, sy: f64) {
        let edges = &self.outline.edges;
        while self.next_edge < edges.len() && edges[self.next_edge].y0 <= sy {
            self.active.push(self.next_edge);
            self.next_edge += 1;
        }
        self.active.retain(|&k| edges[k].crosses(sy));
    }
}

/// Add exact horizontal coverage of `[xa,xb)` scaled by `weight`
///
/// Returns the range of pixels touched
fn accumulate_span(cover: &mut [f64], xa: f64, xb: f64, weight: f64) -> Option<(usize, usize)> {
    let w = cover.len() as f64;
    let xa = xa.max(0.0).min(w);
    let xb = xb.max(0.0).min(w);
    if !(xb > xa) {
        return None;
    }
    let ia = xa.floor() as usize;
    let ib = xb.floor() as usize;
    if ia == ib {
        cover[ia] += (xb - xa) * weight;
        return Some((ia, ia + 1));
    }
    cover[ia] += ((ia + 1) as f64 - xa) * weight;
    for c in &mut cover[ia + 1 .. ib] {
        *c += weight;
    }
    if ib < cover.len() && xb > ib as f64 {
        cover[ib] += (xb - ib as f64) * weight;
        return Some((ia, ib + 1));
    }
    Some((ia, ib))
}

/// Fully cover pixels whose centers lie in `[xa,xb)`
fn accumulate_centers(cover: &mut [f64], xa: f64, xb: f64) -> Option<(usize, usize)> {
    let w = cover.len() as f64;
    let first = (xa - 0.5).ceil().max(0.0).min(w) as usize;
    let last = (xb - 0.5).ceil().max(0.0).min(w) as usize;
    if first >= last {
        return None;
    }
    for c in &mut cover[first .. last] {
        *c = 1.0;
    }
    Some((first, last))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_partial_pixels() {
        let mut cover = vec![0.0; 5];
        assert_eq!(accumulate_span(&mut cover, 0.5, 3.25, 1.0), Some((0, 4)));
        assert_eq!(cover, vec![0.5, 1.0, 1.0, 0.25, 0.0]);
    }

    #[test]
    fn span_within_one_pixel() {
        let mut cover = vec![0.0; 3];
        assert_eq!(accumulate_span(&mut cover, 1.25, 1.75, 0.5), Some((1, 2)));
        assert_eq!(cover, vec![0.0, 0.25, 0.0]);
    }

    #[test]
    fn span_clipped_to_row() {
        let mut cover = vec![0.0; 3];
        assert_eq!(accumulate_span(&mut cover, -10.0, 10.0, 1.0), Some((0, 3)));
        assert_eq!(cover, vec![1.0, 1.0, 1.0]);
        assert_eq!(accumulate_span(&mut cover, 5.0, 10.0, 1.0), None);
    }

    #[test]
    fn centers_inside_span() {
        let mut cover = vec![0.0; 5];
        assert_eq!(accumulate_centers(&mut cover, 0.6, 3.5), Some((1, 3)));
        assert_eq!(cover, vec![0.0, 1.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn even_odd_and_non_zero() {
        assert!(FillRule::EvenOdd.inside(1));
        assert!(!FillRule::EvenOdd.inside(2));
        assert!(FillRule::EvenOdd.inside(-1));
        assert!(FillRule::NonZero.inside(2));
        assert!(!FillRule::NonZero.inside(0));
    }
}
