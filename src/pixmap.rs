//! Pixmap: an owned RGBA8 image
//!
//! Pixels are stored premultiplied, row-major, four bytes each.  Colors
//!   passed in and read back through [Pixmap::set_pixel], [Pixmap::fill]
//!   and the PNG functions are straight (not premultiplied).

use crate::buffer::RenderingBuffer;
use crate::color::{PremultipliedRgba8, Rgba8};
use crate::error::{Error, Result};
use crate::geom::Rect;
use crate::image_io;
use crate::math::{blend_source, blend_source_over};
use crate::path_storage::{Path, PathBuilder};
use crate::raster::{FillRule, RasterizerScanline};
use crate::render::{render_scanlines, BlendMode, Paint, RenderingScanlineSolid};
use crate::scan::ScanlineU8;
use crate::transform::{ConvTransform, Transform};

use crate::Rasterize;

use std::cmp::min;

/// Owned width x height RGBA8 image
#[derive(Debug,Clone,PartialEq)]
pub struct Pixmap {
    rbuf: RenderingBuffer,
}

impl Pixmap {
    /// Create a new, fully transparent Pixmap
    ///
    ///     use rasterfill::Pixmap;
    ///
    ///     let pix = Pixmap::new(200, 100).unwrap();
    ///     assert_eq!(pix.data().len(), 200 * 100 * 4);
    ///     assert!(Pixmap::new(0, 100).is_err());
    ///
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let rbuf = RenderingBuffer::new(width as usize, height as usize)
            .ok_or(Error::InvalidDimensions { width, height })?;
        Ok(Self { rbuf })
    }
    /// Create a Pixmap from straight RGBA8 data
    ///
    /// `data` must hold exactly `width * height * 4` bytes
    pub fn from_rgba8(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        let mut pix = Self::new(width, height)?;
        if data.len() != pix.rbuf.len() {
            return Err(Error::InvalidDimensions { width, height });
        }
        for (dst, src) in pix.rbuf.data.chunks_exact_mut(4).zip(data.chunks_exact(4)) {
            let c = Rgba8::new(src[0], src[1], src[2], src[3]).premultiply();
            dst.copy_from_slice(&[c.r, c.g, c.b, c.a]);
        }
        Ok(pix)
    }
    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.rbuf.width as u32
    }
    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.rbuf.height as u32
    }
    /// Premultiplied RGBA8 pixel data
    pub fn data(&self) -> &[u8] {
        &self.rbuf.data
    }
    /// Premultiplied color at (`x`,`y`), None outside of the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<PremultipliedRgba8> {
        let (x, y) = (x as usize, y as usize);
        if x >= self.rbuf.width || y >= self.rbuf.height {
            return None;
        }
        Some(self.get((x, y)))
    }
    /// Iterate over all pixels, row by row
    pub fn pixels(&self) -> impl Iterator<Item = PremultipliedRgba8> + '_ {
        self.rbuf.data.chunks_exact(4)
            .map(|p| PremultipliedRgba8 { r: p[0], g: p[1], b: p[2], a: p[3] })
    }
    /// Copies the color `c` to pixel at (`x`,`y`)
    ///
    /// Locations outside of the region are ignored
    pub fn set_pixel(&mut self, x: u32, y: u32, c: Rgba8) {
        let (x, y) = (x as usize, y as usize);
        if x >= self.rbuf.width || y >= self.rbuf.height {
            return;
        }
        self.set((x, y), c.premultiply());
    }
    /// Set every pixel to `c`
    pub fn fill(&mut self, c: Rgba8) {
        let c = c.premultiply();
        for p in self.rbuf.data.chunks_exact_mut(4) {
            p.copy_from_slice(&[c.r, c.g, c.b, c.a]);
        }
    }

    fn get(&self, id: (usize, usize)) -> PremultipliedRgba8 {
        let p = &self.rbuf[id];
        PremultipliedRgba8 { r: p[0], g: p[1], b: p[2], a: p[3] }
    }
    fn set(&mut self, id: (usize, usize), c: PremultipliedRgba8) {
        self.rbuf[id].copy_from_slice(&[c.r, c.g, c.b, c.a]);
    }
    fn blend_pix(&mut self, id: (usize, usize), c: PremultipliedRgba8, cover: u8, mode: BlendMode) {
        let p = self.get(id);
        let out = match mode {
            BlendMode::SourceOver => blend_source_over(p, c, cover),
            BlendMode::Source     => blend_source(p, c, cover),
        };
        self.set(id, out);
    }
    /// Blend `c` into `len` pixels starting at (`x`,`y`), one coverage
    ///   value per pixel
    ///
    /// Pixels outside of the image are ignored
    pub fn blend_solid_hspan(&mut self, x: i64, y: i64, len: i64,
                             c: PremultipliedRgba8, covers: &[u8], mode: BlendMode) {
        let (xmax, ymax) = (self.rbuf.width as i64 - 1, self.rbuf.height as i64 - 1);
        if y > ymax || y < 0 {
            return;
        }
        let (mut x, mut len, mut off) = (x, min(len, covers.len() as i64), 0);
        if x < 0 {
            len += x;
            if len <= 0 {
                return;
            }
            off -= x;
            x = 0;
        }
        if x + len - 1 > xmax {
            len = xmax - x + 1;
            if len <= 0 {
                return;
            }
        }
        let covers = &covers[off as usize .. (off + len) as usize];
        for (i, &cover) in covers.iter().enumerate() {
            if cover > 0 {
                self.blend_pix((x as usize + i, y as usize), c, cover, mode);
            }
        }
    }

    /// Fill a Path mapped through `transform`
    ///
    /// Coverage is computed for every pixel, then the paint color is
    ///   blended in with `paint.blend_mode`.  An empty path leaves the
    ///   Pixmap unchanged.
    ///
    ///     use rasterfill::{FillRule, Paint, PathBuilder, Pixmap, Rgba8, Transform};
    ///
    ///     let mut pb = PathBuilder::new();
    ///     pb.move_to(0.0, 0.0);
    ///     pb.line_to(10.0, 0.0).unwrap();
    ///     pb.line_to(10.0, 20.0).unwrap();
    ///     pb.line_to(0.0, 20.0).unwrap();
    ///     pb.close().unwrap();
    ///     let path = pb.finish();
    ///
    ///     let mut pix = Pixmap::new(200, 200).unwrap();
    ///     let red = Rgba8::new(255, 0, 0, 255);
    ///     pix.fill_path(&path, &Paint::solid(red), FillRule::EvenOdd, Transform::identity());
    ///     assert_eq!(pix.pixel(5, 5).unwrap().demultiply(), red);
    ///     assert_eq!(pix.pixel(15, 5).unwrap().a, 0);
    ///
    pub fn fill_path(&mut self, path: &Path, paint: &Paint, fill_rule: FillRule,
                     transform: Transform) {
        if path.is_empty() {
            return;
        }
        log::debug!("fill_path: {} verbs, bounds {:?}, {:?} {:?}",
                    path.len(), path.bounds(), fill_rule, paint.blend_mode);
        let mut ras = RasterizerScanline::new(self.rbuf.width, self.rbuf.height);
        ras.filling_rule(fill_rule);
        ras.anti_alias(paint.anti_alias);
        ras.add_path(&ConvTransform::new(path, transform));

        let mut sl = ScanlineU8::new();
        let mut ren = RenderingScanlineSolid::new(self, paint);
        render_scanlines(&mut ras, &mut sl, &mut ren);
    }
    /// Fill a Rectangle mapped through `transform`
    pub fn fill_rect(&mut self, rect: Rect, paint: &Paint, transform: Transform) {
        let path = PathBuilder::from_rect(rect);
        self.fill_path(&path, paint, FillRule::NonZero, transform);
    }

    /// Straight (not premultiplied) RGBA8 copy of the pixel data
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.rbuf.len());
        for p in self.pixels() {
            let c: Rgba8 = p.into();
            buf.extend_from_slice(&[c.r, c.g, c.b, c.a]);
        }
        buf
    }
    /// Premultiplied BGRA8 copy of the pixel data
    pub fn to_bgra8(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.rbuf.len());
        for p in self.pixels() {
            buf.extend_from_slice(&[p.b, p.g, p.r, p.a]);
        }
        buf
    }
    /// Encode as PNG bytes
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        image_io::write_memory(&self.to_rgba8(), self.width(), self.height())
    }
    /// Write to a PNG file
    pub fn save_png<P: AsRef<std::path::Path>>(&self, filename: P) -> Result<()> {
        let filename = filename.as_ref();
        log::debug!("saving {}x{} pixmap to {}", self.width(), self.height(), filename.display());
        image_io::write_file(&self.to_rgba8(), self.width(), self.height(), filename)
    }
    /// Read a PNG file
    pub fn load_png<P: AsRef<std::path::Path>>(filename: P) -> Result<Self> {
        let (data, w, h) = image_io::read_file(filename)?;
        Self::from_rgba8(w, h, &data)
    }
    /// Decode PNG bytes
    pub fn decode_png(bytes: &[u8]) -> Result<Self> {
        let (data, w, h) = image_io::read_memory(bytes)?;
        Self::from_rgba8(w, h, &data)
    }
}
