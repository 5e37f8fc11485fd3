//! Renderer

use crate::color::{PremultipliedRgba8, Rgba8};
use crate::pixmap::Pixmap;
use crate::scan::ScanlineU8;

use crate::Rasterize;
use crate::Render;

/// How a source color is combined with the pixels below it
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum BlendMode {
    /// Source drawn over the destination ("over" operator)
    SourceOver,
    /// Source replaces the destination, interpolated by coverage
    Source,
}

impl Default for BlendMode {
    fn default() -> Self {
        BlendMode::SourceOver
    }
}

/// Fill settings: color, blending and anti-aliasing
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Paint {
    /// Fill color, not premultiplied
    pub color: Rgba8,
    pub blend_mode: BlendMode,
    /// Fractional coverage on edges; if false, pixels are either
    ///   covered or not based on their center
    pub anti_alias: bool,
}

impl Default for Paint {
    fn default() -> Self {
        Self { color: Rgba8::black(),
               blend_mode: BlendMode::SourceOver,
               anti_alias: true,
        }
    }
}

impl Paint {
    /// Anti-aliased SourceOver paint of a single color
    pub fn solid(color: Rgba8) -> Self {
        Self { color, ..Default::default() }
    }
    pub fn set_color_rgba8(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.color = Rgba8::new(r, g, b, a);
    }
}

/// Solid color Renderer
#[derive(Debug)]
pub struct RenderingScanlineSolid<'a> {
    pub pixmap: &'a mut Pixmap,
    pub color: PremultipliedRgba8,
    pub blend_mode: BlendMode,
}

impl<'a> RenderingScanlineSolid<'a> {
    /// Create a new Renderer drawing into `pixmap`
    pub fn new(pixmap: &'a mut Pixmap, paint: &Paint) -> Self {
        Self { pixmap,
               color: paint.color.into(),
               blend_mode: paint.blend_mode,
        }
    }
}

impl<'a> Render for RenderingScanlineSolid<'a> {
    /// Render a single Scanline Row
    fn render(&mut self, sl: &ScanlineU8) {
        let y = sl.y;
        for span in &sl.spans {
            self.pixmap.blend_solid_hspan(span.x, y, span.len, self.color,
                                          &span.covers, self.blend_mode);
        }
    }
}

/// Render rasterized data to an image
pub fn render_scanlines<REN, RAS>(ras: &mut RAS,
                                  sl: &mut ScanlineU8,
                                  ren: &mut REN)
    where REN: Render,
          RAS: Rasterize
{
    if ras.rewind_scanlines() {
        while ras.sweep_scanline(sl) {
            log::trace!("render row {} with {} spans", sl.y, sl.num_spans());
            ren.render(sl);
        }
    }
}
