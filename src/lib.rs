//! Anti-aliased filling of 2D paths into RGBA pixmaps
//!
//! ## Quick Start
//!
//!     use rasterfill::{combine, FillRule, Paint, PathBuilder, Pixmap, Rgba8, Transform};
//!
//!     // Create a 200x200 transparent image
//!     let mut pix = Pixmap::new(200, 200).unwrap();
//!
//!     // Triangle (10,10) - (50,90) - (90,10)
//!     let mut pb = PathBuilder::new();
//!     pb.move_to(10.0, 10.0);
//!     pb.line_to(50.0, 90.0).unwrap();
//!     pb.line_to(90.0, 10.0).unwrap();
//!     pb.close().unwrap();
//!     let path = pb.finish();
//!     assert_eq!(path.len(), 4);
//!
//!     // Scale by 2, then move right by 5
//!     let ts = combine(Transform::scale(2.0, 2.0), Transform::translate(5.0, 0.0));
//!     let paint = Paint::solid(Rgba8::new(0, 0, 0, 255));
//!     pix.fill_path(&path, &paint, FillRule::NonZero, ts);
//!     assert_eq!(pix.pixel(105, 40).unwrap().a, 255);
//!
//!     // pix.save_png("little_black_triangle.png").unwrap();
//!
//! ## How does this work
//!
//! ```text
//!  ren = RenderingScanlineSolid( Pixmap )
//!  ras = RasterizerScanline()
//!  sl  = ScanlineU8()
//!  Raster Operations
//!    add_path( ConvTransform(path, transform) )
//!      xconvert()       -- map points, flatten curves
//!      move_to_d()
//!      line_to_d()
//!        outline.line() -- edges in pixel space, [y0,y1)
//!      close_polygon()
//!    Output: Edges with direction
//!  Render to Image
//!   render_scanlines(ras, sl, ren)
//!     rewind_scanlines
//!       close_polygon()
//!       sort_edges()
//!     sweep_scanline()  -- sub-scanline crossings, fill rule, coverage
//!       render - Individual horizontal (y) lines
//!         blend_solid_hspan
//!           blend_pix   -- SourceOver / Source, premultiplied
//! ```

pub mod error;
pub mod geom;
pub mod transform;
pub mod curves;
pub mod path_storage;
pub mod color;
pub mod math;
pub mod buffer;
pub mod edge;
pub mod scan;
pub mod raster;
pub mod render;
pub mod pixmap;
pub mod image_io;

pub use crate::error::*;
pub use crate::geom::*;
pub use crate::transform::*;
pub use crate::curves::*;
pub use crate::path_storage::*;
pub use crate::color::*;
pub use crate::math::*;
pub use crate::buffer::*;
pub use crate::edge::*;
pub use crate::scan::*;
pub use crate::raster::*;
pub use crate::render::*;
pub use crate::pixmap::*;

/// Source of flattened vertices: move, line and close commands only
pub trait VertexSource {
    fn xconvert(&self) -> Vec<Vertex>;
}

/// Conversion of vertices to scanlines
pub trait Rasterize {
    /// Add the vertices of `path` as polygons
    fn add_path<VS: VertexSource>(&mut self, path: &VS);
    /// Prepare for sweeping; false if there is nothing to render
    fn rewind_scanlines(&mut self) -> bool;
    /// Fill `sl` with the next row that has coverage; false when done
    fn sweep_scanline(&mut self, sl: &mut ScanlineU8) -> bool;
}

/// Drawing of scanlines into an image
pub trait Render {
    /// Render a single Scanline Row
    fn render(&mut self, sl: &ScanlineU8);
}
