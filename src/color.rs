//! Colors

use crate::math::multiply_u8;

/// Color as Red, Green, Blue, and Alpha, not premultiplied
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rgba8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Rgba8 {
    /// White Color (255,255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255,255)
    }
    /// Black Color (0,0,0,255)
    pub fn black() -> Self {
        Self::new(0,0,0,255)
    }
    /// Fully transparent Color (0,0,0,0)
    pub fn transparent() -> Self {
        Self::new(0,0,0,0)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8 { r, g, b, a }
    }
    /// Scale color components by alpha
    ///
    ///     use rasterfill::Rgba8;
    ///
    ///     let c = Rgba8::new(255, 0, 100, 128).premultiply();
    ///     assert_eq!((c.r, c.g, c.b, c.a), (128, 0, 50, 128));
    ///
    pub fn premultiply(&self) -> PremultipliedRgba8 {
        if self.a == 255 {
            return PremultipliedRgba8 { r: self.r, g: self.g, b: self.b, a: 255 };
        }
        PremultipliedRgba8 {
            r: multiply_u8(self.r, self.a),
            g: multiply_u8(self.g, self.a),
            b: multiply_u8(self.b, self.a),
            a: self.a,
        }
    }
}

/// Color as Red, Green, Blue, and Alpha with pre-multiplied components
///
/// Color components never exceed alpha
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct PremultipliedRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl PremultipliedRgba8 {
    /// Create from raw premultiplied components
    ///
    /// Color components are clamped to alpha
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r: r.min(a), g: g.min(a), b: b.min(a), a }
    }
    /// Undo the alpha scaling
    ///
    /// A fully transparent color returns transparent black
    pub fn demultiply(&self) -> Rgba8 {
        match self.a {
            0 => Rgba8::transparent(),
            255 => Rgba8::new(self.r, self.g, self.b, 255),
            a => {
                let div = |v: u8| {
                    let v = (u32::from(v) * 255 + u32::from(a) / 2) / u32::from(a);
                    v.min(255) as u8
                };
                Rgba8::new(div(self.r), div(self.g), div(self.b), a)
            }
        }
    }
}

impl From<PremultipliedRgba8> for Rgba8 {
    fn from(c: PremultipliedRgba8) -> Rgba8 {
        c.demultiply()
    }
}
impl From<Rgba8> for PremultipliedRgba8 {
    fn from(c: Rgba8) -> PremultipliedRgba8 {
        c.premultiply()
    }
}
