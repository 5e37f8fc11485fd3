//! Fixed point color arithmetic

use crate::color::PremultipliedRgba8;

/// Interpolate a value between two end points using fixed point math
///
/// Returns `p + (q - p) * a / 255`, rounded
///
/// See agg_color_rgba.h:454 of agg version 2.4
///
pub fn lerp_u8(p: u8, q: u8, a: u8) -> u8 {
    let base_shift = 8;
    let base_msb = 1 << (base_shift - 1);
    let v = if p > q { 1 } else { 0 };
    let (q,p,a) = (i32::from(q), i32::from(p), i32::from(a));
    let t0 : i32  = (q - p) * a + base_msb - v; // Signed multiplication
    let t1 : i32 = ((t0>>base_shift) + t0) >> base_shift;
    (p + t1) as u8
}

/// Interpolate toward a premultiplied value
///
/// Returns `p + q - p * a / 255`, saturated to 255
pub fn prelerp_u8(p: u8, q: u8, a: u8) -> u8 {
    let v = i32::from(p) + i32::from(q) - i32::from(multiply_u8(p, a));
    v.max(0).min(255) as u8
}

/// Multiply two u8 values using fixed point math
///
/// Returns `a * b / 255`, rounded
///
/// See agg_color_rgba.h:395
pub fn multiply_u8(a: u8, b: u8) -> u8 {
    let base_shift = 8;
    let base_msb = 1 << (base_shift - 1);
    let (a,b) = (u32::from(a), u32::from(b));
    let t : u32  = a * b + base_msb;
    let tt : u32 = ((t >> base_shift) + t) >> base_shift;
    tt as u8
}

/// Composite `src` over `dst` with a coverage value
///
/// Both colors are premultiplied. The source is scaled by `cover`, then
///
/// ```text
/// out = src' + dst * (1 - alpha(src'))
/// ```
///
/// see [Alpha Compositing](https://en.wikipedia.org/wiki/Alpha_compositing)
pub fn blend_source_over(dst: PremultipliedRgba8, src: PremultipliedRgba8, cover: u8)
                         -> PremultipliedRgba8 {
    let (r, g, b, a) = if cover == 255 {
        (src.r, src.g, src.b, src.a)
    } else {
        (multiply_u8(src.r, cover), multiply_u8(src.g, cover),
         multiply_u8(src.b, cover), multiply_u8(src.a, cover))
    };
    if a == 255 {
        return PremultipliedRgba8::new(r, g, b, a);
    }
    PremultipliedRgba8::new(prelerp_u8(dst.r, r, a),
                            prelerp_u8(dst.g, g, a),
                            prelerp_u8(dst.b, b, a),
                            prelerp_u8(dst.a, a, a))
}

/// Replace `dst` by `src`, interpolated by coverage
///
/// Both colors are premultiplied
pub fn blend_source(dst: PremultipliedRgba8, src: PremultipliedRgba8, cover: u8)
                    -> PremultipliedRgba8 {
    if cover == 255 {
        return src;
    }
    PremultipliedRgba8::new(lerp_u8(dst.r, src.r, cover),
                            lerp_u8(dst.g, src.g, cover),
                            lerp_u8(dst.b, src.b, cover),
                            lerp_u8(dst.a, src.a, cover))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiply_endpoints() {
        assert_eq!(multiply_u8(255, 255), 255);
        assert_eq!(multiply_u8(255, 0), 0);
        assert_eq!(multiply_u8(255, 77), 77);
        assert_eq!(multiply_u8(128, 128), 64);
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp_u8(10, 200, 0), 10);
        assert_eq!(lerp_u8(10, 200, 255), 200);
        assert_eq!(lerp_u8(200, 10, 255), 10);
    }

    #[test]
    fn source_over_opaque_replaces() {
        let dst = PremultipliedRgba8::new(0, 0, 255, 255);
        let src = PremultipliedRgba8::new(255, 0, 0, 255);
        assert_eq!(blend_source_over(dst, src, 255), src);
    }

    #[test]
    fn source_over_zero_cover_keeps_dst() {
        let dst = PremultipliedRgba8::new(10, 20, 30, 40);
        let src = PremultipliedRgba8::new(255, 0, 0, 255);
        assert_eq!(blend_source_over(dst, src, 0), dst);
    }

    #[test]
    fn source_over_half_on_transparent() {
        let dst = PremultipliedRgba8::default();
        let src = PremultipliedRgba8::new(255, 0, 0, 255);
        assert_eq!(blend_source_over(dst, src, 128), PremultipliedRgba8::new(128, 0, 0, 128));
    }

    #[test]
    fn source_copies_transparent() {
        let dst = PremultipliedRgba8::new(255, 255, 255, 255);
        let src = PremultipliedRgba8::default();
        assert_eq!(blend_source(dst, src, 255), src);
    }
}
