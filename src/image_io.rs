//! Reading and writing of PNG files
//!
//! Buffers passed in and out are straight (not premultiplied) RGBA8,
//!   row-major, four bytes per pixel.

use crate::error::Result;

use image::{ExtendedColorType, ImageEncoder, ImageFormat};

use std::path::Path;

/// Read any PNG file as RGBA8, returning the data, width and height
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>, u32, u32)> {
    let img = image::open(filename)?.to_rgba8();
    let (w, h) = img.dimensions();
    Ok((img.into_raw(), w, h))
}

/// Decode PNG bytes as RGBA8, returning the data, width and height
pub fn read_memory(bytes: &[u8]) -> Result<(Vec<u8>, u32, u32)> {
    let img = image::load_from_memory_with_format(bytes, ImageFormat::Png)?.to_rgba8();
    let (w, h) = img.dimensions();
    Ok((img.into_raw(), w, h))
}

/// Write an RGBA8 buffer to a PNG file
pub fn write_file<P: AsRef<Path>>(buf: &[u8], width: u32, height: u32, filename: P) -> Result<()> {
    image::save_buffer_with_format(filename, buf, width, height,
                                   ExtendedColorType::Rgba8, ImageFormat::Png)?;
    Ok(())
}

/// Encode an RGBA8 buffer as PNG bytes
pub fn write_memory(buf: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let mut out = vec![];
    image::codecs::png::PngEncoder::new(&mut out)
        .write_image(buf, width, height, ExtendedColorType::Rgba8)?;
    Ok(out)
}

/// Compare two image files pixel by pixel
///
/// Differences are logged at debug level
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        log::debug!("image sizes differ: {}x{} vs {}x{}", w1, h1, w2, h2);
        return Ok(false);
    }
    let w1 = w1 as usize;
    let mut flag = true;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            log::debug!("{} [{},{},{}]: {} {}", i, (i/4)%w1, (i/4)/w1, i%4, v1, v2);
            flag = false;
        }
    }
    Ok(flag)
}
