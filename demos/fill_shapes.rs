//! Fill a few shapes and write them to a PNG file
//!
//!     cargo run --example fill_shapes [output.png]

use rasterfill::{BlendMode, FillRule, Paint, Path, PathBuilder, Pixmap, Rect, Result, Rgba8,
                 Transform};

fn star(cx: f64, cy: f64, r: f64) -> Result<Path> {
    let mut pb = PathBuilder::new();
    for i in 0 .. 5 {
        let a = std::f64::consts::PI * (0.8 * i as f64 - 0.5);
        let (x, y) = (cx + r * a.cos(), cy + r * a.sin());
        if i == 0 {
            pb.move_to(x, y);
        } else {
            pb.line_to(x, y)?;
        }
    }
    pb.close()?;
    Ok(pb.finish())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let out = std::env::args().nth(1).unwrap_or_else(|| "fill_shapes.png".to_string());

    let mut pix = Pixmap::new(400, 200)?;
    pix.fill(Rgba8::white());

    let star = star(100.0, 100.0, 80.0)?;
    pix.fill_path(&star, &Paint::solid(Rgba8::new(200, 30, 30, 255)),
                  FillRule::EvenOdd, Transform::identity());
    pix.fill_path(&star, &Paint::solid(Rgba8::new(30, 30, 200, 255)),
                  FillRule::NonZero, Transform::translate(200.0, 0.0));

    let r = Rect::from_xywh(-40.0, -20.0, 80.0, 40.0)?;
    let ts = Transform::rotate(0.5).then(&Transform::translate(200.0, 100.0));
    let mut paint = Paint::solid(Rgba8::new(0, 160, 0, 128));
    pix.fill_path(&Path::rounded_rect(r, 12.0, 12.0), &paint, FillRule::NonZero, ts);

    paint.blend_mode = BlendMode::Source;
    paint.anti_alias = false;
    paint.set_color_rgba8(0, 0, 0, 0);
    pix.fill_rect(Rect::from_xywh(380.0, 0.0, 20.0, 200.0)?, &paint, Transform::identity());

    pix.save_png(&out)?;
    log::info!("wrote {}", out);
    Ok(())
}
