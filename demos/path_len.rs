//! Building a path and counting its verbs
//!
//!     cargo run --example path_len

use rasterfill::{PathBuilder, Result};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut pb = PathBuilder::new();
    if let Err(err) = pb.line_to(1.0, 1.0) {
        log::info!("line_to on an empty builder: {}", err);
    }
    pb.move_to(0.0, 0.0);
    pb.line_to(10.0, 0.0)?;
    pb.line_to(10.0, 20.0)?;
    pb.line_to(0.0, 20.0)?;
    pb.close()?;
    let path = pb.finish();

    log::info!("rectangle path has {} verbs, bounds {:?}", path.len(), path.bounds());
    assert_eq!(path.len(), 5);
    Ok(())
}
