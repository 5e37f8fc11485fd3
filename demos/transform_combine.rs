//! Composition order of Transforms
//!
//!     cargo run --example transform_combine

use rasterfill::{combine, Transform};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let s = combine(Transform::scale(2.0, 2.0), Transform::scale(3.0, 1.5));
    log::info!("scale(2,2) then scale(3,1.5): {:?}", s);
    assert_eq!(s.sy, 3.0);

    let scale = Transform::scale(2.0, 2.0);
    let shift = Transform::translate(10.0, 0.0);
    log::info!("scale then translate maps (1,1) to {:?}", combine(scale, shift).map_point(1.0, 1.0));
    log::info!("translate then scale maps (1,1) to {:?}", combine(shift, scale).map_point(1.0, 1.0));

    let rot = Transform::rotate_at(std::f64::consts::FRAC_PI_2, 5.0, 5.0);
    match rot.invert() {
        Some(inv) => log::info!("rotation about (5,5) and its inverse: {:?}", combine(rot, inv)),
        None => log::warn!("rotation is singular"),
    }
}
