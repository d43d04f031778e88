// Rotates a handful of vectors and logs each step of the sandwich product.
// Run with RUST_LOG=debug to see the intermediate quaternions:
//   RUST_LOG=debug cargo run --example rotate

use log::{debug, error, info};
use quatrot::format::labeled;
use quatrot::{rotate, Quaternion, Vector3};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cases = [
        (Vector3::new(1.0_f64, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0), 90.0),
        (Vector3::new(0.0, 1.0, 0.0), Vector3::new(1.0, 0.0, 0.0), 180.0),
        (Vector3::new(0.2, -1.0, 4.0), Vector3::new(1.0, 1.0, 1.0), 120.0),
        (Vector3::new(1.0, 2.0, 3.0), Vector3::zeros(), 45.0),
    ];

    for (v, axis, angle) in cases {
        info!("{} about {} by {} degrees", labeled(&v, "v"), axis, angle);

        let q = match Quaternion::from_axis_angle(axis, angle) {
            Ok(q) => q,
            Err(e) => {
                error!("cannot build rotation about {}: {}", axis, e);
                continue;
            }
        };
        debug!("{:.4}", labeled(&q, "q"));
        debug!("{:.4}", labeled(&q.conjugate(), "q_conj"));
        debug!("{:.4}", labeled(&(q * v * q.conjugate()), "q v q_conj"));

        match rotate(v, axis, angle) {
            Ok(r) => info!("{:.4}", labeled(&r, "v_rotated")),
            Err(e) => error!("rotation failed: {}", e),
        }
    }
}
