//! Replays a gesture script against a headless stage and logs the pose of
//! the showpiece frame by frame.
//!
//! ```text
//! RUST_LOG=info toque-replay gestures/flick.toml
//! ```

use std::path::{Path, PathBuf};

use toque::error::ToqueError;
use toque::options::Options;
use toque::replay::{run_script, GestureScript};
use toque::stage::{ShowpieceTransform, Stage};

fn run(script_path: &Path) -> Result<(), ToqueError> {
    let script = GestureScript::load(script_path)?;
    let script_dir = script_path.parent().unwrap_or_else(|| Path::new("."));
    let options: Options = script.resolve_options(script_dir)?;
    log::info!(
        "replaying {} ({} frames at {:.1} fps)",
        script_path.display(),
        script.frame_count(),
        1.0 / script.frame_dt
    );

    let mut stage =
        Stage::new(&options).with_model(ShowpieceTransform::default());
    for sample in run_script(&script, &mut stage) {
        let t = sample.transform;
        log::info!(
            "frame {:>4} t={:>7.3}s {:?} yaw={:+.4} pitch={:+.4} roll={:+.4} \
             scale={:.4} y={:+.4}",
            sample.frame,
            sample.time,
            sample.outcome,
            t.yaw,
            t.pitch,
            t.roll,
            t.scale,
            t.offset_y,
        );
    }

    let velocity = stage.controller().velocity();
    log::info!(
        "final velocity: pitch {:+.4} rad/s, yaw {:+.4} rad/s",
        velocity.pitch_per_second,
        velocity.yaw_per_second
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let Some(script_path) = std::env::args().nth(1).map(PathBuf::from) else {
        log::error!("usage: toque-replay <script.toml>");
        std::process::exit(2);
    };

    if let Err(e) = run(&script_path) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
