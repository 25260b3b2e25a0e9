//! Tests a ray against a rectangle given on the command line.
//!
//! Run with: cargo run --example raycast -- "(0,0)" "(1,-1)" 1 -1 1 1
//!
//! Arguments are the ray origin, the ray direction, then the rectangle's
//! minimum x, minimum y, width and height. Set `RUST_LOG=debug` to see why
//! an argument was rejected.

use planar::{ParseError, Ray2, Rect2, Vec2};
use std::process::ExitCode;

#[derive(Debug, thiserror::Error)]
enum ArgError {
    #[error("usage: raycast <origin> <direction> <x> <y> <width> <height>")]
    Usage,
    #[error("argument {0}: {1}")]
    Vector(&'static str, #[source] ParseError),
    #[error("argument {0}: invalid number \"{1}\"")]
    Scalar(&'static str, String),
}

fn parse_args(args: &[String]) -> Result<(Ray2, Rect2), ArgError> {
    let [origin, direction, x, y, w, h] = args else {
        return Err(ArgError::Usage);
    };

    let vector = |name, s: &String| s.parse::<Vec2>().map_err(|e| ArgError::Vector(name, e));
    let scalar = |name, s: &String| {
        s.parse::<f32>()
            .map_err(|_| ArgError::Scalar(name, s.clone()))
    };

    let ray = Ray2::new(vector("origin", origin)?, vector("direction", direction)?);
    let rect = Rect2::new(
        scalar("x", x)?,
        scalar("y", y)?,
        scalar("width", w)?,
        scalar("height", h)?,
    );

    if rect.width < 0.0 || rect.height < 0.0 {
        log::warn!("negative extents in {rect:?}, result is unspecified");
    }

    Ok((ray, rect))
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (ray, rect) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "ray from {} along {} against [{}, {}] x [{}, {}]",
        ray.origin,
        ray.direction,
        rect.min_x(),
        rect.max_x(),
        rect.min_y(),
        rect.max_y()
    );

    match ray.clip_rect(&rect) {
        Some((t_enter, t_exit)) => {
            println!(
                "hit: enters at t={t_enter} {:.4}, exits at t={t_exit}",
                ray.point_at(t_enter)
            );
        }
        None => println!("miss"),
    }

    ExitCode::SUCCESS
}
