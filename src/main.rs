//! Headless frame driver: loads options, replays key presses against the
//! camera rig, runs one frame and logs the resulting report.
//!
//! Usage: `extrinsics [OPTIONS.toml] [WIDTHxHEIGHT] [KEY...]`, where each
//! key is a code from the keybindings (`ArrowLeft`, `ShiftLeft`, ...).

use std::path::Path;

use extrinsics::camera::CameraRig;
use extrinsics::input::InputProcessor;
use extrinsics::options::Options;
use extrinsics::ExtrinsicsError;

fn parse_viewport(arg: &str) -> Option<(u32, u32)> {
    let (w, h) = arg.split_once('x')?;
    Some((w.parse().ok()?, h.parse().ok()?))
}

fn run(args: &[String]) -> Result<(), ExtrinsicsError> {
    let (options, rest) = match args.split_first() {
        Some((first, rest))
            if Path::new(first).extension().is_some_and(|e| e == "toml") =>
        {
            log::info!("loading options from {first}");
            (Options::load(Path::new(first))?, rest)
        }
        _ => (Options::default(), args),
    };

    let mut rig = CameraRig::from_options(&options)?;
    let mut input = InputProcessor::new(&options);

    let keys = match rest.split_first() {
        Some((first, keys)) => match parse_viewport(first) {
            Some((width, height)) => {
                rig.resize(width, height);
                keys
            }
            None => rest,
        },
        None => rest,
    };

    for key in keys {
        match input.handle_key_press(key, &mut rig) {
            Ok(action) => log::debug!("{key} -> {action:?}"),
            Err(e) => log::warn!("{e}"),
        }
    }

    let report = rig.frame();
    log::info!("frame report:\n{}", report.to_json()?);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
