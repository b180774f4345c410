//! Rainbow cycler binary.
//!
//! Reads `ARCH` and `DO_CRASH` from the environment, opens the matching
//! strip backend, and runs the animation. Never exits 0: an
//! unrecognized platform or a device failure exits 1, and the
//! crash-test path exits with a distinguished status for the
//! supervisor to observe.

use std::process;

use neopixel_cycler::{
    Config, CyclerConfig, DEFAULT_NUM_PIXELS, RainbowCycler, ThreadSleeper, backend,
};

/// Exit status of the deliberate crash (-1 as seen through a Unix
/// process status).
const CRASH_EXIT_CODE: i32 = 255;

fn main() {
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| env!("CARGO_BIN_NAME").to_owned());

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}: {}", program, err);
            process::exit(1);
        }
    };

    let strip = match backend::open(config.arch, DEFAULT_NUM_PIXELS) {
        Ok(strip) => strip,
        Err(err) => {
            eprintln!("{}: {}", program, err);
            process::exit(1);
        }
    };

    let mut cycler = RainbowCycler::new(
        strip,
        CyclerConfig {
            crash_mode: config.crash_mode,
        },
    );

    match cycler.run(&mut ThreadSleeper) {
        // run only returns normally after the crash-mode shutdown
        Ok(()) => process::exit(CRASH_EXIT_CODE),
        Err(err) => {
            eprintln!("{}: {}", program, err);
            process::exit(1);
        }
    }
}
