//! Runs a Chip-8 ROM in an SDL2 window.
//!
//! ```bash
//! RUST_LOG=debug chip8 roms/PONG --clock 700 --scale 12
//! ```
//!
//! Escape quits, Space pauses. The keypad is on the left four columns of the
//! keyboard, see `keymap`.

use std::path::PathBuf;

use clap::Parser;

use chip8_core::CLOCK_SPEED;

mod audio;
mod keymap;
mod run;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the ROM file to run
    rom: PathBuf,

    /// CPU cycles per second; the timers always run at 60Hz
    #[arg(short, long, default_value_t = CLOCK_SPEED)]
    clock: u32,

    /// Size of each Chip-8 pixel on screen
    #[arg(short, long, default_value_t = 10)]
    scale: u32,

    /// Don't open an audio device
    #[arg(short, long)]
    mute: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    run::run(run::Settings {
        rom: args.rom,
        clock: args.clock,
        scale: args.scale,
        mute: args.mute,
    })
}
