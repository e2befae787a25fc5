use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};

use chip8_vm::consts;
use chip8_vm::external::clock::Clock;
use chip8_vm::external::input::{HostEvent, KeyboardDriver};
use chip8_vm::external::output::DisplayDriver;
use chip8_vm::{Config, Processor, RandomMode, Rom};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RandomArg {
    Table,
    Seeded,
    Entropy,
}

impl From<RandomArg> for RandomMode {
    fn from(arg: RandomArg) -> Self {
        match arg {
            RandomArg::Table => RandomMode::Table,
            RandomArg::Seeded => RandomMode::Seeded,
            RandomArg::Entropy => RandomMode::Entropy,
        }
    }
}

#[derive(Parser)]
#[command(name = "chip8-vm")]
#[command(about = "Runs a CHIP-8 program in an SDL window")]
struct Args {
    #[arg(help = "Program image, loaded at 0x200")]
    rom: PathBuf,

    #[arg(long, default_value_t = consts::DEFAULT_SEED, help = "Seed for the random opcode")]
    seed: u32,

    #[arg(long, value_enum, default_value_t = RandomArg::Table, help = "Random byte source")]
    random: RandomArg,

    #[arg(long, help = "Stop on unknown opcodes instead of skipping them")]
    strict: bool,

    #[arg(long, default_value_t = consts::CPU_HZ, value_parser = parse_hz, help = "Instructions per second")]
    cpu_hz: f64,

    #[arg(long, default_value_t = consts::TIMER_HZ, value_parser = parse_hz, help = "Timer ticks per second")]
    timer_hz: f64,

    #[arg(long, default_value_t = consts::SCALE_FACTOR, help = "Window pixels per CHIP-8 pixel")]
    scale: u32,

    #[arg(long, help = "Trace every executed instruction")]
    debug: bool,
}

fn parse_hz(s: &str) -> Result<f64, String> {
    let hz: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if hz.is_finite() && hz > 0.0 {
        Ok(hz)
    } else {
        Err(format!("rate must be a positive number, got {}", s))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,chip8_vm=info"),
    );
    if args.debug {
        logger.filter_module("chip8_vm", log::LevelFilter::Trace);
    }
    logger.init();

    let prog = Rom::new(&args.rom)?;
    let config = Config {
        seed: args.seed,
        random: args.random.into(),
        strict: args.strict,
    };
    let mut chip8 = Processor::with_rom(config, &prog);

    let context = sdl2::init()?;
    let mut display = DisplayDriver::new(&context, args.scale)?;
    let mut keyboard = KeyboardDriver::new(&context)?;
    let mut clock = Clock::new(args.cpu_hz, args.timer_hz);
    let mut paused = false;

    log::info!(
        "running {} ({} bytes) at {} Hz",
        args.rom.display(),
        prog.len(),
        args.cpu_hz
    );

    'running: loop {
        let started = Instant::now();

        for event in keyboard.poll(&mut chip8.keyboard_buffer) {
            match event {
                HostEvent::Quit => break 'running,
                HostEvent::TogglePause => {
                    paused = !paused;
                    log::info!("{}", if paused { "paused" } else { "resumed" });
                }
            }
        }

        if !paused {
            if let Err(err) = chip8.cycle() {
                log::error!("halting at {:#05X}: {}", chip8.pc, err);
                return Err(err.into());
            }
            for _ in 0..clock.advance() {
                chip8.tick_timers();
            }
        }

        if chip8.draw_pending() {
            display.draw(&chip8.display_buffer)?;
            chip8.clear_draw_pending();
        }

        clock.wait(started);
    }

    if chip8.unknown_opcodes() > 0 {
        log::warn!("skipped {} unknown opcodes", chip8.unknown_opcodes());
    }
    log::info!("quit");
    Ok(())
}
