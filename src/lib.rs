//! A CHIP-8 virtual machine: the interpreter core plus the host glue that
//! presents its framebuffer and feeds it keys.
//!
//! The core lives in [`core`]; one call to [`Processor::cycle`] executes one
//! instruction and [`Processor::tick_timers`] advances the 60 Hz timers. The
//! host decides how often to call each.

pub mod consts;
pub mod core;
pub mod external;
pub mod utils;

pub use crate::core::error::Chip8Error;
pub use crate::core::processor::{Config, CycleStatus, Processor, RunState};
pub use crate::core::random::RandomMode;
pub use crate::core::rom::Rom;
