pub mod clock;
#[cfg(feature = "sdl")]
pub mod input;
#[cfg(feature = "sdl")]
pub mod output;
