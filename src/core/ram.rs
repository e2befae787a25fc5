use crate::consts;
use crate::core::error::Chip8Error;
use crate::core::rom;
use crate::utils;

#[derive(Debug, Clone)]
pub struct Ram {
    pub buffer: [u8; consts::RAM_BYTES],
}

impl Default for Ram {
    fn default() -> Self {
        let mut ram = Ram {
            buffer: [0; consts::RAM_BYTES],
        };
        ram.load_font(&consts::FONT_SET);
        ram
    }
}

impl Ram {
    pub fn load_font(&mut self, fonts: &[u8]) {
        self.buffer[consts::FONT_OFFSET..consts::FONT_OFFSET + fonts.len()].copy_from_slice(fonts);
    }

    /// Copies the program to the entry point and zeroes the rest of program space.
    pub fn load_program(&mut self, rom: &rom::Rom) {
        let program = &mut self.buffer[consts::PROG_OFFSET..];
        program.fill(0);
        program[..rom.len()].copy_from_slice(rom.bytes());
    }

    pub fn slice(&self, base: u16, len: usize) -> Result<&[u8], Chip8Error> {
        Ok(&self.buffer[utils::ram_range(base, len)?])
    }

    pub fn slice_mut(&mut self, base: u16, len: usize) -> Result<&mut [u8], Chip8Error> {
        Ok(&mut self.buffer[utils::ram_range(base, len)?])
    }
}

/// 64x32 monochrome surface, one byte (0 or 1) per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBuffer {
    pub buffer: [[u8; consts::DISPL_WIDTH]; consts::DISPL_HEIGHT],
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        DisplayBuffer {
            buffer: [[0; consts::DISPL_WIDTH]; consts::DISPL_HEIGHT],
        }
    }
}

impl DisplayBuffer {
    pub fn clear(&mut self) {
        self.buffer
            .iter_mut()
            .for_each(|row| *row = [0; consts::DISPL_WIDTH]);
    }

    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.buffer[y % consts::DISPL_HEIGHT][x % consts::DISPL_WIDTH] == 1
    }

    /// XORs `sprite` onto the surface at `(x, y)`, wrapping on both axes.
    /// Returns true when any lit pixel was switched off.
    pub fn draw_sprite(&mut self, x: u8, y: u8, sprite: &[u8]) -> bool {
        let mut collision = false;
        for (row, &byte) in sprite.iter().enumerate() {
            let pos_y = (y as usize + row) % consts::DISPL_HEIGHT;
            for shift_pos in 0..8 {
                if byte & (0x80 >> shift_pos) == 0 {
                    continue;
                }
                let pos_x = (x as usize + shift_pos) % consts::DISPL_WIDTH;
                let pixel = &mut self.buffer[pos_y][pos_x];
                if *pixel == 1 {
                    collision = true;
                }
                *pixel ^= 1;
            }
        }
        collision
    }

    /// Pixels in row-major order, x fastest.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.buffer.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &value)| (x, y, value == 1))
        })
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct KeyboardBuffer {
    pub buffer: [bool; consts::KEYBOARD_SIZE],
}

impl KeyboardBuffer {
    pub fn set(&mut self, key: u8, pressed: bool) -> Result<(), Chip8Error> {
        let slot = self
            .buffer
            .get_mut(key as usize)
            .ok_or(Chip8Error::InvalidKey(key))?;
        *slot = pressed;
        Ok(())
    }

    /// Keys past 0xF are never pressed.
    pub fn is_pressed(&self, key: u8) -> bool {
        self.buffer.get(key as usize).copied().unwrap_or(false)
    }

    /// Lowest-numbered key currently held.
    pub fn first_pressed(&self) -> Option<u8> {
        self.buffer.iter().position(|&k| k).map(|i| i as u8)
    }

    pub fn clear(&mut self) {
        self.buffer = [false; consts::KEYBOARD_SIZE];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ram_has_font() {
        let ram = Ram::default();
        assert_eq!(ram.buffer[0..5], [0xF0, 0x90, 0x90, 0x90, 0xF0]);
        assert_eq!(ram.buffer[75..80], [0xF0, 0x80, 0xF0, 0x80, 0x80]);
        assert!(ram.buffer[consts::PROG_OFFSET..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_ram_out_of_bounds() {
        let mut ram = Ram::default();
        assert!(ram.slice(0xFFF, 1).is_ok());
        assert!(matches!(
            ram.slice_mut(0xFFF, 2),
            Err(Chip8Error::MemoryOutOfBounds { address: 0x1000 })
        ));
        assert!(ram.slice(0xFFE, 3).is_err());
    }

    #[test]
    fn test_draw_sets_top_left() {
        let mut display = DisplayBuffer::default();
        assert!(!display.draw_sprite(0, 0, &[0xF0]));
        for x in 0..4 {
            assert!(display.pixel(x, 0));
        }
        for x in 4..consts::DISPL_WIDTH {
            assert!(!display.pixel(x, 0));
        }
    }

    #[test]
    fn test_draw_twice_restores_and_collides() {
        let mut display = DisplayBuffer::default();
        display.buffer[5][20] = 1;
        let before = display.clone();
        let sprite = [0xAA, 0x55, 0xFF];
        display.draw_sprite(18, 4, &sprite);
        assert!(display.draw_sprite(18, 4, &sprite));
        assert_eq!(display, before);
    }

    #[test]
    fn test_draw_wraps_horizontally() {
        let mut display = DisplayBuffer::default();
        display.draw_sprite(60, 0, &[0xFF]);
        let lit: Vec<usize> = (0..consts::DISPL_WIDTH)
            .filter(|&x| display.pixel(x, 0))
            .collect();
        assert_eq!(lit, vec![0, 1, 2, 3, 60, 61, 62, 63]);
    }

    #[test]
    fn test_draw_wraps_vertically() {
        let mut display = DisplayBuffer::default();
        display.draw_sprite(0, 31, &[0x80, 0x80]);
        assert!(display.pixel(0, 31));
        assert!(display.pixel(0, 0));
    }

    #[test]
    fn test_keyboard() -> Result<(), Chip8Error> {
        let mut keys = KeyboardBuffer::default();
        assert_eq!(keys.first_pressed(), None);
        keys.set(0xB, true)?;
        keys.set(0x3, true)?;
        assert_eq!(keys.first_pressed(), Some(0x3));
        assert!(keys.is_pressed(0xB));
        assert!(!keys.is_pressed(0x20));
        assert!(matches!(keys.set(0x10, true), Err(Chip8Error::InvalidKey(0x10))));
        keys.clear();
        assert_eq!(keys.first_pressed(), None);
        Ok(())
    }
}
