use crate::consts;
use crate::core::error::Chip8Error;
use crate::core::random::{RandomMode, RandomSource};
use crate::core::{ram, rom};
use crate::utils::Opcode;

const OP_CODE_BYTES: u16 = consts::OP_CODE_BYTES as u16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleStatus {
    RedrawScreen,
    Continue,
    Waiting,
}

/// Whether the processor can make forward progress without input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Running,
    AwaitingKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub random: RandomMode,
    /// Fail on unrecognised opcodes instead of skipping them.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: consts::DEFAULT_SEED,
            random: RandomMode::Table,
            strict: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Processor {
    /// Return addresses, deepest call last. A call stores at
    /// `stack[stack_pointer]` and then increments, so `stack[0]` holds the
    /// outermost return address and all 16 slots are usable.
    pub stack: [u16; consts::STACK_SIZE],
    pub registers: [u8; consts::REG_COUNT],
    pub idx_register: u16,
    pub pc: u16,
    pub stack_pointer: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub ram: ram::Ram,
    pub display_buffer: ram::DisplayBuffer,
    pub keyboard_buffer: ram::KeyboardBuffer,
    draw_pending: bool,
    run_state: RunState,
    unknown_opcodes: u64,
    config: Config,
    rng: RandomSource,
}

impl Default for Processor {
    fn default() -> Self {
        Processor::new(Config::default())
    }
}

impl Processor {
    pub fn new(config: Config) -> Self {
        Processor {
            stack: [0; consts::STACK_SIZE],
            registers: [0; consts::REG_COUNT],
            idx_register: 0,
            pc: consts::PROG_OFFSET as u16,
            stack_pointer: 0,
            delay_timer: 0,
            sound_timer: 0,
            ram: ram::Ram::default(),
            display_buffer: ram::DisplayBuffer::default(),
            keyboard_buffer: ram::KeyboardBuffer::default(),
            draw_pending: false,
            run_state: RunState::Running,
            unknown_opcodes: 0,
            config,
            rng: RandomSource::new(config.random, config.seed),
        }
    }

    pub fn with_rom(config: Config, rom: &rom::Rom) -> Self {
        let mut processor = Processor::new(config);
        processor.init_ram(rom);
        processor
    }

    pub fn init_ram(&mut self, rom: &rom::Rom) {
        self.ram.load_font(&consts::FONT_SET);
        self.ram.load_program(rom);
        log::debug!("program of {} bytes loaded at {:#05X}", rom.len(), consts::PROG_OFFSET);
    }

    /// Back to power-on state, keeping the loaded program in memory.
    pub fn reset(&mut self) {
        let ram = self.ram.clone();
        let keyboard = self.keyboard_buffer.clone();
        *self = Processor::new(self.config);
        self.ram = ram;
        self.ram.load_font(&consts::FONT_SET);
        self.keyboard_buffer = keyboard;
        log::debug!("processor reset with seed {}", self.config.seed);
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn draw_pending(&self) -> bool {
        self.draw_pending
    }

    pub fn clear_draw_pending(&mut self) {
        self.draw_pending = false;
    }

    pub fn unknown_opcodes(&self) -> u64 {
        self.unknown_opcodes
    }

    pub fn sound_active(&self) -> bool {
        self.sound_timer > 0
    }

    pub fn press_key(&mut self, key: u8, pressed: bool) -> Result<(), Chip8Error> {
        self.keyboard_buffer.set(key, pressed)
    }

    /// One 60 Hz timer step. Both counters stop at zero.
    pub fn tick_timers(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }

    /// Fetches, decodes and executes a single instruction.
    pub fn cycle(&mut self) -> Result<CycleStatus, Chip8Error> {
        let fetch_pc = self.pc;
        let op = Opcode::decode(self.ram.slice(fetch_pc, consts::OP_CODE_BYTES)?);
        self.pc = fetch_pc.wrapping_add(OP_CODE_BYTES);
        log::trace!(
            "{:#05X}: {:04X} nnn={:03X} n={:X} x={:X} y={:X} kk={:02X} v={:02X?} i={:#05X}",
            fetch_pc,
            op.raw,
            op.nnn,
            op.n,
            op.x,
            op.y,
            op.kk,
            self.registers,
            self.idx_register
        );

        let x = op.x as usize;
        let y = op.y as usize;
        let (vx, vy) = (self.registers[x], self.registers[y]);

        match (op.family, op.x, op.y, op.n) {
            // Halt till a key is held; the instruction re-runs in full once one is
            (0xF, _, 0, 0xA) => match self.keyboard_buffer.first_pressed() {
                Some(key) => {
                    self.registers[x] = key;
                    self.run_state = RunState::Running;
                }
                None => {
                    self.pc = fetch_pc;
                    self.run_state = RunState::AwaitingKey;
                    return Ok(CycleStatus::Waiting);
                }
            },

            // Clears screen
            (0, 0, 0xE, 0) => {
                self.display_buffer.clear();
                self.draw_pending = true;
                return Ok(CycleStatus::RedrawScreen);
            }

            // Draw on display
            (0xD, _, _, _) => {
                let sprite = self.ram.slice(self.idx_register, op.n as usize)?;
                let collision = self.display_buffer.draw_sprite(vx, vy, sprite);
                self.registers[consts::FLAG_REGISTER] = collision as u8;
                self.draw_pending = true;
                return Ok(CycleStatus::RedrawScreen);
            }

            // Jumps
            (1, _, _, _) => {
                self.pc = op.nnn;
            }
            (0xB, _, _, _) => {
                self.pc = op.nnn + self.registers[0] as u16;
            }

            // Subroutines: enter and exit
            (0, 0, 0xE, 0xE) => {
                if self.stack_pointer == 0 {
                    return Err(Chip8Error::StackUnderflow { pc: fetch_pc });
                }
                self.stack_pointer -= 1;
                self.pc = self.stack[self.stack_pointer as usize];
            }
            (2, _, _, _) => {
                if self.stack_pointer as usize >= consts::STACK_SIZE {
                    return Err(Chip8Error::StackOverflow { pc: fetch_pc });
                }
                self.stack[self.stack_pointer as usize] = self.pc;
                self.stack_pointer += 1;
                self.pc = op.nnn;
            }

            // Conditional skips
            (3, _, _, _) => self.skip_if(vx == op.kk),
            (4, _, _, _) => self.skip_if(vx != op.kk),
            (5, _, _, 0) => self.skip_if(vx == vy),
            (9, _, _, 0) => self.skip_if(vx != vy),

            // Set register
            (6, _, _, _) => {
                self.registers[x] = op.kk;
            }
            (0xA, _, _, _) => {
                self.idx_register = op.nnn;
            }

            (7, _, _, _) => {
                self.registers[x] = vx.wrapping_add(op.kk);
            }

            // Register ALU; vF is written first and the result reads the registers
            // after that write, so an x or y of F sees the new flag
            (8, _, _, 0) => self.registers[x] = vy,
            (8, _, _, 1) => self.registers[x] = vx | vy,
            (8, _, _, 2) => self.registers[x] = vx & vy,
            (8, _, _, 3) => self.registers[x] = vx ^ vy,
            (8, _, _, 4) => {
                self.alu_with_flag(x, y, vx as u16 + vy as u16 > 0xFF, u8::wrapping_add)
            }
            (8, _, _, 5) => self.alu_with_flag(x, y, vx > vy, u8::wrapping_sub),
            (8, _, _, 6) => self.alu_with_flag(x, y, vx & 0x01 == 1, |a, _| a >> 1),
            (8, _, _, 7) => self.alu_with_flag(x, y, vy > vx, |a, b| b.wrapping_sub(a)),
            (8, _, _, 0xE) => self.alu_with_flag(x, y, vx >> 7 == 1, |a, _| a << 1),

            // Generate randomness
            (0xC, _, _, _) => {
                self.registers[x] = self.rng.next_byte() & op.kk;
            }

            // Skip on keypress
            (0xE, _, 9, 0xE) => self.skip_if(self.keyboard_buffer.is_pressed(vx)),
            (0xE, _, 0xA, 1) => self.skip_if(!self.keyboard_buffer.is_pressed(vx)),

            // Timers
            (0xF, _, 0, 7) => {
                self.registers[x] = self.delay_timer;
            }
            (0xF, _, 1, 5) => {
                self.delay_timer = vx;
            }
            (0xF, _, 1, 8) => {
                self.sound_timer = vx;
            }

            // Update index register
            (0xF, _, 1, 0xE) => {
                self.idx_register = self.idx_register.wrapping_add(vx as u16);
            }

            // Point index to font character
            (0xF, _, 2, 9) => {
                let glyph = consts::FONT_OFFSET + consts::FONT_CHAR_BYTES * vx as usize;
                self.idx_register = glyph as u16;
            }

            // Binary byte to decimal digits
            (0xF, _, 3, 3) => {
                let digits = self.ram.slice_mut(self.idx_register, 3)?;
                digits.copy_from_slice(&[vx / 100, (vx % 100) / 10, vx % 10]);
            }

            // Store and load registers v0..=vx
            (0xF, _, 5, 5) => {
                let dest = self.ram.slice_mut(self.idx_register, x + 1)?;
                dest.copy_from_slice(&self.registers[..=x]);
            }
            (0xF, _, 6, 5) => {
                let src = self.ram.slice(self.idx_register, x + 1)?;
                self.registers[..=x].copy_from_slice(src);
            }

            _ => return self.unknown_opcode(op, fetch_pc),
        }
        Ok(CycleStatus::Continue)
    }

    fn skip_if(&mut self, condition: bool) {
        if condition {
            self.pc = self.pc.wrapping_add(OP_CODE_BYTES);
        }
    }

    fn alu_with_flag(&mut self, x: usize, y: usize, flag: bool, op: fn(u8, u8) -> u8) {
        self.registers[consts::FLAG_REGISTER] = flag as u8;
        self.registers[x] = op(self.registers[x], self.registers[y]);
    }

    fn unknown_opcode(&mut self, op: Opcode, pc: u16) -> Result<CycleStatus, Chip8Error> {
        if self.config.strict {
            return Err(Chip8Error::UnknownOpcode { opcode: op.raw, pc });
        }
        self.unknown_opcodes += 1;
        log::warn!("skipping unknown opcode {:04X} at {:#05X}", op.raw, pc);
        Ok(CycleStatus::Continue)
    }
}
