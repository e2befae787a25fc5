use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed byte table walked by [`RandomTable`].
pub const RANDOM_TABLE: [u8; 256] = [
    0xFB, 0x67, 0xFA, 0xB3, 0xD1, 0x62, 0x47, 0xDE, 0xCD, 0xEE, 0x62, 0x3D, 0xA1, 0xEC, 0x94, 0x15,
    0x89, 0x5B, 0x35, 0xFE, 0x38, 0x2D, 0xBD, 0xE6, 0xD3, 0xF9, 0xD0, 0xE6, 0xF9, 0x25, 0x1D, 0x56,
    0x4B, 0x6B, 0x71, 0x69, 0xE9, 0x93, 0x08, 0xCB, 0x01, 0x9E, 0x2C, 0x4C, 0x4E, 0x79, 0x79, 0xE6,
    0x38, 0xF1, 0xCD, 0xEF, 0x82, 0x28, 0xE2, 0x02, 0x80, 0x0D, 0xCD, 0xB0, 0x86, 0x9A, 0xD2, 0x7B,
    0x02, 0xB0, 0xEF, 0x93, 0x3C, 0x2D, 0x85, 0x3C, 0x95, 0xA6, 0x5D, 0xE5, 0x37, 0x10, 0xC4, 0x97,
    0x61, 0xAB, 0x57, 0x0F, 0xCE, 0x7B, 0xD9, 0x56, 0x4C, 0xB8, 0x68, 0x6D, 0xC0, 0x10, 0x3C, 0x9A,
    0x65, 0xCF, 0x53, 0x58, 0xE5, 0x5B, 0x72, 0xE6, 0x7A, 0x09, 0xA5, 0x54, 0xCD, 0xC2, 0x26, 0xC3,
    0xFB, 0xAB, 0xBC, 0xE6, 0x71, 0x99, 0x7A, 0x97, 0x04, 0xE4, 0xFB, 0xF3, 0xC6, 0xEF, 0xDF, 0x79,
    0x86, 0xF8, 0xF2, 0x8D, 0x18, 0x3A, 0xBF, 0x8C, 0xC2, 0x84, 0xF6, 0xA1, 0x43, 0x49, 0x8C, 0xF1,
    0x17, 0xB7, 0xC0, 0xBF, 0x6C, 0x0A, 0xC7, 0x71, 0x81, 0x1D, 0xC0, 0x98, 0xAB, 0x7C, 0x17, 0x39,
    0xD6, 0x9F, 0x7E, 0xA3, 0x0B, 0x18, 0x9C, 0x54, 0xF5, 0x86, 0xF3, 0xE6, 0x38, 0x57, 0x73, 0xAD,
    0x86, 0x01, 0x71, 0x38, 0x19, 0xC5, 0x49, 0xF4, 0xCF, 0xF5, 0x7E, 0x26, 0x54, 0x94, 0x8D, 0x8D,
    0x17, 0x45, 0xDA, 0x83, 0x58, 0x2B, 0x54, 0xCB, 0x65, 0x7F, 0xA8, 0x1B, 0x21, 0xEC, 0xF6, 0xDA,
    0xDD, 0x8A, 0x44, 0xC8, 0x64, 0xFF, 0x8B, 0x5D, 0xC6, 0xA1, 0xF2, 0xDC, 0xB8, 0xF1, 0xF0, 0x51,
    0x13, 0xB1, 0xD8, 0x85, 0x49, 0x81, 0x99, 0x98, 0x44, 0x9A, 0x05, 0x37, 0x95, 0xD2, 0x19, 0x69,
    0x5D, 0x6F, 0xA0, 0xF3, 0xAE, 0x16, 0x32, 0x10, 0x7D, 0xD9, 0xAF, 0xE5, 0xA5, 0x90, 0xF8, 0xEE,
];

/// Which generator backs the random opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RandomMode {
    /// Walk [`RANDOM_TABLE`] from `seed % 256`.
    #[default]
    Table,
    /// `StdRng` seeded from the configured seed.
    Seeded,
    /// `StdRng` seeded from OS entropy; not reproducible.
    Entropy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomTable {
    index: usize,
}

impl RandomTable {
    pub fn new(seed: u32) -> Self {
        RandomTable {
            index: seed as usize % RANDOM_TABLE.len(),
        }
    }

    pub fn reseed(&mut self, seed: u32) {
        self.index = seed as usize % RANDOM_TABLE.len();
    }

    pub fn next_byte(&mut self) -> u8 {
        let value = RANDOM_TABLE[self.index];
        self.index = (self.index + 1) % RANDOM_TABLE.len();
        value
    }
}

#[derive(Debug, Clone)]
pub enum RandomSource {
    Table(RandomTable),
    Rng(StdRng),
}

impl RandomSource {
    pub fn new(mode: RandomMode, seed: u32) -> Self {
        match mode {
            RandomMode::Table => RandomSource::Table(RandomTable::new(seed)),
            RandomMode::Seeded => RandomSource::Rng(StdRng::seed_from_u64(seed as u64)),
            RandomMode::Entropy => RandomSource::Rng(StdRng::from_entropy()),
        }
    }

    pub fn next_byte(&mut self) -> u8 {
        match self {
            RandomSource::Table(table) => table.next_byte(),
            RandomSource::Rng(rng) => rng.gen(),
        }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        RandomSource::Table(RandomTable::new(crate::consts::DEFAULT_SEED))
    }
}
