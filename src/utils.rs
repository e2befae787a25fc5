use crate::consts;
use crate::core::error::Chip8Error;

/// Decoded fields of one 16-bit instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    pub raw: u16,
    pub family: u8,
    pub x: u8,
    pub y: u8,
    pub n: u8,
    pub kk: u8,
    pub nnn: u16,
}

impl Opcode {
    pub fn decode(bytes: &[u8]) -> Self {
        let (family, x, y, n) = nibble_split(bytes);
        Opcode {
            raw: ((bytes[0] as u16) << 8) | bytes[1] as u16,
            family,
            x,
            y,
            n,
            kk: (y << 4) | n,
            nnn: ((x as u16) << 8) | ((y as u16) << 4) | (n as u16),
        }
    }
}

pub fn nibble_split(bytes: &[u8]) -> (u8, u8, u8, u8) {
    assert!(bytes.len() == consts::OP_CODE_BYTES);
    (
        (bytes[0] & 0xF0) >> 4,
        bytes[0] & 0x0F,
        (bytes[1] & 0xF0) >> 4,
        bytes[1] & 0x0F,
    )
}

/// `len` bytes of RAM starting at `base`.
/// The error names the first address that falls outside RAM.
pub fn ram_range(base: u16, len: usize) -> Result<std::ops::Range<usize>, Chip8Error> {
    if len == 0 {
        return Ok(0..0);
    }
    let start = base as usize;
    let end = start + len;
    if end > consts::RAM_BYTES {
        return Err(Chip8Error::MemoryOutOfBounds {
            address: start.max(consts::RAM_BYTES),
        });
    }
    Ok(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_fields() {
        let op = Opcode::decode(&[0xD1, 0x2F]);
        assert_eq!(op.raw, 0xD12F);
        assert_eq!(op.family, 0xD);
        assert_eq!(op.x, 0x1);
        assert_eq!(op.y, 0x2);
        assert_eq!(op.n, 0xF);
        assert_eq!(op.kk, 0x2F);
        assert_eq!(op.nnn, 0x12F);
    }

    #[test]
    fn test_ram_range_bounds() {
        assert_eq!(ram_range(0xFFF, 1).ok(), Some(0xFFF..0x1000));
        assert!(matches!(
            ram_range(0xFFF, 2),
            Err(Chip8Error::MemoryOutOfBounds { address: 0x1000 })
        ));
        assert_eq!(ram_range(0xFFD, 3).ok(), Some(0xFFD..0x1000));
        assert!(matches!(
            ram_range(0xFFE, 5),
            Err(Chip8Error::MemoryOutOfBounds { address: 0x1000 })
        ));
        assert!(matches!(
            ram_range(0x10FE, 2),
            Err(Chip8Error::MemoryOutOfBounds { address: 0x10FE })
        ));
        assert_eq!(ram_range(0x1234, 0).ok(), Some(0..0));
    }
}
