use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::consts;
use crate::core::error::Chip8Error;

/// A program image destined for address 0x200.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Rom {
    buffer: Vec<u8>,
}

impl Rom {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, Chip8Error> {
        let path = path.as_ref();
        let mut file = File::open(path)?;
        let rom = Rom::from_reader(&mut file)?;
        log::debug!("loaded {} bytes from {}", rom.len(), path.display());
        Ok(rom)
    }

    /// Reads the whole stream, failing if it will not fit in program space.
    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, Chip8Error> {
        let mut buffer = Vec::with_capacity(consts::MAX_ROM_BYTES);
        // one extra byte is enough to tell an oversized image apart
        reader
            .by_ref()
            .take(consts::MAX_ROM_BYTES as u64 + 1)
            .read_to_end(&mut buffer)?;
        if buffer.len() > consts::MAX_ROM_BYTES {
            let mut rest = Vec::new();
            reader.read_to_end(&mut rest)?;
            return Err(Chip8Error::RomTooLarge {
                size: buffer.len() + rest.len(),
                max_size: consts::MAX_ROM_BYTES,
            });
        }
        Ok(Rom { buffer })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Chip8Error> {
        Rom::from_reader(&mut &bytes[..])
    }

    pub fn bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rom_fits() -> Result<(), Chip8Error> {
        let rom = Rom::from_bytes(&[0x6A, 0x02, 0x60, 0x05])?;
        assert_eq!(rom.bytes(), &[0x6A, 0x02, 0x60, 0x05]);
        assert_eq!(rom.len(), 4);
        Ok(())
    }

    #[test]
    fn test_rom_exactly_full() -> Result<(), Chip8Error> {
        let rom = Rom::from_bytes(&[0xAB; consts::MAX_ROM_BYTES])?;
        assert_eq!(rom.len(), consts::MAX_ROM_BYTES);
        Ok(())
    }

    #[test]
    fn test_rom_too_large() {
        let image = vec![0u8; consts::MAX_ROM_BYTES + 10];
        match Rom::from_bytes(&image) {
            Err(Chip8Error::RomTooLarge { size, max_size }) => {
                assert_eq!(size, consts::MAX_ROM_BYTES + 10);
                assert_eq!(max_size, 3584);
            }
            other => panic!("expected RomTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn test_rom_missing_file() {
        let result = Rom::new("/definitely/not/a/rom.ch8");
        assert!(matches!(result, Err(Chip8Error::RomRead(_))));
    }
}
