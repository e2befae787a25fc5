use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use crate::core::ram::KeyboardBuffer;

/// Host-level requests picked up while polling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Quit,
    TogglePause,
}

pub struct KeyboardDriver {
    events: sdl2::EventPump,
}

/// Keypad rows `1 2 3 4`, `Q W E R`, `A S D F`, `Z X C V` map to 0x0..=0xF.
pub fn keymap(key: Keycode) -> Option<u8> {
    match key {
        Keycode::Num1 => Some(0x0),
        Keycode::Num2 => Some(0x1),
        Keycode::Num3 => Some(0x2),
        Keycode::Num4 => Some(0x3),
        Keycode::Q => Some(0x4),
        Keycode::W => Some(0x5),
        Keycode::E => Some(0x6),
        Keycode::R => Some(0x7),
        Keycode::A => Some(0x8),
        Keycode::S => Some(0x9),
        Keycode::D => Some(0xA),
        Keycode::F => Some(0xB),
        Keycode::Z => Some(0xC),
        Keycode::X => Some(0xD),
        Keycode::C => Some(0xE),
        Keycode::V => Some(0xF),
        _ => None,
    }
}

impl KeyboardDriver {
    pub fn new(context: &sdl2::Sdl) -> Result<Self, String> {
        Ok(KeyboardDriver {
            events: context.event_pump()?,
        })
    }

    /// Drains pending events, writing press/release edges into `keyboard`.
    pub fn poll(&mut self, keyboard: &mut KeyboardBuffer) -> Vec<HostEvent> {
        let mut host_events = Vec::new();
        for event in self.events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => host_events.push(HostEvent::Quit),
                Event::KeyDown {
                    keycode: Some(Keycode::P),
                    repeat: false,
                    ..
                } => host_events.push(HostEvent::TogglePause),
                Event::KeyDown {
                    keycode: Some(key), ..
                } => apply(keyboard, key, true),
                Event::KeyUp {
                    keycode: Some(key), ..
                } => apply(keyboard, key, false),
                _ => continue,
            }
        }
        host_events
    }
}

fn apply(keyboard: &mut KeyboardBuffer, key: Keycode, pressed: bool) {
    if let Some(index) = keymap(key) {
        if let Err(err) = keyboard.set(index, pressed) {
            log::warn!("dropping key event: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keymap_rows() {
        assert_eq!(keymap(Keycode::Num1), Some(0x0));
        assert_eq!(keymap(Keycode::R), Some(0x7));
        assert_eq!(keymap(Keycode::A), Some(0x8));
        assert_eq!(keymap(Keycode::V), Some(0xF));
        assert_eq!(keymap(Keycode::P), None);
    }

    #[test]
    fn test_apply_edges() {
        let mut keyboard = KeyboardBuffer::default();
        apply(&mut keyboard, Keycode::F, true);
        assert!(keyboard.is_pressed(0xB));
        apply(&mut keyboard, Keycode::F, false);
        assert!(!keyboard.is_pressed(0xB));
        apply(&mut keyboard, Keycode::Space, true);
        assert_eq!(keyboard.first_pressed(), None);
    }
}
