use crate::consts;
use crate::core::ram::DisplayBuffer;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const OFF: Color = Color {
    r: 0,
    g: 0,
    b: 0,
    a: 255,
};
const ON: Color = Color {
    r: 0,
    g: 255,
    b: 0,
    a: 255,
};

pub struct DisplayDriver {
    pub screen: Canvas<Window>,
    scale: u32,
}

impl DisplayDriver {
    pub fn new(context: &sdl2::Sdl, scale: u32) -> Result<Self, String> {
        let video_subsystem = context.video()?;
        let window = video_subsystem
            .window(
                "CHIP-8",
                consts::DISPL_WIDTH as u32 * scale,
                consts::DISPL_HEIGHT as u32 * scale,
            )
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;
        let mut canvas: Canvas<Window> = window
            .into_canvas()
            .build()
            .map_err(|e| e.to_string())?;

        canvas.set_draw_color(OFF);
        canvas.clear();
        canvas.present();

        Ok(DisplayDriver {
            screen: canvas,
            scale,
        })
    }

    pub fn draw(&mut self, display: &DisplayBuffer) -> Result<(), String> {
        self.screen.set_draw_color(OFF);
        self.screen.clear();
        self.screen.set_draw_color(ON);
        for (x, y, lit) in display.pixels() {
            if !lit {
                continue;
            }
            self.screen.fill_rect(Rect::new(
                (x as u32 * self.scale) as i32,
                (y as u32 * self.scale) as i32,
                self.scale,
                self.scale,
            ))?;
        }
        self.screen.present();
        Ok(())
    }
}
