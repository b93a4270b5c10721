use crate::keyboard::pointer::PointerEvent;
use crate::keyboard::render::DrawTarget;
use crate::keyboard::Position;
use crate::session::Session;
use crate::{AddMessage, ErrorString};
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const STROKE_COLOR: Color = Color::RGB(0, 0, 0);

pub fn run(mut session: Session) -> Result<(), ErrorString> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let mut selector = ScaleSelector::new(&session.registry().names(), session.scale_name());
    let window = video_subsystem
        .window(
            &selector.title(),
            session.keyboard().viewport_width() as u32,
            session.config().key_height as u32,
        )
        .position_centered()
        .resizable()
        .build()?;
    let mut canvas = window.into_canvas().present_vsync().build()?;
    let mut event_pump = sdl_context.event_pump()?;
    log::info!("scales: {}", selector.title());
    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::KeyDown {
                    keycode: Some(keycode),
                    ..
                } => {
                    if selector.handle_key(keycode) {
                        session.select_scale(selector.selected())?;
                        canvas
                            .window_mut()
                            .set_title(&selector.title())
                            .add_message("can't set the window title")?;
                    }
                }
                Event::Window {
                    win_event: WindowEvent::SizeChanged(width, _),
                    ..
                } => session.resize(width as f32),
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => session.handle_pointer(PointerEvent::Down(position(x, y))),
                Event::MouseMotion { x, y, .. } => {
                    session.handle_pointer(PointerEvent::Move(position(x, y)))
                }
                Event::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    ..
                } => session.handle_pointer(PointerEvent::Up),
                _ => {}
            }
        }
        if let Err(error) = session.draw(&mut SdlTarget::new(&mut canvas)) {
            log::warn!("draw: {}", error);
        }
        canvas.present();
    }
    session.handle_pointer(PointerEvent::Up);
    Ok(())
}

fn position(x: i32, y: i32) -> Position {
    Position {
        x: x as f32,
        y: y as f32,
    }
}

struct SdlTarget<'a> {
    canvas: &'a mut Canvas<Window>,
    stroke_weight: u32,
    fill_color: Color,
}

impl<'a> SdlTarget<'a> {
    fn new(canvas: &'a mut Canvas<Window>) -> SdlTarget<'a> {
        SdlTarget {
            canvas,
            stroke_weight: 1,
            fill_color: Color::RGB(255, 255, 255),
        }
    }
}

impl<'a> DrawTarget for SdlTarget<'a> {
    fn set_background(&mut self, color: Color) -> Result<(), ErrorString> {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
        Ok(())
    }

    fn set_stroke_weight(&mut self, weight: u32) {
        self.stroke_weight = weight;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> Result<(), ErrorString> {
        let left = x.round() as i32;
        let top = y.round() as i32;
        let right = (x + width).round() as i32;
        let bottom = (y + height).round() as i32;
        let width = (right - left).max(0) as u32;
        let height = (bottom - top).max(0) as u32;
        self.canvas.set_draw_color(self.fill_color);
        self.canvas.fill_rect(Rect::new(left, top, width, height))?;
        // the stroke straddles the outline, only its inner half is visible
        self.canvas.set_draw_color(STROKE_COLOR);
        for inset in 0..(self.stroke_weight + 1) / 2 {
            if width <= 2 * inset || height <= 2 * inset {
                break;
            }
            self.canvas.draw_rect(Rect::new(
                left + inset as i32,
                top + inset as i32,
                width - 2 * inset,
                height - 2 * inset,
            ))?;
        }
        Ok(())
    }
}

/// Single-select control over the registered scales, driven by the arrow
/// and number keys. The selection is shown in the window title.
#[derive(Debug)]
pub struct ScaleSelector {
    names: Vec<String>,
    selected: usize,
}

impl ScaleSelector {
    pub fn new(names: &[&str], selected: &str) -> ScaleSelector {
        ScaleSelector {
            names: names.iter().map(|name| name.to_string()).collect(),
            selected: names.iter().position(|name| *name == selected).unwrap_or(0),
        }
    }

    pub fn selected(&self) -> &str {
        &self.names[self.selected]
    }

    /// Returns whether the selection changed.
    pub fn handle_key(&mut self, keycode: Keycode) -> bool {
        let next = match keycode {
            Keycode::Right => (self.selected + 1) % self.names.len(),
            Keycode::Left => (self.selected + self.names.len() - 1) % self.names.len(),
            other => match number_key(other) {
                Some(index) if index < self.names.len() => index,
                _ => return false,
            },
        };
        let changed = next != self.selected;
        self.selected = next;
        changed
    }

    pub fn title(&self) -> String {
        let entries: Vec<String> = self
            .names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                if i == self.selected {
                    format!("[{}]", name)
                } else {
                    name.clone()
                }
            })
            .collect();
        format!("{}: {}", clap::crate_name!(), entries.join(" "))
    }
}

fn number_key(keycode: Keycode) -> Option<usize> {
    match keycode {
        Keycode::Num1 => Some(0),
        Keycode::Num2 => Some(1),
        Keycode::Num3 => Some(2),
        Keycode::Num4 => Some(3),
        Keycode::Num5 => Some(4),
        Keycode::Num6 => Some(5),
        Keycode::Num7 => Some(6),
        Keycode::Num8 => Some(7),
        Keycode::Num9 => Some(8),
        _ => None,
    }
}
