use std::{
    mem,
    sync::{
        Arc,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::Duration,
};

use parking_lot::Mutex;
use sdl2::{event::Event, pixels::Color, rect::{Point, Rect}, render::Canvas};
use tracing::{error, warn};

use crate::{
    render::Vertex,
    state::{TColor, TCoord},
};

use super::{HEIGHT, LINE_WIDTH, WIDTH, Window, WindowCmd, WindowEvent};

/// Frames shown after the window was closed, so the shell can react first.
const EXIT_GRACE_FRAMES: usize = 5;

/// A window drawn by SDL2 on its own thread.
///
/// Drawing calls are collected until [`present`](Window::present) and
/// then handed over as a whole. The SDL thread repaints the last handed
/// over frame on every refresh.
pub struct SdlWindow {
    pending: Vec<WindowCmd>,
    shown: Arc<Mutex<Vec<WindowCmd>>>,
    events: Receiver<WindowEvent>,
}

struct SdlThread {
    _sdl: sdl2::Sdl,
    canvas: Canvas<sdl2::video::Window>,
    event_pump: sdl2::EventPump,
    shown: Arc<Mutex<Vec<WindowCmd>>>,
    events: Sender<WindowEvent>,
    wait_exit: Option<usize>,
}

impl SdlWindow {
    pub fn create(title: String) -> Self {
        let shown = Arc::new(Mutex::new(Vec::new()));
        let (evt_tx, evt_rx) = mpsc::channel();
        let t_shown = Arc::clone(&shown);
        thread::spawn(move || match SdlThread::init(&title, t_shown, evt_tx) {
            Ok(sdl) => sdl.run(),
            Err(why) => error!("could not open window: {why}"),
        });
        Self {
            pending: Vec::new(),
            shown,
            events: evt_rx,
        }
    }
}

impl Window for SdlWindow {
    fn clear(&mut self, col: TColor) {
        self.pending.clear();
        self.pending.push(WindowCmd::Clear(col));
    }

    fn strip(&mut self, vertices: &[Vertex]) {
        self.pending.push(WindowCmd::Strip(vertices.to_vec()));
    }

    fn quad(&mut self, corners: [TCoord; 4], col: TColor) {
        self.pending.push(WindowCmd::Quad(corners, col));
    }

    fn present(&mut self) {
        *self.shown.lock() = mem::take(&mut self.pending);
    }

    fn events(&mut self) -> Vec<WindowEvent> {
        self.events.try_iter().collect()
    }
}

fn map_coords(coord: TCoord) -> Point {
    Point::new(
        (WIDTH as f64 / 2.0 + coord.0) as i32,
        (HEIGHT as f64 / 2.0 - coord.1) as i32,
    )
}

fn map_color(col: TColor) -> Color {
    Color::RGB(
        (col.0 * 255.0) as u8,
        (col.1 * 255.0) as u8,
        (col.2 * 255.0) as u8,
    )
}

impl SdlThread {
    fn init(
        title: &str,
        shown: Arc<Mutex<Vec<WindowCmd>>>,
        events: Sender<WindowEvent>,
    ) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_sub = sdl_context.video()?;
        let window = video_sub
            .window(title, WIDTH, HEIGHT)
            .position_centered()
            .build()
            .map_err(|why| why.to_string())?;
        let canvas = window.into_canvas().build().map_err(|why| why.to_string())?;
        let event_pump = sdl_context.event_pump()?;
        Ok(Self {
            _sdl: sdl_context,
            canvas,
            event_pump,
            shown,
            events,
            wait_exit: None,
        })
    }

    fn run(mut self) {
        loop {
            let cmds = self.shown.lock().clone();
            for cmd in &cmds {
                if let Err(why) = self.paint(cmd) {
                    warn!("drawing failed: {why}");
                }
            }
            self.canvas.present();
            thread::sleep(Duration::from_millis(16));
            if let Some(rem) = &mut self.wait_exit {
                *rem -= 1;
                if *rem == 0 {
                    std::process::exit(0);
                }
            }
            self.collect_events();
        }
    }

    fn paint(&mut self, cmd: &WindowCmd) -> Result<(), String> {
        match cmd {
            WindowCmd::Clear(col) => {
                self.canvas.set_draw_color(map_color(*col));
                self.canvas.clear();
            }
            WindowCmd::Strip(vertices) => {
                // every segment takes the color of the vertex it leads to
                for seg in vertices.windows(2) {
                    let start = map_coords(seg[0].pos);
                    let end = map_coords(seg[1].pos);
                    self.canvas.set_draw_color(map_color(seg[1].color));
                    for off in 0..LINE_WIDTH as i32 {
                        self.canvas
                            .draw_line(start.offset(off, off), end.offset(off, off))?;
                    }
                }
            }
            WindowCmd::Quad(corners, col) => {
                let points = corners.map(map_coords);
                let left = points.iter().map(|p| p.x()).min().unwrap_or_default();
                let right = points.iter().map(|p| p.x()).max().unwrap_or_default();
                let top = points.iter().map(|p| p.y()).min().unwrap_or_default();
                let bottom = points.iter().map(|p| p.y()).max().unwrap_or_default();
                self.canvas.set_draw_color(map_color(*col));
                self.canvas.fill_rect(Rect::new(
                    left,
                    top,
                    (right - left) as u32,
                    (bottom - top) as u32,
                ))?;
            }
            WindowCmd::Present => {}
        }
        Ok(())
    }

    fn collect_events(&mut self) {
        for evt in self.event_pump.poll_iter() {
            if let Event::Quit { .. } = evt {
                self.wait_exit.get_or_insert(EXIT_GRACE_FRAMES);
                _ = self.events.send(WindowEvent::WindowExited);
            }
        }
    }
}
