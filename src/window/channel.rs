use std::sync::mpsc::{self, Receiver, Sender};

use crate::{
    render::Vertex,
    state::{TColor, TCoord},
};

use super::{Window, WindowCmd, WindowEvent};

/// A generic channel-based window.
///
/// This window doesn't draw anything on its own, but sends every
/// drawing call down a channel and reads window events from another.
///
/// Tests use this to compare what the shell drew with the expected
/// output. Closed channels are ignored; a window nobody looks at
/// simply stops drawing.
pub struct ChannelWindow {
    commands: Sender<WindowCmd>,
    events: Receiver<WindowEvent>,
}

impl ChannelWindow {
    /// Create a new [`ChannelWindow`] instance from two given channels.
    pub fn new(commands: Sender<WindowCmd>, events: Receiver<WindowEvent>) -> Self {
        Self { commands, events }
    }

    /// Create a new [`ChannelWindow`] instance together with two channels.
    pub fn construct() -> (Self, Receiver<WindowCmd>, Sender<WindowEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (evt_tx, evt_rx) = mpsc::channel();
        (Self::new(cmd_tx, evt_rx), cmd_rx, evt_tx)
    }
}

impl Window for ChannelWindow {
    fn clear(&mut self, col: TColor) {
        _ = self.commands.send(WindowCmd::Clear(col));
    }

    fn strip(&mut self, vertices: &[Vertex]) {
        _ = self.commands.send(WindowCmd::Strip(vertices.to_vec()));
    }

    fn quad(&mut self, corners: [TCoord; 4], col: TColor) {
        _ = self.commands.send(WindowCmd::Quad(corners, col));
    }

    fn present(&mut self) {
        _ = self.commands.send(WindowCmd::Present);
    }

    fn events(&mut self) -> Vec<WindowEvent> {
        self.events.try_iter().collect()
    }
}
