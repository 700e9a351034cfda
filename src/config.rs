use crate::{
    interface::{Interface, Terminal},
    shell::{Shell, ShellEnd},
    window::{VoidWindow, Window},
};

/// Builder for a shell session.
///
/// Defaults to no window and the [`Terminal`] interface.
pub struct RunConfig<W, I> {
    window: W,
    interf: I,
    script: Vec<String>,
}

impl RunConfig<VoidWindow, Terminal> {
    pub fn new() -> Self {
        Self {
            window: (),
            interf: Terminal,
            script: Vec::new(),
        }
    }
}

impl Default for RunConfig<VoidWindow, Terminal> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Window, I: Interface> RunConfig<W, I> {
    pub fn window<W2: Window>(self, window: W2) -> RunConfig<W2, I> {
        RunConfig {
            window,
            interf: self.interf,
            script: self.script,
        }
    }

    pub fn interface<I2: Interface>(self, interf: I2) -> RunConfig<W, I2> {
        RunConfig {
            window: self.window,
            interf,
            script: self.script,
        }
    }

    /// Lines to run before reading from the interface.
    pub fn script(mut self, lines: Vec<String>) -> Self {
        self.script = lines;
        self
    }

    /// Run the script, then the interactive shell.
    pub fn exec(self) -> ShellEnd {
        let RunConfig {
            window,
            interf,
            script,
        } = self;
        let mut shell = Shell::new(window, interf);
        if let Some(end) = shell.exec_script(script.iter().map(String::as_str)) {
            return end;
        }
        shell.run()
    }
}
