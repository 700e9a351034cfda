use std::fmt::Write as _;

use crate::{
    commands::{self, Applied, VOCABULARY},
    interface::Interface,
    turtle::Turtle,
    window::{Window, WindowEvent},
};

const SHELL_HELP: &str = "shell commands:
  /pos                 - print the current turtle
  /help                - show this help
  /quit                - exit shell";

pub const UNDO_EXHAUSTED: &str = "No more undos available";

/// Why the shell stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEnd {
    /// `/quit` was entered
    Quit,
    /// the interface has no more lines
    InputEnded,
    WindowExited,
}

enum ShellCmd<'l> {
    Help,
    Pos,
    Quit,
    Unknown(&'l str),
}

fn extend_str<'i>(inp: &'i str, words: &'i [&'_ str]) -> &'i str {
    if inp.is_empty() {
        return inp;
    }
    for word in words {
        if word.starts_with(inp) {
            return word;
        }
    }
    inp
}

fn parse_shell_cmd(cmd: &str) -> ShellCmd<'_> {
    match extend_str(cmd.trim(), &["help", "pos", "quit"]) {
        "help" | "?" => ShellCmd::Help,
        "pos" => ShellCmd::Pos,
        "quit" => ShellCmd::Quit,
        other => ShellCmd::Unknown(other),
    }
}

/// Full help text: the turtle vocabulary followed by the shell commands.
pub fn help_text() -> String {
    let mut help = String::from("turtle commands:\n");
    for spec in VOCABULARY.values() {
        let _ = writeln!(help, "  {spec}");
    }
    help + SHELL_HELP
}

/// Reads commands line by line and keeps the window up to date.
pub struct Shell<W, I> {
    turtle: Turtle,
    window: W,
    interf: I,
}

impl<W: Window, I: Interface> Shell<W, I> {
    pub fn new(window: W, interf: I) -> Self {
        Self {
            turtle: Turtle::new(),
            window,
            interf,
        }
    }

    pub fn turtle(&self) -> &Turtle {
        &self.turtle
    }

    fn redraw(&mut self) {
        self.window.show(&self.turtle.frame());
    }

    /// Handle a single line of input.
    ///
    /// The window is redrawn afterwards, whether the line was valid or not.
    /// Returns [`ShellEnd::Quit`] if the line asked to leave the shell.
    pub fn exec_line(&mut self, line: &str) -> Option<ShellEnd> {
        if let Some(cmd) = line.trim_start().strip_prefix('/') {
            match parse_shell_cmd(cmd) {
                ShellCmd::Help => self.interf.print(&help_text()),
                ShellCmd::Pos => {
                    let msg = format!("turtle is at {}", self.turtle.current());
                    self.interf.print(&msg);
                }
                ShellCmd::Quit => return Some(ShellEnd::Quit),
                ShellCmd::Unknown(other) => {
                    self.interf.print_err(&format!("unknown command /{other}"));
                }
            }
            return None;
        }
        match commands::dispatch_line(&mut self.turtle, line) {
            None => return None,
            Some(Ok(Applied::UndoExhausted)) => self.interf.print(UNDO_EXHAUSTED),
            Some(Ok(_)) => {}
            Some(Err(why)) => self.interf.print_err(&why.to_string()),
        }
        self.redraw();
        None
    }

    /// Execute preloaded lines before any user input.
    ///
    /// Stops early if one of the lines is `/quit`.
    pub fn exec_script<'l>(&mut self, lines: impl IntoIterator<Item = &'l str>) -> Option<ShellEnd> {
        for line in lines {
            if let Some(end) = self.exec_line(line) {
                return Some(end);
            }
        }
        None
    }

    fn window_exited(&mut self) -> bool {
        self.window
            .events()
            .contains(&WindowEvent::WindowExited)
    }

    /// Run until input ends, `/quit` is entered or the window is closed.
    pub fn run(&mut self) -> ShellEnd {
        if let Some(greeting) = self.interf.greeting() {
            let greeting = greeting.to_string();
            self.interf.print(&greeting);
        }
        self.redraw();
        loop {
            if self.window_exited() {
                return ShellEnd::WindowExited;
            }
            let Some(line) = self.interf.read_line() else {
                return ShellEnd::InputEnded;
            };
            if let Some(end) = self.exec_line(&line) {
                return end;
            }
        }
    }
}
