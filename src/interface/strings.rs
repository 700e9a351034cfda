use std::sync::mpsc::{self, Receiver, Sender};

use super::Interface;

/// The "output" type of the [`Strings`] interface.
type StringRes = Result<String, String>;

/// [`Interface`] working on plain strings.
///
/// Input is drawn from an [`Iterator`] and output sent into a
/// [`mpsc::channel`], errors as `Err`. Since [`Receiver`] also
/// implements [`IntoIterator`], a channel can be used for both.
pub struct Strings<I> {
    /// Iterator to draw user input from
    inputs: I,
    /// Sender to dump output into
    outputs: Sender<StringRes>,
}

impl Strings<std::iter::Empty<String>> {
    /// Construct a new [`Strings`] instance together with the output channel.
    pub fn construct<I: IntoIterator<Item = String>>(
        inp: I,
    ) -> (Strings<I::IntoIter>, Receiver<StringRes>) {
        let (tx, rx) = mpsc::channel();
        (Strings::new(inp.into_iter(), tx), rx)
    }
}

impl<I: Iterator<Item = String>> Strings<I> {
    /// Construct a new [`Strings`] instance from an already existing channel for output.
    pub fn new(inputs: I, outputs: Sender<StringRes>) -> Self {
        Self { inputs, outputs }
    }
}

impl<I: Iterator<Item = String>> Interface for Strings<I> {
    fn read_line(&mut self) -> Option<String> {
        self.inputs.next()
    }

    fn print(&mut self, msg: &str) {
        _ = self.outputs.send(Ok(msg.to_string()));
    }

    fn print_err(&mut self, msg: &str) {
        _ = self.outputs.send(Err(msg.to_string()));
    }
}
