use std::{fmt::Display, num::ParseIntError, sync::LazyLock};

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::turtle::{Turtle, Undo};

/// What a successfully dispatched command did to the turtle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// a new state was added to the history
    Appended,
    /// only the background changed
    Background,
    Reset,
    Undone,
    /// undo on an empty history, the turtle has been reset
    UndoExhausted,
}

type Handler = fn(&mut Turtle, &[i32]) -> Applied;

/// An entry of the command vocabulary.
pub struct CommandSpec {
    pub token: &'static str,
    pub help: &'static str,
    /// names of the integer parameters, in order
    pub params: &'static [&'static str],
    handler: Handler,
}

impl CommandSpec {
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl Display for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut usage = self.token.to_string();
        for param in self.params {
            usage.push_str(" <");
            usage.push_str(param);
            usage.push('>');
        }
        write!(f, "{usage:<20} - {}", self.help)
    }
}

macro_rules! vocabulary {
    ($(
        $token:literal ( $($param:ident),* ) $help:literal
        => |$ttl:ident $(, $args:ident)?| $body:expr
    ),+ $(,)?) => {
        IndexMap::from([$(
            (
                $token,
                CommandSpec {
                    token: $token,
                    help: $help,
                    params: &[$(stringify!($param)),*],
                    handler: |$ttl, _args| {
                        $(let $args = _args;)?
                        $body
                    },
                },
            ),
        )+])
    };
}

/// All known commands, by token.
pub static VOCABULARY: LazyLock<IndexMap<&'static str, CommandSpec>> = LazyLock::new(|| {
    vocabulary! {
        "mv" (x, y) "move to absolute position"
            => |ttl, a| { ttl.move_to(a[0], a[1]); Applied::Appended },
        "hd" (deg) "face absolute direction"
            => |ttl, a| { ttl.heading(a[0]); Applied::Appended },
        "fw" (dist) "move forward"
            => |ttl, a| { ttl.forward(a[0]); Applied::Appended },
        "bk" (dist) "move backward"
            => |ttl, a| { ttl.back(a[0]); Applied::Appended },
        "tl" (deg) "turn left"
            => |ttl, a| { ttl.turn_left(a[0]); Applied::Appended },
        "tr" (deg) "turn right"
            => |ttl, a| { ttl.turn_right(a[0]); Applied::Appended },
        "pu" () "pen up"
            => |ttl| { ttl.pen_up(); Applied::Appended },
        "pd" () "pen down"
            => |ttl| { ttl.pen_down(); Applied::Appended },
        "pc" (r, g, b) "pen color, components 0-255"
            => |ttl, a| { ttl.pen_color(a[0], a[1], a[2]); Applied::Appended },
        "bg" (r, g, b) "background color, components 0-255"
            => |ttl, a| { ttl.set_background(a[0], a[1], a[2]); Applied::Background },
        "rs" () "reset drawing"
            => |ttl| { ttl.reset(); Applied::Reset },
        "un" () "undo last command"
            => |ttl| match ttl.undo() {
                Undo::Undone => Applied::Undone,
                Undo::Exhausted => Applied::UndoExhausted,
            },
        "re" (w, h) "rectangle below and beside the turtle"
            => |ttl, a| { ttl.rectangle(a[0], a[1]); Applied::Appended },
    }
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
    #[error("expected {expected} parameters, got {got}")]
    Arity { expected: usize, got: usize },
    #[error("{param:?} is not an integer: {source}")]
    NotInteger {
        param: String,
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CmdError {
    #[error("\"{input}\" not understood: {cause}")]
    Malformed { input: String, cause: ParamError },
    #[error("\"{0}\" not recognized")]
    Unrecognized(String),
}

fn raw_input(name: &str, params: &[&str]) -> String {
    std::iter::once(name)
        .chain(params.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse the parameters of a command.
///
/// Commands without parameters ignore anything following the token.
fn parse_params(spec: &CommandSpec, params: &[&str]) -> Result<Vec<i32>, ParamError> {
    if spec.arity() == 0 {
        return Ok(Vec::new());
    }
    if params.len() != spec.arity() {
        return Err(ParamError::Arity {
            expected: spec.arity(),
            got: params.len(),
        });
    }
    params
        .iter()
        .map(|param| {
            param.parse().map_err(|source| ParamError::NotInteger {
                param: param.to_string(),
                source,
            })
        })
        .collect()
}

/// Run a single command on the turtle.
///
/// All parameters are checked before the turtle is touched, so a failed
/// command never changes anything.
pub fn dispatch(ttl: &mut Turtle, name: &str, params: &[&str]) -> Result<Applied, CmdError> {
    let Some(spec) = VOCABULARY.get(name) else {
        let input = raw_input(name, params);
        warn!(%input, "unrecognized command");
        return Err(CmdError::Unrecognized(input));
    };
    let args = parse_params(spec, params).map_err(|cause| {
        let input = raw_input(name, params);
        warn!(%input, %cause, "malformed command");
        CmdError::Malformed { input, cause }
    })?;
    let applied = (spec.handler)(ttl, &args);
    debug!(
        cmd = spec.token,
        ?args,
        ?applied,
        history = ttl.history().len(),
        "command applied"
    );
    Ok(applied)
}

/// Split a line on whitespace and dispatch it.
///
/// Returns `None` for blank lines.
pub fn dispatch_line(ttl: &mut Turtle, line: &str) -> Option<Result<Applied, CmdError>> {
    let mut words = line.split_whitespace();
    let name = words.next()?;
    let params: Vec<&str> = words.collect();
    Some(dispatch(ttl, name, &params))
}
