use commands::CmdError;
use turtle::Turtle;

pub mod commands;
pub mod config;
pub mod interface;
pub mod render;
pub mod shell;
pub mod state;
pub mod turtle;
pub mod window;

#[cfg(test)]
mod test;

/// Things that can go wrong outside of the interactive shell.
///
/// * Reading a script file might return an error
/// * A line of a script might not be a valid command
#[derive(Debug, thiserror::Error)]
pub enum LogoError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    #[error("{error} at line {line}")]
    Script { line: usize, error: CmdError },
}

/// Read a script file into lines.
pub fn read_script(path: &str) -> Result<Vec<String>, LogoError> {
    Ok(std::fs::read_to_string(path)?
        .lines()
        .map(str::to_string)
        .collect())
}

/// Run every line of a script on a fresh turtle.
///
/// Blank lines and shell commands (starting with `/`) are skipped.
/// Stops at the first invalid line, reporting its 1-based line number.
pub fn check_script(src: &str) -> Result<Turtle, LogoError> {
    let mut ttl = Turtle::new();
    for (idx, line) in src.lines().enumerate() {
        if line.trim_start().starts_with('/') {
            continue;
        }
        if let Some(Err(error)) = commands::dispatch_line(&mut ttl, line) {
            return Err(LogoError::Script {
                line: idx + 1,
                error,
            });
        }
    }
    Ok(ttl)
}

/// Install the global tracing subscriber.
///
/// Logs go to stderr so they don't mix with shell output. The level is
/// taken from `RUST_LOG` and defaults to warnings only.
pub fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
