use std::io::{self, Write};

use tracing::{error, warn};

use super::Interface;

/// The default [`Interface`].
///
/// Input is read from stdin and output printed to stdout / stderr.
pub struct Terminal;

impl Interface for Terminal {
    fn greeting(&self) -> Option<&str> {
        Some(concat!(
            "logo shell v",
            env!("CARGO_PKG_VERSION"),
            "\nenter '/help' to view available commands"
        ))
    }

    fn read_line(&mut self) -> Option<String> {
        print!("> ");
        _ = std::io::stdout().flush();
        next_line(&mut io::stdin().lines())
    }

    fn print(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn print_err(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}

/// Next line that can be decoded.
///
/// Lines that aren't valid UTF-8 are reported and skipped. Any other
/// read error ends the input.
fn next_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<String> {
    for line in lines {
        match line {
            Ok(line) => return Some(line),
            Err(why) if why.kind() == io::ErrorKind::InvalidData => {
                warn!("skipping undecodable line: {why}");
                eprintln!("line skipped: {why}");
            }
            Err(why) => {
                error!("could not read input: {why}");
                return None;
            }
        }
    }
    None
}
