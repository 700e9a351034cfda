use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: LCommand,
}

#[derive(Subcommand)]
pub enum LCommand {
    /// Start the interactive turtle shell
    Shell {
        /// display mechanism
        #[arg(short, long, default_value_t)]
        window: Display,
        /// file with commands to run before reading input
        #[arg(short, long)]
        script: Option<String>,
    },
    /// Check every line of a command file
    Check {
        /// file with one command per line
        file: String,
        /// print the final turtle if all lines are valid
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default)]
pub enum Display {
    /// use SDL2 to draw the turtle
    #[cfg(feature = "sdl")]
    #[cfg_attr(feature = "sdl", default)]
    Sdl,
    /// no display
    #[cfg_attr(not(feature = "sdl"), default)]
    Void,
}

impl std::fmt::Display for Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "sdl")]
            Display::Sdl => write!(f, "sdl"),
            Display::Void => write!(f, "void"),
        }
    }
}
