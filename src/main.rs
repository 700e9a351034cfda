use clap::Parser;
#[cfg(feature = "sdl")]
use logo::window::SdlWindow;
use logo::{config::RunConfig, window::Window};

use cli::*;

mod cli;

impl Display {
    #[cfg_attr(not(feature = "sdl"), allow(unused_variables))]
    fn as_boxed(&self, title: &str) -> Box<dyn Window> {
        match self {
            #[cfg(feature = "sdl")]
            Display::Sdl => Box::new(SdlWindow::create(title.to_string())),
            Display::Void => Box::new(()),
        }
    }
}

fn read_script(file: &str) -> Vec<String> {
    match logo::read_script(file) {
        Ok(lines) => lines,
        Err(why) => {
            eprintln!("could not read {file}: {why}");
            std::process::exit(1)
        }
    }
}

fn main() {
    logo::init_logging();
    let cli = Cli::parse();
    match cli.command {
        LCommand::Shell { window, script } => {
            let script = script.as_deref().map(read_script).unwrap_or_default();
            RunConfig::new()
                .window(window.as_boxed("Logo"))
                .script(script)
                .exec();
        }
        LCommand::Check { file, verbose } => {
            let src = read_script(&file).join("\n");
            match logo::check_script(&src) {
                Ok(ttl) if verbose => println!("turtle ends at {}", ttl.current()),
                Ok(_) => {}
                Err(why) => {
                    eprintln!("invalid command file: {why}");
                    std::process::exit(1)
                }
            }
        }
    }
}
