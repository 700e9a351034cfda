mod strings;
mod terminal;

pub use strings::Strings;
pub use terminal::Terminal;

/// Where the shell reads commands from and writes messages to.
pub trait Interface {
    fn greeting(&self) -> Option<&str> {
        None
    }

    /// Next line of input, `None` once input has ended.
    fn read_line(&mut self) -> Option<String>;

    /// Report a normal message.
    fn print(&mut self, msg: &str);

    /// Report a failed command.
    fn print_err(&mut self, msg: &str);
}
