use crate::mach::Io;
use ::ansi_term::Style;
use ::linefeed::{DefaultTerminal, Interface, ReadResult, Signal};

/// ## Interactive terminal channel
///
/// Line editing and history come from linefeed. Error lines are shown
/// in bold.

pub struct LineEditor {
    interface: Interface<DefaultTerminal>,
}

impl LineEditor {
    pub fn new() -> std::io::Result<LineEditor> {
        let interface = Interface::new("sm")?;
        interface.set_report_signal(Signal::Interrupt, true);
        Ok(LineEditor { interface })
    }
}

impl Io for LineEditor {
    fn write(&mut self, s: &str) -> std::io::Result<()> {
        self.interface.write_fmt(format_args!("{}", s))
    }

    fn write_error(&mut self, s: &str) -> std::io::Result<()> {
        self.interface
            .write_fmt(format_args!("{}", Style::new().bold().paint(s)))
    }

    fn read(&mut self) -> std::io::Result<Option<String>> {
        match self.interface.read_line()? {
            ReadResult::Input(line) => {
                if !line.trim().is_empty() {
                    self.interface.add_history_unique(line.clone());
                }
                Ok(Some(line))
            }
            ReadResult::Signal(Signal::Interrupt) => {
                // Abandon the half-typed line and prompt again.
                self.interface.set_buffer("")?;
                Ok(Some(String::new()))
            }
            ReadResult::Signal(_) | ReadResult::Eof => Ok(None),
        }
    }
}
