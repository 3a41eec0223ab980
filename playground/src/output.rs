use std::fmt::Display;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

pub fn write_colored<W: WriteColor>(output: &mut W, color: Color, text: &str) -> io::Result<()> {
    output.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(output, "{}", text)?;
    output.reset()
}

pub fn write_error<W: WriteColor, M: Display>(output: &mut W, msg: M) -> io::Result<()> {
    write_colored(output, Color::Red, "Error:")?;
    writeln!(output, " {}", msg)
}

pub fn write_passed<W: WriteColor>(output: &mut W) -> io::Result<()> {
    write_colored(output, Color::Green, "PASSED")?;
    writeln!(output)
}

pub fn write_failed<W: WriteColor, M: Display>(output: &mut W, reason: M) -> io::Result<()> {
    write_colored(output, Color::Red, "FAILED")?;
    writeln!(output, ": {}", reason)
}
