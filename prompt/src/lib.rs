use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Demo,
    Test,
    Free,
    Playground,
    Exit,
}

impl FromStr for Mode {
    type Err = String;

    // accepts the menu numbers as well as the names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "demo" => Ok(Mode::Demo),
            "2" | "test" => Ok(Mode::Test),
            "3" | "free" => Ok(Mode::Free),
            "4" | "playground" => Ok(Mode::Playground),
            "5" | "exit" => Ok(Mode::Exit),
            other => Err(format!("invalid mode '{}'", other)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Demo => "demo",
            Mode::Test => "test",
            Mode::Free => "free",
            Mode::Playground => "playground",
            Mode::Exit => "exit",
        };
        f.write_str(name)
    }
}

/// The element type stored in playground queues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementKind {
    #[default]
    Int,
    Double,
    Text,
}

impl FromStr for ElementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "int" | "integer" => Ok(ElementKind::Int),
            "double" | "float" => Ok(ElementKind::Double),
            "string" | "text" => Ok(ElementKind::Text),
            other => Err(format!("unsupported type '{}'", other)),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Int => "int",
            ElementKind::Double => "double",
            ElementKind::Text => "string",
        };
        f.write_str(name)
    }
}

// None once the input is exhausted
pub fn read_trimmed_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub fn prompt_user_for_mode<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Mode>> {
    loop {
        writeln!(output, "\nselect mode:")?;
        writeln!(output, "1. demo - automatic push and pop elements")?;
        writeln!(output, "2. test - run all tests")?;
        writeln!(output, "3. free - run the scratch program")?;
        writeln!(output, "4. playground - interactive mode")?;
        writeln!(output, "5. exit - stop the program")?;
        write!(output, "enter a mode: ")?;
        output.flush()?;
        let Some(line) = read_trimmed_line(input)? else {
            return Ok(None);
        };
        match line.parse() {
            Ok(mode) => return Ok(Some(mode)),
            Err(e) => writeln!(output, "{}, please try again", e)?,
        }
    }
}

pub fn prompt_user_for_element_kind<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<ElementKind>> {
    const DEFAULT_KIND: ElementKind = ElementKind::Int;
    write!(
        output,
        "select data type: int, double or string (keep blank for {DEFAULT_KIND}): "
    )?;
    output.flush()?;
    let Some(line) = read_trimmed_line(input)? else {
        return Ok(None);
    };
    if line.is_empty() {
        return Ok(Some(DEFAULT_KIND));
    }
    match line.parse() {
        Ok(kind) => Ok(Some(kind)),
        Err(e) => {
            writeln!(output, "{}, using {} by default", e, DEFAULT_KIND)?;
            Ok(Some(DEFAULT_KIND))
        }
    }
}

pub fn prompt_user_for_confirm<R: BufRead, W: Write>(
    msg: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<bool>> {
    loop {
        write!(output, "{} (y/n): ", msg)?;
        output.flush()?;
        let Some(line) = read_trimmed_line(input)? else {
            return Ok(None);
        };
        match line.to_lowercase().as_str() {
            "y" | "yes" => return Ok(Some(true)),
            "n" | "no" => return Ok(Some(false)),
            _ => writeln!(output, "please enter 'y' or 'n'")?,
        }
    }
}
