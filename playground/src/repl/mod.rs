mod command;

pub use command::{Command, DEFAULT_PUSH_PRIORITY, HELP};

use crate::output::write_error;
use priority_queue::{PriorityQueue, PriorityQueueError, QueueConfig};
use prompt::read_trimmed_line;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use termcolor::WriteColor;
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum ReplError {
    #[error("unknown command '{0}', type 'help' for available commands")]
    UnknownCommand(String),
    #[error("missing {0}")]
    MissingArgument(&'static str),
    #[error("invalid {what} '{input}'")]
    InvalidArgument { what: &'static str, input: String },
    #[error("no queue selected, use 'create' or 'use <name>' first")]
    NoQueueSelected,
    #[error("queue '{0}' not found")]
    QueueNotFound(String),
    #[error("queue '{0}' already exists")]
    QueueExists(String),
    #[error(transparent)]
    Queue(#[from] PriorityQueueError),
}

/// Values the playground can store: parsed from a command word, printed back.
pub trait Element: FromStr + Display + PartialEq {}

impl<T: FromStr + Display + PartialEq> Element for T {}

/// A set of named priority queues, one of which is current.
pub struct Session<E> {
    queues: BTreeMap<String, PriorityQueue<E>>,
    current: Option<String>,
    created: usize,
    config: QueueConfig,
}

impl<E: Element> Session<E> {
    pub fn new(config: QueueConfig) -> Self {
        Self {
            queues: BTreeMap::new(),
            current: None,
            created: 0,
            config,
        }
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    fn current_queue(&mut self) -> Result<&mut PriorityQueue<E>, ReplError> {
        let name = self.current.as_ref().ok_or(ReplError::NoQueueSelected)?;
        self.queues
            .get_mut(name)
            .ok_or_else(|| ReplError::QueueNotFound(name.clone()))
    }

    /// Runs one command and returns the text to show for it, or `None` once
    /// the session should end.
    pub fn execute(&mut self, command: Command<E>) -> Result<Option<String>, ReplError> {
        let reply = match command {
            Command::Create(name) => {
                let name = match name {
                    Some(name) => name,
                    None => loop {
                        self.created += 1;
                        let name = format!("priority_queue_{}", self.created);
                        if !self.queues.contains_key(&name) {
                            break name;
                        }
                    },
                };
                if self.queues.contains_key(&name) {
                    return Err(ReplError::QueueExists(name));
                }
                log::debug!("creating queue '{}' with {:?}", name, self.config);
                let queue = PriorityQueue::try_with_config(self.config)?;
                self.queues.insert(name.clone(), queue);
                self.current = Some(name.clone());
                format!("created '{}'\nnow using: {}", name, name)
            }
            Command::Use(name) => {
                if !self.queues.contains_key(&name) {
                    return Err(ReplError::QueueNotFound(name));
                }
                let reply = format!("now using: {}", name);
                self.current = Some(name);
                reply
            }
            Command::List => {
                if self.queues.is_empty() {
                    "no queues created".to_string()
                } else {
                    let mut lines = vec!["available queues:".to_string()];
                    for (name, queue) in &self.queues {
                        let marker = if self.current.as_ref() == Some(name) {
                            " [current]"
                        } else {
                            ""
                        };
                        lines.push(format!(
                            " {}{} - size: {} - capacity: {} - empty: {}",
                            name,
                            marker,
                            queue.len(),
                            queue.capacity(),
                            if queue.is_empty() { "yes" } else { "no" }
                        ));
                    }
                    lines.join("\n")
                }
            }
            Command::Remove(name) => {
                if self.queues.remove(&name).is_none() {
                    return Err(ReplError::QueueNotFound(name));
                }
                if self.current.as_ref() == Some(&name) {
                    self.current = None;
                }
                format!("removed: {}", name)
            }
            Command::Push { value, priority } => {
                let reply = format!("pushed: {} with priority {}", value, priority);
                self.current_queue()?.push(value, priority)?;
                reply
            }
            Command::Pop => {
                let entry = self.current_queue()?.pop_entry()?;
                format!("popped: {} (priority {})", entry.value, entry.priority)
            }
            Command::Top => {
                let queue = self.current_queue()?;
                let entry = queue.top_entry()?;
                format!("top: {} (priority {})", entry.value, entry.priority)
            }
            Command::Size => {
                let queue = self.current_queue()?;
                format!("size: {} (capacity {})", queue.len(), queue.capacity())
            }
            Command::Empty => {
                if self.current_queue()?.is_empty() {
                    "empty".to_string()
                } else {
                    "not empty".to_string()
                }
            }
            Command::Find(priority) => {
                let value = self.current_queue()?.find_by_priority(priority)?;
                format!("found: {} with priority {}", value, priority)
            }
            Command::Contains(priority) => {
                if self.current_queue()?.contains_by_priority(priority) {
                    format!("a value with priority {} is queued", priority)
                } else {
                    format!("no value with priority {} is queued", priority)
                }
            }
            Command::PriorityOf(value) => match self.current_queue()?.find_by_value(&value) {
                Some(priority) => format!("priority of {}: {}", value, priority),
                None => format!("{} is not queued", value),
            },
            Command::Help => HELP.to_string(),
            Command::Exit => return Ok(None),
        };
        Ok(Some(reply))
    }

    /// Reads commands until `exit` or the end of input. Command errors are
    /// printed and the loop carries on.
    pub fn run<R: BufRead, W: WriteColor>(&mut self, input: &mut R, output: &mut W) -> io::Result<()> {
        writeln!(output, "\n=== playground mode ===")?;
        writeln!(output, "type 'help' for commands")?;
        loop {
            match self.current_name() {
                Some(name) => write!(output, "playground [{}]> ", name)?,
                None => write!(output, "playground> ")?,
            }
            output.flush()?;
            let Some(line) = read_trimmed_line(input)? else {
                break;
            };
            if line.is_empty() {
                continue;
            }
            match Command::parse(&line).and_then(|command| self.execute(command)) {
                Ok(Some(reply)) => writeln!(output, "{}", reply)?,
                Ok(None) => {
                    writeln!(output, "exiting playground...")?;
                    break;
                }
                Err(e) => {
                    log::debug!("command '{}' failed: {:?}", line, e);
                    write_error(output, e)?;
                }
            }
        }
        Ok(())
    }
}
