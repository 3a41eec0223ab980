use super::ReplError;
use std::str::{FromStr, SplitWhitespace};

pub const DEFAULT_PUSH_PRIORITY: i32 = 1;

pub const HELP: &str = "\
=== available commands ===
create [name]             - create a priority queue and switch to it
use <name>                - switch to a queue
list                      - list queues
remove <name>             - remove a queue
push <value> [priority]   - push a value (priority defaults to 1)
pop                       - pop the highest priority value
top                       - show the highest priority value
size                      - show the number of values
empty                     - check whether the queue is empty
find <priority>           - find a value with the given priority
contains <priority>       - check for a value with the given priority
priority_of <value>       - show the priority of a value
help                      - show this help
exit                      - leave the playground
==========================";

#[derive(Debug, PartialEq)]
pub enum Command<E> {
    Create(Option<String>),
    Use(String),
    List,
    Remove(String),
    Push { value: E, priority: i32 },
    Pop,
    Top,
    Size,
    Empty,
    Find(i32),
    Contains(i32),
    PriorityOf(E),
    Help,
    Exit,
}

fn next_arg<'a>(args: &mut SplitWhitespace<'a>, what: &'static str) -> Result<&'a str, ReplError> {
    args.next().ok_or(ReplError::MissingArgument(what))
}

fn parse_arg<T: FromStr>(input: &str, what: &'static str) -> Result<T, ReplError> {
    input.parse().map_err(|_| ReplError::InvalidArgument {
        what,
        input: input.to_string(),
    })
}

impl<E: FromStr> Command<E> {
    // assumes the line has at least one word
    pub fn parse(line: &str) -> Result<Self, ReplError> {
        let mut args = line.split_whitespace();
        let action = next_arg(&mut args, "command")?;
        let command = match action {
            "create" => Command::Create(args.next().map(str::to_string)),
            "use" => Command::Use(next_arg(&mut args, "queue name")?.to_string()),
            "list" => Command::List,
            "remove" => Command::Remove(next_arg(&mut args, "queue name")?.to_string()),
            "push" => {
                let value = parse_arg(next_arg(&mut args, "value")?, "value")?;
                let priority = match args.next() {
                    Some(priority) => parse_arg(priority, "priority")?,
                    None => DEFAULT_PUSH_PRIORITY,
                };
                Command::Push { value, priority }
            }
            "pop" => Command::Pop,
            "top" => Command::Top,
            "size" => Command::Size,
            "empty" => Command::Empty,
            "find" => Command::Find(parse_arg(next_arg(&mut args, "priority")?, "priority")?),
            "contains" => {
                Command::Contains(parse_arg(next_arg(&mut args, "priority")?, "priority")?)
            }
            "priority_of" => Command::PriorityOf(parse_arg(next_arg(&mut args, "value")?, "value")?),
            "help" => Command::Help,
            "exit" => Command::Exit,
            other => return Err(ReplError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_priority_is_optional() {
        assert_eq!(
            Command::<i64>::parse("push 42 7"),
            Ok(Command::Push {
                value: 42,
                priority: 7
            })
        );
        assert_eq!(
            Command::<i64>::parse("push -3"),
            Ok(Command::Push {
                value: -3,
                priority: DEFAULT_PUSH_PRIORITY
            })
        );
    }

    #[test]
    fn values_parse_as_the_element_type() {
        assert_eq!(
            Command::<f64>::parse("push 2.5 -1"),
            Ok(Command::Push {
                value: 2.5,
                priority: -1
            })
        );
        assert_eq!(
            Command::<String>::parse("priority_of hello"),
            Ok(Command::PriorityOf("hello".to_string()))
        );
        assert_eq!(
            Command::<i64>::parse("push abc"),
            Err(ReplError::InvalidArgument {
                what: "value",
                input: "abc".to_string()
            })
        );
    }

    #[test]
    fn arguments_are_checked() {
        assert_eq!(
            Command::<i64>::parse("use"),
            Err(ReplError::MissingArgument("queue name"))
        );
        assert_eq!(
            Command::<i64>::parse("find high"),
            Err(ReplError::InvalidArgument {
                what: "priority",
                input: "high".to_string()
            })
        );
        assert_eq!(
            Command::<i64>::parse("create"),
            Ok(Command::Create(None))
        );
        assert_eq!(
            Command::<i64>::parse("create jobs"),
            Ok(Command::Create(Some("jobs".to_string())))
        );
    }

    #[test]
    fn unknown_commands_are_reported() {
        assert_eq!(
            Command::<i64>::parse("peek"),
            Err(ReplError::UnknownCommand("peek".to_string()))
        );
    }
}
