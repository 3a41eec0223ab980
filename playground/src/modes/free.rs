// Scratch program: fill a queue, then drain it on one line.

use priority_queue::PriorityQueue;
use std::io::Write;

pub fn run_free<W: Write>(output: &mut W) -> anyhow::Result<()> {
    let mut queue = PriorityQueue::with_capacity(10);
    writeln!(output, "capacity: {}", queue.capacity())?;

    for value in [2, 3, 1, 4, 5, 2, 9, 3, 7, 6] {
        queue.push(value, value)?;
    }
    writeln!(output, "size: {}", queue.len())?;
    writeln!(output, "top: {}", queue.top()?)?;
    writeln!(output, "top priority: {}", queue.top_priority()?)?;

    let mut popped = vec![];
    while let Ok(value) = queue.pop() {
        popped.push(value.to_string());
    }
    writeln!(output, "{}", popped.join(" "))?;

    writeln!(output, "size: {}", queue.len())?;
    Ok(())
}
