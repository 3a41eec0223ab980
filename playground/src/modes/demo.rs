use priority_queue::PriorityQueue;
use std::io::Write;

const DEMO_ENTRIES: [(i32, i32); 5] = [(5, 2), (10, 5), (3, 1), (7, 3), (15, 8)];

pub fn run_demo<W: Write>(output: &mut W) -> anyhow::Result<()> {
    writeln!(output, "=== priority queue demo ===")?;

    let mut queue = PriorityQueue::with_capacity(10);
    for (value, priority) in DEMO_ENTRIES {
        queue.push(value, priority)?;
    }

    writeln!(output, "queue size: {}", queue.len())?;
    writeln!(output, "queue capacity: {}", queue.capacity())?;
    writeln!(
        output,
        "top element: {} (priority: {})",
        queue.top()?,
        queue.top_priority()?
    )?;

    writeln!(output, "\nextracting all elements:")?;
    while !queue.is_empty() {
        writeln!(output, "popped: {}", queue.pop()?)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_pops_in_priority_order() {
        let mut output = vec![];
        run_demo(&mut output).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("queue size: 5"));
        assert!(output.contains("queue capacity: 10"));
        assert!(output.contains("top element: 15 (priority: 8)"));
        let popped: Vec<&str> = output
            .lines()
            .filter_map(|line| line.strip_prefix("popped: "))
            .collect();
        assert_eq!(popped, vec!["15", "10", "7", "5", "3"]);
    }
}
