//! Textual problem input.
//!
//! Line-oriented grammar, blank lines ignored, task lines and the
//! capacity line may appear in any order:
//!
//! ```text
//! task <name> max <number> [avg <number>]
//! max_cycle <number>
//! ```
//!
//! The `max`/`avg` keywords may follow the task name in either order.
//! If `max_cycle` is repeated, the last value wins.

use crate::error::ParseError;
use crate::models::{LineConfig, Task};
use crate::validation::validate_config;

/// Parses a task/capacity description into a validated [`LineConfig`].
///
/// # Errors
/// Returns the first failing check, in this priority: grammar errors
/// (`MalformedLine`) as encountered, then `EmptyInput`,
/// `MissingCapacity`, `InvalidCapacity`, `InvalidDuration`,
/// `InfeasibleTaskDuration`.
pub fn parse(text: &str) -> Result<LineConfig, ParseError> {
    let mut tasks = Vec::new();
    let mut cycle_limit = None;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens[0].to_ascii_lowercase().as_str() {
            "task" => tasks.push(parse_task_line(&tokens, index + 1, line)?),
            "max_cycle" => cycle_limit = Some(parse_capacity_line(&tokens, index + 1, line)?),
            _ => return Err(malformed(index + 1, line)),
        }
    }

    if tasks.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let cycle_limit = cycle_limit.ok_or(ParseError::MissingCapacity)?;

    let config = LineConfig::new(tasks, cycle_limit);
    validate_config(&config)?;
    Ok(config)
}

fn malformed(line_no: usize, line: &str) -> ParseError {
    ParseError::MalformedLine {
        line_no,
        line: line.to_string(),
    }
}

/// `task <name> max <number> [avg <number>]`, keywords in either order.
fn parse_task_line(tokens: &[&str], line_no: usize, line: &str) -> Result<Task, ParseError> {
    if tokens.len() < 2 {
        return Err(malformed(line_no, line));
    }
    let name = tokens[1];

    let mut max_duration = None;
    let mut avg_duration = None;

    let mut rest = tokens[2..].iter();
    while let Some(keyword) = rest.next() {
        let value = rest
            .next()
            .and_then(|v| v.parse::<f64>().ok())
            .ok_or_else(|| malformed(line_no, line))?;
        match keyword.to_ascii_lowercase().as_str() {
            "max" => max_duration = Some(value),
            "avg" => avg_duration = Some(value),
            _ => return Err(malformed(line_no, line)),
        }
    }

    let max_duration = max_duration.ok_or_else(|| malformed(line_no, line))?;
    let mut task = Task::new(name, max_duration);
    if let Some(avg) = avg_duration {
        task = task.with_avg_duration(avg);
    }
    Ok(task)
}

/// `max_cycle <number>`
fn parse_capacity_line(tokens: &[&str], line_no: usize, line: &str) -> Result<f64, ParseError> {
    if tokens.len() != 2 {
        return Err(malformed(line_no, line));
    }
    tokens[1]
        .parse::<f64>()
        .map_err(|_| malformed(line_no, line))
}
