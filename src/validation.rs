//! Input validation for balancing problems.
//!
//! Checks a [`LineConfig`] and its precedence edges before any model is
//! built. Both the parser and the balancer run these checks, so
//! programmatic callers get the same guarantees as text callers.
//!
//! Checks, in priority order:
//! 1. At least one task
//! 2. Positive cycle limit
//! 3. Positive max/avg duration on every task
//! 4. No task's max duration exceeds the cycle limit
//! 5. Precedence edges reference existing task indices

use crate::error::ParseError;
use crate::models::{LineConfig, PrecedenceEdge};

/// Validates a problem instance.
///
/// # Returns
/// `Ok(())` if all checks pass, otherwise the first failing check's
/// [`ParseError`] in the priority order above.
pub fn validate_config(config: &LineConfig) -> Result<(), ParseError> {
    if config.tasks.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    if config.cycle_limit <= 0.0 {
        return Err(ParseError::InvalidCapacity {
            value: config.cycle_limit,
        });
    }

    for task in &config.tasks {
        if task.max_duration <= 0.0 || task.avg_duration <= 0.0 {
            return Err(ParseError::InvalidDuration {
                task: task.name.clone(),
            });
        }
    }

    for task in &config.tasks {
        if task.max_duration > config.cycle_limit {
            return Err(ParseError::InfeasibleTaskDuration {
                task: task.name.clone(),
                duration: task.max_duration,
                cycle_limit: config.cycle_limit,
            });
        }
    }

    Ok(())
}

/// Validates that every precedence edge references an existing task.
///
/// Cyclic edges are deliberately NOT rejected: a cycle is satisfiable by
/// co-locating its tasks in one station, so a contradiction can only
/// manifest as solver infeasibility together with capacity.
pub fn validate_precedence(
    edges: &[PrecedenceEdge],
    task_count: usize,
) -> Result<(), ParseError> {
    for edge in edges {
        for index in [edge.predecessor, edge.successor] {
            if index >= task_count {
                return Err(ParseError::InvalidPrecedence { index, task_count });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn valid_config() -> LineConfig {
        LineConfig::new(vec![Task::new("a", 10.0), Task::new("b", 20.0)], 30.0)
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_empty_tasks() {
        let config = LineConfig::new(vec![], 30.0);
        assert_eq!(validate_config(&config), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_non_positive_capacity() {
        let config = LineConfig::new(vec![Task::new("a", 10.0)], 0.0);
        assert_eq!(
            validate_config(&config),
            Err(ParseError::InvalidCapacity { value: 0.0 })
        );
    }

    #[test]
    fn test_non_positive_duration() {
        let config = LineConfig::new(vec![Task::new("a", 0.0)], 30.0);
        assert!(matches!(
            validate_config(&config),
            Err(ParseError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn test_non_positive_avg_duration() {
        let config = LineConfig::new(
            vec![Task::new("a", 10.0).with_avg_duration(-1.0)],
            30.0,
        );
        assert!(matches!(
            validate_config(&config),
            Err(ParseError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn test_task_exceeding_capacity() {
        let config = LineConfig::new(vec![Task::new("a", 40.0)], 30.0);
        assert!(matches!(
            validate_config(&config),
            Err(ParseError::InfeasibleTaskDuration { .. })
        ));
    }

    #[test]
    fn test_duration_checked_before_capacity_fit() {
        // Task "b" exceeds the cycle limit, but "a" has an invalid
        // duration — the duration check wins across all tasks.
        let config = LineConfig::new(
            vec![Task::new("b", 40.0), Task::new("a", -1.0)],
            30.0,
        );
        assert!(matches!(
            validate_config(&config),
            Err(ParseError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn test_avg_duration_not_capacity_checked() {
        // avg above the cycle limit is informational, never rejected.
        let config = LineConfig::new(
            vec![Task::new("a", 10.0).with_avg_duration(100.0)],
            30.0,
        );
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_precedence_in_range() {
        let edges = vec![PrecedenceEdge::new(0, 1)];
        assert!(validate_precedence(&edges, 2).is_ok());
    }

    #[test]
    fn test_precedence_out_of_range() {
        let edges = vec![PrecedenceEdge::new(0, 2)];
        assert_eq!(
            validate_precedence(&edges, 2),
            Err(ParseError::InvalidPrecedence {
                index: 2,
                task_count: 2
            })
        );
    }

    #[test]
    fn test_precedence_cycle_allowed() {
        let edges = vec![PrecedenceEdge::new(0, 1), PrecedenceEdge::new(1, 0)];
        assert!(validate_precedence(&edges, 2).is_ok());
    }
}
