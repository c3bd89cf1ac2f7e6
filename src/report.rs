//! Textual solution report.
//!
//! Formats a [`Solution`] into a deterministic multi-section report.
//! The section labels ("Stations Used:", "Theoretical Minimum:",
//! "Is Optimal:", "Station Assignments:", ...) are an external contract:
//! downstream consumers match on their literal presence, so changing
//! them is a breaking change.

use crate::metrics::Solution;

const RULE_WIDTH: usize = 70;

/// Renders the full dual-regime report.
pub fn render(solution: &Solution) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = Vec::new();

    lines.push(rule.clone());
    lines.push("ASSEMBLY LINE BALANCING SOLUTION".to_string());
    lines.push(rule);
    lines.push(String::new());

    lines.push(format!("Stations Used: {}", solution.stations_used));
    lines.push(format!(
        "Theoretical Minimum: {}",
        solution.theoretical_min_stations
    ));
    lines.push(format!(
        "Is Optimal: {}",
        if solution.is_optimal { "Yes" } else { "No" }
    ));
    lines.push(String::new());

    lines.push("Using Maximum Durations (Worst-Case):".to_string());
    lines.push(format!(
        "  Overall Efficiency: {:.2}%",
        solution.efficiency_max
    ));
    lines.push(format!("  Balance Delay: {:.2}%", solution.balance_delay));
    lines.push(format!("  Max Cycle Time: {:.2}", solution.actual_max_cycle));
    lines.push(String::new());

    lines.push("Using Average Durations (Expected):".to_string());
    lines.push(format!(
        "  Overall Efficiency: {:.2}%",
        solution.efficiency_avg
    ));
    lines.push(format!("  Max Cycle Time: {:.2}", solution.actual_avg_cycle));
    lines.push(String::new());

    lines.push("Station Assignments:".to_string());
    for (k, station) in solution.assignment.stations().iter().enumerate() {
        let names: Vec<&str> = station
            .iter()
            .map(|&i| solution.tasks[i].name.as_str())
            .collect();
        lines.push(format!("  Station {}: {}", k + 1, names.join(", ")));
        lines.push(format!(
            "    Max Load: {:.2} (Eff: {:.1}%)",
            solution.cycle_times_max[k], solution.station_efficiencies_max[k]
        ));
        lines.push(format!(
            "    Avg Load: {:.2} (Eff: {:.1}%)",
            solution.cycle_times_avg[k], solution.station_efficiencies_avg[k]
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LineConfig, StationAssignment, Task};

    fn sample_solution() -> Solution {
        let config = LineConfig::new(
            vec![
                Task::new("paint", 10.0).with_avg_duration(7.0),
                Task::new("hammer", 30.0).with_avg_duration(27.0),
                Task::new("assemble", 50.0).with_avg_duration(40.0),
                Task::new("inspect", 15.0).with_avg_duration(12.0),
            ],
            60.0,
        );
        let assignment = StationAssignment::new(vec![vec![0, 2], vec![1, 3]]);
        Solution::calculate(&config, assignment)
    }

    #[test]
    fn test_contract_labels_present() {
        let report = render(&sample_solution());
        for label in [
            "ASSEMBLY LINE BALANCING SOLUTION",
            "Stations Used:",
            "Theoretical Minimum:",
            "Is Optimal:",
            "Using Maximum Durations (Worst-Case):",
            "Using Average Durations (Expected):",
            "Overall Efficiency:",
            "Balance Delay:",
            "Max Cycle Time:",
            "Station Assignments:",
        ] {
            assert!(report.contains(label), "missing label: {label}");
        }
    }

    #[test]
    fn test_exact_summary_lines() {
        let report = render(&sample_solution());
        assert!(report.contains("Stations Used: 2"));
        assert!(report.contains("Theoretical Minimum: 2"));
        assert!(report.contains("Is Optimal: Yes"));
        assert!(report.contains("  Overall Efficiency: 87.50%"));
        assert!(report.contains("  Balance Delay: 12.50%"));
        assert!(report.contains("  Max Cycle Time: 60.00"));
    }

    #[test]
    fn test_station_breakdown() {
        let report = render(&sample_solution());
        assert!(report.contains("  Station 1: paint, assemble"));
        assert!(report.contains("    Max Load: 60.00 (Eff: 100.0%)"));
        assert!(report.contains("    Avg Load: 47.00 (Eff: 78.3%)"));
        assert!(report.contains("  Station 2: hammer, inspect"));
        assert!(report.contains("    Max Load: 45.00 (Eff: 75.0%)"));
        assert!(report.contains("    Avg Load: 39.00 (Eff: 65.0%)"));
    }

    #[test]
    fn test_report_is_deterministic() {
        assert_eq!(render(&sample_solution()), render(&sample_solution()));
    }

    #[test]
    fn test_suboptimal_flagged_no() {
        let config = LineConfig::new(vec![Task::new("a", 2.0), Task::new("b", 2.0)], 5.0);
        let assignment = StationAssignment::new(vec![vec![0], vec![1]]);
        let solution = Solution::calculate(&config, assignment);

        let report = render(&solution);
        assert!(report.contains("Is Optimal: No"));
    }
}
