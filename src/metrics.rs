//! Line performance metrics.
//!
//! Computes dual-regime indicators from a station partition: every
//! figure exists once for worst-case (`max`) durations and once for
//! expected (`avg`) durations.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Station load | Sum of durations assigned to one station |
//! | Station efficiency | load / cycle_limit · 100 |
//! | Overall efficiency | Σ durations / (stations · cycle_limit) · 100 |
//! | Balance delay | 100 − overall efficiency (max regime) |
//! | Actual cycle | Largest station load |
//! | Theoretical minimum | ceil(Σ max durations / cycle_limit) |
//!
//! # Reference
//! Groover (2015), "Work Systems and the Methods, Measurement, and
//! Management of Work", Ch. 17

use serde::{Deserialize, Serialize};

use crate::models::{LineConfig, StationAssignment, Task};

/// A balanced line with its full dual-regime analysis.
///
/// Derived, immutable, computed once per request. The `avg` figures are
/// informational: a station's expected load may legitimately exceed the
/// cycle limit even though its worst-case load never does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// The tasks, in input order (indices match the assignment).
    pub tasks: Vec<Task>,
    /// Partition of task indices into line-ordered stations.
    pub assignment: StationAssignment,
    /// Number of stations in use.
    pub stations_used: usize,
    /// Per-station worst-case load.
    pub cycle_times_max: Vec<f64>,
    /// Per-station expected load.
    pub cycle_times_avg: Vec<f64>,
    /// Overall efficiency under worst-case durations (%).
    pub efficiency_max: f64,
    /// Overall efficiency under expected durations (%).
    pub efficiency_avg: f64,
    /// Per-station efficiency under worst-case durations (%).
    pub station_efficiencies_max: Vec<f64>,
    /// Per-station efficiency under expected durations (%).
    pub station_efficiencies_avg: Vec<f64>,
    /// Idle-time percentage: `100 − efficiency_max`.
    pub balance_delay: f64,
    /// Largest worst-case station load.
    pub actual_max_cycle: f64,
    /// Largest expected station load.
    pub actual_avg_cycle: f64,
    /// Capacity-implied lower bound on station count.
    pub theoretical_min_stations: usize,
    /// Whether `stations_used` meets the theoretical minimum.
    pub is_optimal: bool,
}

impl Solution {
    /// Computes all metrics for a station partition.
    ///
    /// The assignment must be a valid non-empty partition of the
    /// configuration's tasks; this stage has no failure modes of its own.
    pub fn calculate(config: &LineConfig, assignment: StationAssignment) -> Self {
        debug_assert!(assignment.is_partition_of(config.task_count()));

        let stations_used = assignment.station_count();
        let mut cycle_times_max = Vec::with_capacity(stations_used);
        let mut cycle_times_avg = Vec::with_capacity(stations_used);
        let mut station_efficiencies_max = Vec::with_capacity(stations_used);
        let mut station_efficiencies_avg = Vec::with_capacity(stations_used);

        for station in assignment.stations() {
            let load_max: f64 = station.iter().map(|&i| config.tasks[i].max_duration).sum();
            let load_avg: f64 = station.iter().map(|&i| config.tasks[i].avg_duration).sum();

            station_efficiencies_max.push(load_max / config.cycle_limit * 100.0);
            station_efficiencies_avg.push(load_avg / config.cycle_limit * 100.0);
            cycle_times_max.push(load_max);
            cycle_times_avg.push(load_avg);
        }

        let available = stations_used as f64 * config.cycle_limit;
        let efficiency_max = config.total_max_duration() / available * 100.0;
        let efficiency_avg = config.total_avg_duration() / available * 100.0;
        let balance_delay = 100.0 - efficiency_max;

        let actual_max_cycle = cycle_times_max.iter().copied().fold(0.0, f64::max);
        let actual_avg_cycle = cycle_times_avg.iter().copied().fold(0.0, f64::max);

        let theoretical_min_stations = config.theoretical_min_stations();
        let is_optimal = stations_used == theoretical_min_stations;

        Self {
            tasks: config.tasks.clone(),
            assignment,
            stations_used,
            cycle_times_max,
            cycle_times_avg,
            efficiency_max,
            efficiency_avg,
            station_efficiencies_max,
            station_efficiencies_avg,
            balance_delay,
            actual_max_cycle,
            actual_avg_cycle,
            theoretical_min_stations,
            is_optimal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_task_config() -> LineConfig {
        LineConfig::new(
            vec![
                Task::new("a", 3.0).with_avg_duration(2.5),
                Task::new("b", 2.0).with_avg_duration(1.8),
                Task::new("c", 4.0).with_avg_duration(3.2),
                Task::new("d", 2.0).with_avg_duration(1.5),
            ],
            5.0,
        )
    }

    #[test]
    fn test_dual_regime_metrics() {
        let config = four_task_config();
        // One optimal partition into ceil(11/5) = 3 stations.
        let assignment = StationAssignment::new(vec![vec![0, 1], vec![2], vec![3]]);
        let solution = Solution::calculate(&config, assignment);

        assert_eq!(solution.stations_used, 3);
        assert_eq!(solution.theoretical_min_stations, 3);
        assert!(solution.is_optimal);
        // 11 / 15 · 100
        assert!((solution.efficiency_max - 73.333_333_333_333_33).abs() < 1e-9);
        // 9 / 15 · 100
        assert!((solution.efficiency_avg - 60.0).abs() < 1e-9);
        assert!((solution.balance_delay - 26.666_666_666_666_67).abs() < 1e-9);
    }

    #[test]
    fn test_per_station_figures() {
        let config = four_task_config();
        let assignment = StationAssignment::new(vec![vec![0, 1], vec![2], vec![3]]);
        let solution = Solution::calculate(&config, assignment);

        assert_eq!(solution.cycle_times_max, vec![5.0, 4.0, 2.0]);
        for (actual, expected) in solution.cycle_times_avg.iter().zip([4.3, 3.2, 1.5]) {
            assert!((actual - expected).abs() < 1e-9);
        }
        assert!((solution.station_efficiencies_max[0] - 100.0).abs() < 1e-9);
        assert!((solution.station_efficiencies_avg[1] - 64.0).abs() < 1e-9);
        assert_eq!(solution.actual_max_cycle, 5.0);
        assert!((solution.actual_avg_cycle - 4.3).abs() < 1e-9);
    }

    #[test]
    fn test_suboptimal_partition_flagged() {
        let config = LineConfig::new(vec![Task::new("a", 2.0), Task::new("b", 2.0)], 5.0);
        let assignment = StationAssignment::new(vec![vec![0], vec![1]]);
        let solution = Solution::calculate(&config, assignment);

        assert_eq!(solution.theoretical_min_stations, 1);
        assert!(!solution.is_optimal);
        assert!((solution.efficiency_max - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_avg_load_may_exceed_cycle_limit() {
        let config = LineConfig::new(
            vec![Task::new("a", 4.0).with_avg_duration(7.0)],
            5.0,
        );
        let assignment = StationAssignment::new(vec![vec![0]]);
        let solution = Solution::calculate(&config, assignment);

        assert!(solution.actual_avg_cycle > config.cycle_limit);
        assert!(solution.station_efficiencies_avg[0] > 100.0);
    }

    #[test]
    fn test_solution_serde_round_trip() {
        let config = four_task_config();
        let assignment = StationAssignment::new(vec![vec![0, 1], vec![2], vec![3]]);
        let solution = Solution::calculate(&config, assignment);

        let json = serde_json::to_string(&solution).unwrap();
        let restored: Solution = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, solution);
    }
}
