//! Aggregation of episode reports over an evaluation run.

use std::fmt;

use super::EpisodeReport;

/// Mean performance of a policy over several episodes.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationMetrics {
    /// Mean number of ticks per episode.
    pub mean_ticks: f64,
    /// Mean number of items collected per episode.
    pub mean_items_collected: f64,
    /// Mean number of distinct cells visited per episode.
    pub mean_cells_visited: f64,
    /// Percentage of episodes that ended with the environment terminal.
    pub pct_terminal: f64,
    /// Number of episodes evaluated.
    pub n_episodes: usize,
}

impl EvaluationMetrics {
    /// Averages a set of reports. An empty set yields all-zero metrics.
    pub fn from_reports(reports: &[EpisodeReport]) -> Self {
        let n_episodes = reports.len();
        if n_episodes == 0 {
            return Self {
                mean_ticks: 0.0,
                mean_items_collected: 0.0,
                mean_cells_visited: 0.0,
                pct_terminal: 0.0,
                n_episodes,
            };
        }

        let n = n_episodes as f64;
        let mean_ticks = reports.iter().map(|r| r.ticks as f64).sum::<f64>() / n;
        let mean_items_collected = reports
            .iter()
            .map(|r| r.items_collected as f64)
            .sum::<f64>()
            / n;
        let mean_cells_visited = reports
            .iter()
            .map(|r| r.cells_visited as f64)
            .sum::<f64>()
            / n;
        let pct_terminal = reports.iter().filter(|r| r.terminal).count() as f64 / n * 100.0;

        Self {
            mean_ticks,
            mean_items_collected,
            mean_cells_visited,
            pct_terminal,
            n_episodes,
        }
    }
}

impl fmt::Display for EvaluationMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "=== Evaluation Metrics ({} episodes) ===",
            self.n_episodes
        )?;
        writeln!(f, "  Mean ticks:              {:.1}", self.mean_ticks)?;
        writeln!(
            f,
            "  Mean items collected:    {:.1}",
            self.mean_items_collected
        )?;
        writeln!(
            f,
            "  Mean cells visited:      {:.1}",
            self.mean_cells_visited
        )?;
        writeln!(f, "  % cleared:               {:.1}%", self.pct_terminal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(ticks: u32, items: usize, terminal: bool) -> EpisodeReport {
        EpisodeReport {
            policy: "test".into(),
            ticks,
            items_collected: items,
            cells_visited: 4,
            terminal,
        }
    }

    #[test]
    fn averages_reports() {
        let reports = [report(10, 2, true), report(30, 0, false)];
        let metrics = EvaluationMetrics::from_reports(&reports);
        assert_eq!(metrics.n_episodes, 2);
        assert!((metrics.mean_ticks - 20.0).abs() < 1e-10);
        assert!((metrics.mean_items_collected - 1.0).abs() < 1e-10);
        assert!((metrics.mean_cells_visited - 4.0).abs() < 1e-10);
        assert!((metrics.pct_terminal - 50.0).abs() < 1e-10);
    }

    #[test]
    fn empty_reports_are_zero() {
        let metrics = EvaluationMetrics::from_reports(&[]);
        assert_eq!(metrics.n_episodes, 0);
        assert_eq!(metrics.mean_ticks, 0.0);
    }

    #[test]
    fn display_mentions_episode_count() {
        let metrics = EvaluationMetrics::from_reports(&[report(5, 1, true)]);
        assert!(metrics.to_string().contains("(1 episodes)"));
    }
}
