/// Completed/total step counts for a stage, project, or catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: usize,
}

impl ProgressSummary {
    pub fn new(completed: usize, total: usize) -> Self {
        debug_assert!(completed <= total);
        Self { completed, total }
    }

    /// Percentage of completed steps in [0.0, 100.0]
    ///
    /// An empty summary reports 0.0. Not rounded.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            100.0 * self.completed as f64 / self.total as f64
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

impl std::ops::Add for ProgressSummary {
    type Output = ProgressSummary;

    fn add(self, other: ProgressSummary) -> ProgressSummary {
        ProgressSummary {
            completed: self.completed + other.completed,
            total: self.total + other.total,
        }
    }
}

impl std::iter::Sum for ProgressSummary {
    fn sum<I: Iterator<Item = ProgressSummary>>(iter: I) -> Self {
        iter.fold(ProgressSummary::default(), |acc, s| acc + s)
    }
}
