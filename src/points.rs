use std::fmt::Display;

use tracing::debug;

use crate::SessionSummary;

/// Receives the points a game session earns.
///
/// Sessions are handed a sink when they start instead of sharing a global counter, so that a
/// single owner aggregates points across every game.
pub trait PointSink {
    /// Called with the points for each word as it is found.
    fn points_earned(&mut self, points: u32);

    /// Called once when a session ends, whether all words were found or time ran out.
    fn session_completed(&mut self, _summary: &SessionSummary) {}
}

impl<T: PointSink + ?Sized> PointSink for &mut T {
    fn points_earned(&mut self, points: u32) {
        (**self).points_earned(points)
    }

    fn session_completed(&mut self, summary: &SessionSummary) {
        (**self).session_completed(summary)
    }
}

/// How focused a player is, judged by their total points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConcentrationLevel {
    /// Fewer than 50 points.
    Apprentice,
    /// Fewer than 100 points.
    Explorer,
    /// Fewer than 200 points.
    Focused,
    /// Fewer than 500 points.
    FocusMaster,
    /// 500 points or more.
    SuperHero,
}

impl ConcentrationLevel {
    /// The level reached with `points` in total.
    pub fn for_points(points: u64) -> Self {
        match points {
            0..=49 => Self::Apprentice,
            50..=99 => Self::Explorer,
            100..=199 => Self::Focused,
            200..=499 => Self::FocusMaster,
            _ => Self::SuperHero,
        }
    }
}

impl Display for ConcentrationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Apprentice => "Apprentice",
            Self::Explorer => "Explorer",
            Self::Focused => "Focused",
            Self::FocusMaster => "Focus Master",
            Self::SuperHero => "Super Hero",
        };

        f.write_str(name)
    }
}

/// Keeps the running point total across all sessions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointsCoordinator {
    total_points: u64,
    sessions_completed: u32,
}

impl PointsCoordinator {
    /// A coordinator with no points yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// All points earned so far.
    pub fn total_points(&self) -> u64 {
        self.total_points
    }

    /// How many sessions have ended.
    pub fn sessions_completed(&self) -> u32 {
        self.sessions_completed
    }

    /// The player's current concentration level.
    pub fn level(&self) -> ConcentrationLevel {
        ConcentrationLevel::for_points(self.total_points)
    }
}

impl PointSink for PointsCoordinator {
    fn points_earned(&mut self, points: u32) {
        self.total_points = self.total_points.saturating_add(u64::from(points));
        debug!(points, total = self.total_points, "points earned");
    }

    fn session_completed(&mut self, _summary: &SessionSummary) {
        self.sessions_completed += 1;
    }
}
