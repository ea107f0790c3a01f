//! Position history recorded for each body

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::vector::Vector3;

/// How much position history a [`Trajectory`] keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrajectoryRetention {
    /// Every snapshot is kept for the lifetime of the run
    #[default]
    Unbounded,
    /// Only the newest `n` snapshots are kept; older ones are evicted
    Capped(usize),
}

impl TrajectoryRetention {
    /// Retention from an optional cap, as found in scenario files and CLI flags
    pub fn from_cap(cap: Option<usize>) -> Self {
        match cap {
            Some(n) => TrajectoryRetention::Capped(n.max(1)),
            None => TrajectoryRetention::Unbounded,
        }
    }
}

/// Ordered, append-only sequence of position snapshots
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    points: VecDeque<Vector3>,
    retention: TrajectoryRetention,
    evicted: u64,
}

impl Trajectory {
    /// Starts a trajectory at `start`
    pub fn new(start: Vector3, retention: TrajectoryRetention) -> Self {
        let mut trajectory = Trajectory {
            points: VecDeque::new(),
            retention,
            evicted: 0,
        };
        trajectory.push(start);
        trajectory
    }

    /// Appends a snapshot, evicting the oldest entries when capped
    pub fn push(&mut self, position: Vector3) {
        self.points.push_back(position);
        self.trim();
    }

    /// Number of snapshots currently held
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of snapshots dropped by the retention cap so far
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    pub fn retention(&self) -> TrajectoryRetention {
        self.retention
    }

    /// Changes the retention policy, trimming immediately if the new cap is smaller
    pub fn set_retention(&mut self, retention: TrajectoryRetention) {
        self.retention = retention;
        self.trim();
    }

    fn trim(&mut self) {
        if let TrajectoryRetention::Capped(cap) = self.retention {
            let cap = cap.max(1);
            while self.points.len() > cap {
                self.points.pop_front();
                self.evicted += 1;
            }
        }
    }

    /// Oldest retained snapshot
    pub fn first(&self) -> Option<&Vector3> {
        self.points.front()
    }

    /// Most recent snapshot
    pub fn last(&self) -> Option<&Vector3> {
        self.points.back()
    }

    pub fn get(&self, index: usize) -> Option<&Vector3> {
        self.points.get(index)
    }

    /// Iterates oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Vector3> + '_ {
        self.points.iter()
    }

    /// Copies the retained snapshots into a `Vec`, oldest first
    pub fn to_vec(&self) -> Vec<Vector3> {
        self.points.iter().copied().collect()
    }
}
