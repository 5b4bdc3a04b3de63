//! Time-driven phase sequencing.
//!
//! A [`PhaseTimeline`] maps elapsed seconds to a discrete phase index using
//! ascending thresholds. [`PhaseClock`] tracks the phase across frames so it
//! never moves backwards and reports completion exactly once.

/// Linear interpolation.
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhaseTimeline {
    thresholds: Vec<f32>,
    completes_after: Option<f32>,
}

impl PhaseTimeline {
    /// Thresholds are sorted ascending; phase `n` starts once elapsed time
    /// strictly exceeds `thresholds[n - 1]`.
    pub fn new(thresholds: impl Into<Vec<f32>>) -> Self {
        let mut thresholds = thresholds.into();
        thresholds.sort_by(f32::total_cmp);
        Self {
            thresholds,
            completes_after: None,
        }
    }

    /// Completion fires once the terminal phase is reached and elapsed time
    /// strictly exceeds `seconds`.
    pub fn completing_after(mut self, seconds: f32) -> Self {
        self.completes_after = Some(seconds);
        self
    }

    pub fn phase_at(&self, elapsed: f32) -> usize {
        self.thresholds.iter().take_while(|t| elapsed > **t).count()
    }

    pub fn terminal_phase(&self) -> usize {
        self.thresholds.len()
    }

    pub fn thresholds(&self) -> &[f32] {
        &self.thresholds
    }

    fn is_complete_at(&self, phase: usize, elapsed: f32) -> bool {
        if phase < self.terminal_phase() {
            return false;
        }
        match self.completes_after {
            Some(at) => elapsed > at,
            None => true,
        }
    }
}

/// What changed on one [`PhaseClock::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseStep {
    pub phase: usize,
    pub entered: bool,
    /// True on exactly one step per clock
    pub completed: bool,
}

#[derive(Debug, Clone)]
pub struct PhaseClock {
    timeline: PhaseTimeline,
    phase: usize,
    completed: bool,
}

impl PhaseClock {
    pub fn new(timeline: PhaseTimeline) -> Self {
        Self {
            timeline,
            phase: 0,
            completed: false,
        }
    }

    pub fn phase(&self) -> usize {
        self.phase
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn timeline(&self) -> &PhaseTimeline {
        &self.timeline
    }

    /// Move to the phase for `elapsed`; never moves backwards.
    pub fn advance(&mut self, elapsed: f32) -> PhaseStep {
        let next = self.timeline.phase_at(elapsed).max(self.phase);
        let entered = next != self.phase;
        self.phase = next;

        let completed = !self.completed && self.timeline.is_complete_at(self.phase, elapsed);
        if completed {
            self.completed = true;
        }
        PhaseStep {
            phase: self.phase,
            entered,
            completed,
        }
    }
}
