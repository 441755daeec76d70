//! Step progress display
//!
//! A pure function of the current position and the step labels: each step is
//! completed, active or pending, and an overall fill fraction drives the
//! progress bar.

/// Visual state of one step marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Completed,
    Active,
    Pending,
}

/// One marker in the progress display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepMarker<'a> {
    /// 1-based step number
    pub number: usize,
    pub label: &'a str,
    pub state: StepState,
}

/// Markers and fill for a position within a step sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Progress<'a> {
    pub markers: Vec<StepMarker<'a>>,
    /// Fraction of the bar to fill, 0.0 to 1.0
    pub fill: f64,
}

impl<'a> Progress<'a> {
    pub fn new(position: usize, steps: &[&'a str]) -> Self {
        let markers = steps
            .iter()
            .enumerate()
            .map(|(index, &label)| {
                let number = index + 1;
                StepMarker {
                    number,
                    label,
                    state: step_state(number, position),
                }
            })
            .collect();

        Self {
            markers,
            fill: fill_fraction(position, steps.len()),
        }
    }
}

/// State of the step numbered `number` when `position` is active
pub fn step_state(number: usize, position: usize) -> StepState {
    if number < position {
        StepState::Completed
    } else if number == position {
        StepState::Active
    } else {
        StepState::Pending
    }
}

/// `(position - 1) / (step_count - 1)`, clamped to 0.0..=1.0
///
/// Sequences with fewer than two steps have nothing to fill and return 0.0.
pub fn fill_fraction(position: usize, step_count: usize) -> f64 {
    if step_count < 2 {
        return 0.0;
    }
    let done = position.saturating_sub(1) as f64;
    (done / (step_count - 1) as f64).clamp(0.0, 1.0)
}
