//! Tracking view
//!
//! Derived from status on every read; never stored.

use serde::Serialize;

use crate::orders::OrderStatus;

/// One stage of the four-step progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingStep {
    /// Order placed
    Placed,
    /// Order processing
    Processing,
    /// Order shipped
    Shipped,
    /// Order delivered
    Delivered,
}

impl TrackingStep {
    /// The steps in display order.
    pub const ALL: [Self; 4] = [Self::Placed, Self::Processing, Self::Shipped, Self::Delivered];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Placed => "placed",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
        }
    }

    fn progress(self) -> u8 {
        match self {
            Self::Placed => 0,
            Self::Processing => 1,
            Self::Shipped => 2,
            Self::Delivered => 3,
        }
    }
}

/// How a step should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    /// Reached
    Completed,
    /// Will not be reached because the order was cancelled
    Cancelled,
    /// Not reached yet
    Upcoming,
}

impl StepState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Upcoming => "upcoming",
        }
    }
}

/// A step paired with its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepProgress {
    pub step: TrackingStep,
    pub state: StepState,
}

/// Map a status onto the four tracking steps. "Placed" is always completed,
/// even for a cancelled order.
pub fn tracking_steps(status: OrderStatus) -> [StepProgress; 4] {
    TrackingStep::ALL.map(|step| StepProgress {
        step,
        state: step_state(step, status),
    })
}

fn step_state(step: TrackingStep, status: OrderStatus) -> StepState {
    if step == TrackingStep::Placed {
        return StepState::Completed;
    }

    match status.progress() {
        None => StepState::Cancelled,
        Some(progress) if progress >= step.progress() => StepState::Completed,
        Some(_) => StepState::Upcoming,
    }
}
