//! Drag Controller
//!
//! Tracks the dragged location and turns a drop into a move request.
//! Every gesture ends either in a move or in a no-op; the controller is
//! back to idle afterwards in both cases.

use log::{debug, warn};

use crate::engine::{MoveOutcome, MoveRequest};
use crate::error::PlanError;
use crate::model::Plan;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { item_id: String },
}

/// Why a drop did not produce a move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Drop without a preceding drag start
    NotDragging,
    /// Dropped outside any container, or the drag was cancelled
    NoTarget,
    /// Drop target is neither a container nor a location of the plan
    UnresolvedTarget(String),
    /// The dragged location is in no container
    DraggedItemMissing(String),
    /// The engine refused the resolved move
    Rejected(PlanError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    Moved(MoveOutcome),
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn dragging_id(&self) -> Option<&str> {
        match &self.state {
            DragState::Dragging { item_id } => Some(item_id),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Start dragging a location. A drag already in progress is replaced.
    pub fn begin(&mut self, item_id: impl Into<String>) {
        let item_id = item_id.into();
        if let DragState::Dragging { item_id: previous } = &self.state {
            debug!("[DND] drag of {} replaced by {}", previous, item_id);
        }
        self.state = DragState::Dragging { item_id };
    }

    pub fn cancel(&mut self) {
        if let DragState::Dragging { item_id } = &self.state {
            debug!("[DND] drag of {} cancelled", item_id);
        }
        self.reset();
    }

    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }

    /// Resolve the current drag against `plan` without mutating anything.
    ///
    /// `over` is the id under the pointer at drop time: either a container
    /// id (drop at the end of that container) or a location id (drop at that
    /// location's position).
    pub fn resolve_drop(&self, plan: &Plan, over: Option<&str>) -> Result<MoveRequest, SkipReason> {
        let active_id = self.dragging_id().ok_or(SkipReason::NotDragging)?;
        let over_id = over.ok_or(SkipReason::NoTarget)?;

        let index = plan.index();
        let (active_container, active_index) = index
            .position_of(active_id)
            .ok_or_else(|| SkipReason::DraggedItemMissing(active_id.to_string()))?;

        let (over_container, over_index) = if index.has_container(over_id) {
            (over_id, index.items_in(over_id).len())
        } else {
            index
                .position_of(over_id)
                .ok_or_else(|| SkipReason::UnresolvedTarget(over_id.to_string()))?
        };

        Ok(MoveRequest {
            source_container: active_container.to_string(),
            target_container: over_container.to_string(),
            source_index: active_index,
            target_index: over_index,
        })
    }

    /// Resolve the drop and return to idle.
    ///
    /// Skips are logged here; the plan is not touched.
    pub fn take_drop(&mut self, plan: &Plan, over: Option<&str>) -> Result<MoveRequest, SkipReason> {
        let resolved = self.resolve_drop(plan, over);
        self.reset();
        if let Err(reason) = &resolved {
            log_skip(reason);
        }
        resolved
    }

    /// Resolve the drop, apply it to `plan` and return to idle
    pub fn finish(&mut self, plan: &mut Plan, over: Option<&str>) -> DropOutcome {
        match self.take_drop(plan, over) {
            Ok(request) => apply_drop(plan, &request),
            Err(reason) => DropOutcome::Skipped(reason),
        }
    }
}

/// Apply a resolved drop; a refused move becomes a skip
pub fn apply_drop(plan: &mut Plan, request: &MoveRequest) -> DropOutcome {
    match plan.apply(request) {
        Ok(outcome) => DropOutcome::Moved(outcome),
        Err(e) => {
            let reason = SkipReason::Rejected(e);
            log_skip(&reason);
            DropOutcome::Skipped(reason)
        }
    }
}

/// Invariant violations are warnings, everything else is an ordinary miss
fn log_skip(reason: &SkipReason) {
    match reason {
        SkipReason::DraggedItemMissing(_) | SkipReason::Rejected(_) => {
            warn!("[DND] drop skipped: {:?}", reason)
        }
        _ => debug!("[DND] drop skipped: {:?}", reason),
    }
}
