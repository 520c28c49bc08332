//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Plans are only mutated through the helpers below, so every move goes
//! through the engine and notifies the views reading `trips`.

use leptos::prelude::*;
use log::{debug, warn};
use plan_core::{apply_drop, DragController, DropOutcome, MoveRequest, Plan, Trip};
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All trips of the user
    pub trips: Vec<Trip>,
    /// Trips are still being fetched
    pub loading: bool,
    /// Last failed service call, shown in the header
    pub error: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the trip list after a load
pub fn store_set_trips(store: &AppStore, trips: Vec<Trip>) {
    *store.trips().write() = trips;
    store.loading().set(false);
    store.error().set(None);
}

pub fn store_set_error(store: &AppStore, error: String) {
    store.loading().set(false);
    store.error().set(Some(error));
}

/// Clone of a trip by ID (tracked)
pub fn store_find_trip(store: &AppStore, trip_id: &str) -> Option<Trip> {
    store.trips().read().iter().find(|t| t.id == trip_id).cloned()
}

/// Complete a drag over `over` in the given trip.
///
/// The drop is applied to a copy of the plan, and the store is only written
/// when that copy differs, so skipped and in-place drops re-render nothing.
/// Returns the resolved request with the outcome, or `None` when the trip
/// is gone.
pub fn store_finish_drag(
    store: &AppStore,
    trip_id: &str,
    controller: &mut DragController,
    over: Option<&str>,
) -> Option<(Option<MoveRequest>, DropOutcome)> {
    let finished = {
        let trips = store.trips().read_untracked();
        trips
            .iter()
            .find(|t| t.id == trip_id)
            .map(|t| drop_on_copy(&t.plan, controller, over))
    };
    let Some((request, outcome, updated)) = finished else {
        controller.reset();
        warn!("[STORE] drop in unknown trip {}", trip_id);
        return None;
    };
    debug!("[STORE] drop in {}: {:?}", trip_id, outcome);

    if let Some(updated) = updated {
        let trips_field = store.trips();
        let mut trips = trips_field.write();
        if let Some(trip) = trips.iter_mut().find(|t| t.id == trip_id) {
            trip.plan = updated;
        }
    }
    Some((request, outcome))
}

/// Run a drop against a copy of `plan`; the copy is returned only if it changed
fn drop_on_copy(
    plan: &Plan,
    controller: &mut DragController,
    over: Option<&str>,
) -> (Option<MoveRequest>, DropOutcome, Option<Plan>) {
    let request = match controller.take_drop(plan, over) {
        Ok(request) => request,
        Err(reason) => return (None, DropOutcome::Skipped(reason), None),
    };

    let mut updated = plan.clone();
    let outcome = apply_drop(&mut updated, &request);
    let changed = matches!(&outcome, DropOutcome::Moved(moved) if moved.is_change());
    (Some(request), outcome, changed.then_some(updated))
}
