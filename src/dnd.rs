//! Planner Drag and Drop
//!
//! Binds the document-level gesture handlers once and routes drops of the
//! open trip through the drag controller.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{bind_global_handlers, create_dnd_signals, ContainerSlots, DndSignals, DropTarget};
use log::{debug, warn};
use plan_core::{DragController, DropOutcome, Plan};

use crate::commands;
use crate::context::AppContext;
use crate::store::{store_finish_drag, AppStateStoreFields, AppStore};

/// Keyboard slots of a plan, in the order the planner renders them
fn plan_slots(plan: &Plan) -> Vec<ContainerSlots> {
    plan.saved()
        .into_iter()
        .chain(plan.days())
        .map(|c| ContainerSlots {
            id: c.id.clone(),
            items: c.locations.iter().map(|l| l.id.clone()).collect(),
        })
        .collect()
}

pub fn install(store: AppStore, ctx: AppContext) -> DndSignals {
    let dnd = create_dnd_signals(ctx.drag_threshold_px());
    let controller = StoredValue::new(DragController::new());

    bind_global_handlers(
        dnd,
        move |item_id| {
            debug!("[DND] drag start: {}", item_id);
            controller.update_value(|c| c.begin(item_id));
        },
        move |item_id, target| {
            let over = target.as_ref().map(DropTarget::id);
            debug!("[DND] drop: dragged={}, over={:?}", item_id, over);

            let Some(trip_id) = ctx.selected_trip.get_untracked() else {
                controller.update_value(|c| c.reset());
                return;
            };

            let mut result = None;
            controller.update_value(|c| result = store_finish_drag(&store, &trip_id, c, over));

            if let Some((Some(request), DropOutcome::Moved(outcome))) = result {
                if !outcome.is_change() {
                    return;
                }
                let latency_ms = ctx.mock_latency_ms();
                spawn_local(async move {
                    if let Err(e) = commands::persist_move(latency_ms, &trip_id, &request).await {
                        warn!("[DND] failed to persist move in {}: {}", trip_id, e);
                    }
                });
            }
        },
        move |item_id| {
            debug!("[DND] drag cancelled: {}", item_id);
            controller.update_value(|c| c.cancel());
        },
        move || {
            let Some(trip_id) = ctx.selected_trip.get_untracked() else {
                return Vec::new();
            };
            store
                .trips()
                .read_untracked()
                .iter()
                .find(|t| t.id == trip_id)
                .map(|t| plan_slots(&t.plan))
                .unwrap_or_default()
        },
    );

    dnd
}
