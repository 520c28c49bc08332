//! Trip Planner App
//!
//! Planner panel on the left, trip cards in the main area.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};
use reactive_stores::Store;
use rolling_logger::RollingLogger;

use crate::commands;
use crate::components::{ItineraryPlanner, PlannerDefaultView, TripList};
use crate::config::PlannerConfig;
use crate::context::AppContext;
use crate::dnd;
use crate::store::{store_set_error, store_set_trips, AppState, AppStateStoreFields};

#[component]
pub fn App(config: PlannerConfig, logger: Option<&'static RollingLogger>) -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    let (selected_trip, set_selected_trip) = signal::<Option<String>>(None);
    let ctx = AppContext::new((selected_trip, set_selected_trip), config, logger);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);
    provide_context(dnd::install(store, ctx));

    // Load trips on mount
    Effect::new(move |_| {
        let latency_ms = ctx.mock_latency_ms();
        spawn_local(async move {
            match commands::list_trips(latency_ms).await {
                Ok(loaded) => {
                    info!("[APP] Loaded {} trips", loaded.len());
                    store_set_trips(&store, loaded);
                }
                Err(e) => {
                    warn!("[APP] Failed to load trips: {}", e);
                    store_set_error(&store, e);
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            // Left: planner panel
            <aside class="planner-sidebar">
                {move || match selected_trip.get() {
                    Some(trip_id) => view! { <ItineraryPlanner trip_id=trip_id /> }.into_any(),
                    None => view! { <PlannerDefaultView /> }.into_any(),
                }}
            </aside>

            // Main: trip cards
            <main class="main-content">
                {move || store.error().get().map(|e| view! { <p class="error-banner">{e}</p> })}
                <TripList />
            </main>
        </div>
    }
}
