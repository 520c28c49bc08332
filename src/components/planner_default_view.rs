//! Planner Default View
//!
//! Shown in the planner panel while no trip is open.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

/// Log lines shown under "Recent activity"
const ACTIVITY_LINES: usize = 5;

#[component]
pub fn PlannerDefaultView() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let trip_count = move || store.trips().read().len();

    // Snapshot taken whenever the overview is shown again
    let activity = ctx
        .recent_logs(ACTIVITY_LINES)
        .into_iter()
        .map(|entry| view! { <li class="activity-line">{entry.format_line()}</li> })
        .collect::<Vec<_>>();

    view! {
        <div class="planner-panel">
            <header class="panel-header">
                <h2 class="panel-title">"Trip overview"</h2>
            </header>
            <div class="planner-empty">
                <h3>"Start planning your journey"</h3>
                <p>
                    "You have " <span class="trip-count">{trip_count}</span> " trip plans."
                </p>
                <p>"Pick a trip card to start planning it in detail."</p>
            </div>
            <section class="planner-activity">
                <h4>"Recent activity"</h4>
                <ul class="activity-list">{activity}</ul>
            </section>
        </div>
    }
}
