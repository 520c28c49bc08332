//! Itinerary Planner Component
//!
//! Saved places and day-by-day schedule of one trip, with drag-and-drop
//! between them. Gesture handlers are bound once in `crate::dnd`.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;
use plan_core::{Container, Trip};

use crate::components::{DropContainer, LocationCard};
use crate::context::AppContext;
use crate::store::{store_find_trip, use_app_store};

#[component]
pub fn ItineraryPlanner(trip_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let dnd = use_context::<DndSignals>().expect("DndSignals should be provided");
    let store = use_app_store();

    let trip = Memo::new(move |_| store_find_trip(&store, &trip_id));
    let title = move || trip.get().map(|t| t.title).unwrap_or_default();

    // Location under the pointer while dragging
    let dragged = move || {
        let id = dnd.dragging_id_read.get()?;
        trip.with(|t| t.as_ref().and_then(|t| t.plan.registry().lookup(&id).cloned()))
    };

    // Keyboard drags move the highlight instead of an overlay
    let overlay = move || {
        if dnd.keyboard_read.get() {
            return None;
        }
        dragged().map(|location| {
            let (x, y) = dnd.pointer_read.get();
            view! {
                <div class="drag-overlay" style=format!("left: {}px; top: {}px;", x + 8, y + 8)>
                    <LocationCard location=location />
                </div>
            }
        })
    };

    view! {
        <div class="planner-panel">
            <header class="panel-header">
                <button class="back-btn" on:click=move |_| ctx.close_trip()>"←"</button>
                <h2 class="panel-title">{title}</h2>
            </header>

            {move || match trip.get() {
                Some(trip) => view! { <PlanSections dnd=dnd trip=trip /> }.into_any(),
                None => view! { <p class="planner-missing">"This trip no longer exists."</p> }.into_any(),
            }}

            {overlay}
        </div>
    }
}

/// Saved container followed by one card per day
#[component]
fn PlanSections(dnd: DndSignals, trip: Trip) -> impl IntoView {
    let saved = trip.plan.saved().cloned();
    let days: Vec<Container> = trip.plan.days().cloned().collect();

    let day_cards = days
        .into_iter()
        .map(|day| {
            let title = day.title.clone();
            view! {
                <div class="day-card">
                    <h4 class="day-title">{title}</h4>
                    <DropContainer dnd=dnd container=day />
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="planner-body">
            <section>
                <h3 class="section-title">"Saved places"</h3>
                {saved.map(|container| view! { <DropContainer dnd=dnd container=container /> })}
            </section>
            <section>
                <h3 class="section-title">"Daily itinerary"</h3>
                <div class="day-list">{day_cards}</div>
            </section>
        </div>
    }
}
