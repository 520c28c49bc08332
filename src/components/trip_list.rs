//! Trip List Component
//!
//! Grid of trip cards; clicking a card opens it in the planner.

use leptos::prelude::*;
use plan_core::Trip;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TripList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="trip-list">
            <h1>"My trips"</h1>
            <Show
                when=move || !store.loading().get()
                fallback=|| view! { <p class="loading">"Loading trips..."</p> }
            >
                <div class="trip-grid">
                    <For
                        each=move || store.trips().get()
                        key=|trip| trip.id.clone()
                        children=move |trip| view! { <TripCard trip=trip /> }
                    />
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn TripCard(trip: Trip) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = trip.id.clone();
    let is_open = {
        let id = id.clone();
        move || ctx.selected_trip.get().as_deref() == Some(id.as_str())
    };
    let card_class = move || if is_open() { "trip-card open" } else { "trip-card" };
    let summary = format!("{} · {} places", trip.duration, trip.locations_count());
    let title = trip.title.clone();
    let alt = trip.title.clone();
    let cover = trip.cover_image.clone();

    view! {
        <div class=card_class on:click=move |_| ctx.open_trip(id.clone())>
            <img class="trip-cover" src=cover alt=alt />
            <div class="trip-info">
                <h3 class="trip-title">{title}</h3>
                <p class="trip-summary">{summary}</p>
            </div>
        </div>
    }
}
