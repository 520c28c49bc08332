//! Location Card Component

use leptos::prelude::*;
use plan_core::Location;

/// Name and source video of a place
#[component]
pub fn LocationCard(location: Location) -> impl IntoView {
    view! {
        <div class="location-card">
            <span class="grip">"⋮⋮"</span>
            <div class="location-text">
                <p class="location-name">{location.name}</p>
                <p class="location-source">{format!("From: {}", location.video_source)}</p>
            </div>
        </div>
    }
}
