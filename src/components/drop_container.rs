//! Drop Container Component
//!
//! A container (saved places or one day) that accepts dragged locations.
//! Hovering a location targets its position; hovering the container
//! outside any location targets the end of the list.

use leptos::prelude::*;
use leptos_dragdrop::*;
use plan_core::{Container, Location};

use crate::components::LocationCard;

#[component]
pub fn DropContainer(dnd: DndSignals, container: Container) -> impl IntoView {
    let id = container.id.clone();
    let is_empty = container.is_empty();

    let on_mouseenter = make_on_container_mouseenter(dnd, id.clone());
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_drop_target = {
        let id = id.clone();
        move || matches!(dnd.drop_target_read.get(), Some(DropTarget::Container(ref target)) if *target == id)
    };

    let container_class = move || {
        let mut c = String::from("drop-container");
        if dnd.dragging_id_read.get().is_some() { c.push_str(" accepting"); }
        if is_drop_target() { c.push_str(" drop-target"); }
        c
    };

    let rows = container
        .locations
        .into_iter()
        .map(|location| view! { <SortableLocation dnd=dnd location=location container_id=id.clone() /> })
        .collect::<Vec<_>>();

    view! {
        <div
            class=container_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            {rows}
            {is_empty.then(|| view! { <div class="drop-placeholder">"Drag places here"</div> })}
        </div>
    }
}

/// A draggable location row, focusable for keyboard dragging
#[component]
pub fn SortableLocation(dnd: DndSignals, location: Location, container_id: String) -> impl IntoView {
    let id = location.id.clone();
    let item_attr = id.clone();

    let on_mousedown = make_on_mousedown(dnd, id.clone());
    let on_mouseenter = make_on_item_mouseenter(dnd, id.clone());
    let on_mouseleave = make_on_item_mouseleave(dnd, container_id);

    // Visual state
    let is_dragging = {
        let id = id.clone();
        move || dnd.dragging_id_read.get().as_deref() == Some(id.as_str())
    };
    let is_drop_target = move || {
        matches!(dnd.drop_target_read.get(), Some(DropTarget::Item(ref target)) if *target == id)
    };

    let item_class = move || {
        let mut c = String::from("location-row");
        if is_dragging() {
            c.push_str(" dragging");
            if dnd.keyboard_read.get() { c.push_str(" keyboard-drag"); }
        }
        if is_drop_target() { c.push_str(" drop-target"); }
        c
    };

    view! {
        <div
            class=item_class
            tabindex="0"
            data-dnd-item=item_attr
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <LocationCard location=location />
        </div>
    }
}
