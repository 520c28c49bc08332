//! Leptos DragDrop Utilities
//!
//! Mouse-event drag-and-drop for sortable lists in Leptos.
//! Uses movement threshold to distinguish click from drag.
//! Items live inside containers; hovering tracks either an item or the
//! container itself as the drop target.
//! Keyboard: Space/Enter on a focused row picks it up, arrows step the
//! drop target, Space/Enter drops and Escape cancels.

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Drop target types
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Drop on an item (take its position)
    Item(String),
    /// Drop on a container outside any item (append)
    Container(String),
}

/// Attribute holding the item id on focusable rows
pub const ITEM_ID_ATTR: &str = "data-dnd-item";

/// Drop slots of one container, in display order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerSlots {
    pub id: String,
    pub items: Vec<String>,
}

/// Keyboard step of the drop target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Prev,
    Next,
    PrevContainer,
    NextContainer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    PickUp,
    Drop,
    Cancel,
    Move(Step),
}

impl DropTarget {
    pub fn id(&self) -> &str {
        match self {
            DropTarget::Item(id) | DropTarget::Container(id) => id,
        }
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<String>>,
    pub dragging_id_write: WriteSignal<Option<String>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<String>>,
    pub pending_id_write: WriteSignal<Option<String>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Pointer position while dragging (for the overlay)
    pub pointer_read: ReadSignal<(i32, i32)>,
    pub pointer_write: WriteSignal<(i32, i32)>,
    /// Drag was started from the keyboard
    pub keyboard_read: ReadSignal<bool>,
    pub keyboard_write: WriteSignal<bool>,
    /// Movement threshold in pixels to start dragging
    pub threshold_px: i32,
}

/// Default movement threshold in pixels
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// How long the click following a drop is suppressed
const CLICK_SUPPRESS_MS: i32 = 100;

pub fn create_dnd_signals(threshold_px: i32) -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<String>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<String>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    let (pointer_read, pointer_write) = signal((0i32, 0i32));
    let (keyboard_read, keyboard_write) = signal(false);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        pointer_read,
        pointer_write,
        keyboard_read,
        keyboard_write,
        threshold_px: threshold_px.max(0),
    }
}

/// Whether a pointer at (x, y) is far enough from the press point to start dragging
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32), threshold_px: i32) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > threshold_px || dy > threshold_px
}

/// Map a key press to a drag command
pub fn key_command(key: &str, dragging: bool) -> Option<KeyCommand> {
    let command = match (key, dragging) {
        (" " | "Enter", false) => KeyCommand::PickUp,
        (" " | "Enter", true) => KeyCommand::Drop,
        ("Escape", true) => KeyCommand::Cancel,
        ("ArrowUp", true) => KeyCommand::Move(Step::Prev),
        ("ArrowDown", true) => KeyCommand::Move(Step::Next),
        ("ArrowLeft", true) => KeyCommand::Move(Step::PrevContainer),
        ("ArrowRight", true) => KeyCommand::Move(Step::NextContainer),
        _ => return None,
    };
    Some(command)
}

/// Next drop target for a keyboard step.
///
/// Slots run through each container's items followed by the container
/// itself (its end). Up/Down walk the slots, Left/Right jump to the end of
/// the neighbouring container. Steps stop at the first and last slot; an
/// unknown `current` starts at the first slot.
pub fn step_target(layout: &[ContainerSlots], current: Option<&DropTarget>, step: Step) -> Option<DropTarget> {
    let slots: Vec<(usize, DropTarget)> = layout
        .iter()
        .enumerate()
        .flat_map(|(ci, container)| {
            container
                .items
                .iter()
                .map(move |item| (ci, DropTarget::Item(item.clone())))
                .chain(std::iter::once((ci, DropTarget::Container(container.id.clone()))))
        })
        .collect();

    let Some(pos) = current.and_then(|target| slots.iter().position(|(_, slot)| slot == target)) else {
        return slots.into_iter().next().map(|(_, slot)| slot);
    };

    let last = slots.len() - 1;
    let container_end = |ci: usize| DropTarget::Container(layout[ci].id.clone());
    let next = match step {
        Step::Prev => slots[pos.saturating_sub(1)].1.clone(),
        Step::Next => slots[(pos + 1).min(last)].1.clone(),
        Step::PrevContainer => container_end(slots[pos].0.saturating_sub(1)),
        Step::NextContainer => container_end((slots[pos].0 + 1).min(layout.len() - 1)),
    };
    Some(next)
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.keyboard_write.set(false);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            CLICK_SUPPRESS_MS,
        );
        cb.forget();
    }
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, item_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            ev.prevent_default();
            dnd.pending_id_write.set(Some(item_id.clone()));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mouseenter handler for items
pub fn make_on_item_mouseenter(dnd: DndSignals, item_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        // Self is a valid target: dropping there keeps the position
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Item(item_id.clone())));
        }
    }
}

/// Create mouseleave handler for items: pointer falls back to the enclosing container
pub fn make_on_item_mouseleave(dnd: DndSignals, container_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Container(container_id.clone())));
        }
    }
}

/// Create mouseenter handler for containers
pub fn make_on_container_mouseenter(dnd: DndSignals, container_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Container(container_id.clone())));
        }
    }
}

/// Create mouseleave handler for containers
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Item id of the focused row a key event came from
fn focused_item_id(ev: &web_sys::KeyboardEvent) -> Option<String> {
    ev.target()?
        .dyn_into::<web_sys::Element>()
        .ok()?
        .get_attribute(ITEM_ID_ATTR)
}

fn add_document_listener(event: &str, callback: &js_sys::Function) {
    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback(event, callback);
    }
}

/// Bind document-level handlers for a drag gesture.
///
/// - mousemove starts the drag once the threshold is exceeded (`on_start`)
/// - mouseup drops on the hovered target, `None` when outside any (`on_drop`)
/// - Space/Enter on a row carrying [`ITEM_ID_ATTR`] picks it up (`on_start`),
///   arrows step the target through `layout()`, Space/Enter drops (`on_drop`)
/// - Escape while dragging cancels (`on_cancel`)
pub fn bind_global_handlers<S, D, C, L>(dnd: DndSignals, on_start: S, on_drop: D, on_cancel: C, layout: L)
where
    S: Fn(String) + 'static,
    D: Fn(String, Option<DropTarget>) + 'static,
    C: Fn(String) + 'static,
    L: Fn() -> Vec<ContainerSlots> + 'static,
{
    let on_start = Rc::new(on_start);
    let on_drop = Rc::new(on_drop);

    let start_drag = Rc::clone(&on_start);
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let current = (ev.client_x(), ev.client_y());
        let pending = dnd.pending_id_read.get_untracked();

        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.pointer_write.set(current);
            return;
        }

        // Pending drag that hasn't started yet
        if let Some(id) = pending {
            let origin = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
            if exceeds_threshold(origin, current, dnd.threshold_px) {
                dnd.pointer_write.set(current);
                dnd.keyboard_write.set(false);
                // Pointer is still over the pressed item
                dnd.drop_target_write.set(Some(DropTarget::Item(id.clone())));
                dnd.dragging_id_write.set(Some(id.clone()));
                start_drag(id);
            }
        }
    });
    add_document_listener("mousemove", on_mousemove.as_ref().unchecked_ref());
    on_mousemove.forget();

    let drop_on = Rc::clone(&on_drop);
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        // Clear pending state first
        dnd.pending_id_write.set(None);

        match dragging_id {
            Some(dragged) => {
                end_drag(&dnd);
                drop_on(dragged, drop_target);
            }
            // Not dragging - click event will fire naturally on the element
            None => end_drag(&dnd),
        }
    });
    add_document_listener("mouseup", on_mouseup.as_ref().unchecked_ref());
    on_mouseup.forget();

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        let dragging = dnd.dragging_id_read.get_untracked();
        let Some(command) = key_command(&ev.key(), dragging.is_some()) else {
            return;
        };

        match (command, dragging) {
            (KeyCommand::PickUp, _) => {
                let Some(id) = focused_item_id(&ev) else {
                    return;
                };
                ev.prevent_default();
                dnd.pending_id_write.set(None);
                dnd.keyboard_write.set(true);
                dnd.drop_target_write.set(Some(DropTarget::Item(id.clone())));
                dnd.dragging_id_write.set(Some(id.clone()));
                on_start(id);
            }
            (KeyCommand::Move(step), Some(_)) => {
                ev.prevent_default();
                let current = dnd.drop_target_read.get_untracked();
                if let Some(next) = step_target(&layout(), current.as_ref(), step) {
                    dnd.drop_target_write.set(Some(next));
                }
            }
            (KeyCommand::Drop, Some(dragged)) => {
                ev.prevent_default();
                let target = dnd.drop_target_read.get_untracked();
                end_drag(&dnd);
                on_drop(dragged, target);
            }
            (KeyCommand::Cancel, Some(dragged)) => {
                end_drag(&dnd);
                on_cancel(dragged);
            }
            _ => {}
        }
    });
    add_document_listener("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        assert!(!exceeds_threshold((10, 10), (10, 10), DRAG_THRESHOLD_PX));
        assert!(!exceeds_threshold((10, 10), (15, 5), DRAG_THRESHOLD_PX));
        assert!(exceeds_threshold((10, 10), (16, 10), DRAG_THRESHOLD_PX));
        assert!(exceeds_threshold((10, 10), (10, 4), DRAG_THRESHOLD_PX));
        assert!(exceeds_threshold((0, 0), (1, 0), 0));
    }

    fn layout() -> Vec<ContainerSlots> {
        vec![
            ContainerSlots { id: "saved".into(), items: vec!["a".into(), "b".into()] },
            ContainerSlots { id: "day-1".into(), items: vec![] },
            ContainerSlots { id: "day-2".into(), items: vec!["x".into()] },
        ]
    }

    fn item(id: &str) -> DropTarget {
        DropTarget::Item(id.into())
    }

    fn container(id: &str) -> DropTarget {
        DropTarget::Container(id.into())
    }

    #[test]
    fn test_key_command() {
        assert_eq!(key_command(" ", false), Some(KeyCommand::PickUp));
        assert_eq!(key_command("Enter", true), Some(KeyCommand::Drop));
        assert_eq!(key_command("Escape", true), Some(KeyCommand::Cancel));
        assert_eq!(key_command("ArrowLeft", true), Some(KeyCommand::Move(Step::PrevContainer)));
        assert_eq!(key_command("ArrowDown", false), None);
        assert_eq!(key_command("Escape", false), None);
        assert_eq!(key_command("a", true), None);
    }

    #[test]
    fn test_step_walks_items_then_container_end() {
        let layout = layout();
        assert_eq!(step_target(&layout, Some(&item("a")), Step::Next), Some(item("b")));
        assert_eq!(step_target(&layout, Some(&item("b")), Step::Next), Some(container("saved")));
        assert_eq!(step_target(&layout, Some(&container("saved")), Step::Next), Some(container("day-1")));
        assert_eq!(step_target(&layout, Some(&container("day-1")), Step::Next), Some(item("x")));
        assert_eq!(step_target(&layout, Some(&item("x")), Step::Prev), Some(container("day-1")));
    }

    #[test]
    fn test_step_stops_at_edges() {
        let layout = layout();
        assert_eq!(step_target(&layout, Some(&item("a")), Step::Prev), Some(item("a")));
        assert_eq!(step_target(&layout, Some(&container("day-2")), Step::Next), Some(container("day-2")));
        assert_eq!(step_target(&layout, Some(&item("a")), Step::PrevContainer), Some(container("saved")));
        assert_eq!(step_target(&layout, Some(&item("x")), Step::NextContainer), Some(container("day-2")));
    }

    #[test]
    fn test_step_jumps_between_containers() {
        let layout = layout();
        assert_eq!(step_target(&layout, Some(&item("b")), Step::NextContainer), Some(container("day-1")));
        assert_eq!(step_target(&layout, Some(&container("day-1")), Step::NextContainer), Some(container("day-2")));
        assert_eq!(step_target(&layout, Some(&item("x")), Step::PrevContainer), Some(container("day-1")));
    }

    #[test]
    fn test_step_from_unknown_target() {
        let layout = layout();
        assert_eq!(step_target(&layout, None, Step::Next), Some(item("a")));
        assert_eq!(step_target(&layout, Some(&item("gone")), Step::Prev), Some(item("a")));
        assert_eq!(step_target(&[], Some(&item("a")), Step::Next), None);
    }

    #[test]
    fn test_drop_target_id() {
        assert_eq!(DropTarget::Item("loc1".into()).id(), "loc1");
        assert_eq!(DropTarget::Container("day-1".into()).id(), "day-1");
    }
}
