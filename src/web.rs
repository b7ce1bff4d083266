//! Browser glue: DOM events in, DOM listeners out.

use crate::model::{ContactDatum, ContactId, RawEvent};
use crate::state::{State, Surface};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, EventTarget, MouseEvent, Touch, TouchEvent, TouchList};

fn touch_datum(t: &Touch) -> ContactDatum {
    ContactDatum {
        identifier: ContactId(t.identifier() as i64),
        client_x: t.client_x() as f64,
        client_y: t.client_y() as f64,
        page_x: t.page_x() as f64,
        page_y: t.page_y() as f64,
    }
}

fn touch_list(list: &TouchList) -> Vec<ContactDatum> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| touch_datum(&t))
        .collect()
}

impl RawEvent {
    pub fn from_touch_event(e: &TouchEvent) -> Self {
        Self {
            kind: e.type_(),
            time_stamp: e.time_stamp(),
            touches: Some(touch_list(&e.touches())),
            target_touches: Some(touch_list(&e.target_touches())),
            changed_touches: Some(touch_list(&e.changed_touches())),
            pointer: None,
        }
    }

    pub fn from_mouse_event(e: &MouseEvent) -> Self {
        Self {
            kind: e.type_(),
            time_stamp: e.time_stamp(),
            pointer: Some(ContactDatum {
                identifier: ContactId::POINTER,
                client_x: e.client_x() as f64,
                client_y: e.client_y() as f64,
                page_x: e.page_x() as f64,
                page_y: e.page_y() as f64,
            }),
            ..Default::default()
        }
    }

    /// Touch events carry touch lists; everything else is read as a mouse event.
    pub fn from_dom_event(e: &Event) -> Self {
        // `instanceof TouchEvent` throws where the constructor is missing, so
        // go by the label instead
        if e.type_().starts_with("touch") {
            Self::from_touch_event(e.unchecked_ref::<TouchEvent>())
        } else {
            Self::from_mouse_event(e.unchecked_ref::<MouseEvent>())
        }
    }
}

impl Surface for Element {
    type Handler = js_sys::Function;

    fn same_surface(&self, other: &Self) -> bool {
        self == other
    }

    fn register_notification(&self, channel: &str, handler: &js_sys::Function, capture: bool) {
        if let Err(e) = self.add_event_listener_with_callback_and_bool(channel, handler, capture) {
            log::warn!("could not listen for '{}': {:?}", channel, e);
        }
    }
}

const REGION_EVENTS: [&str; 5] = ["touchstart", "touchmove", "touchend", "touchcancel", "mousedown"];
// mouse moves and releases are caught on the window so drags can leave the element
const WINDOW_EVENTS: [&str; 2] = ["mousemove", "mouseup"];

type Listener = Closure<dyn FnMut(Event)>;

/// Feeds every touch and mouse event on an element into a shared coordinator.
///
/// Listeners stay attached while the `Region` lives.
pub struct Region {
    listeners: Vec<(EventTarget, &'static str, Listener)>,
}

impl Region {
    /// `on_update` runs after each event that touched the contact records,
    /// with the event and whether the contact sequence is still valid. Hover
    /// moves with nothing pressed are skipped. The coordinator is not
    /// borrowed during the call.
    pub fn attach<F>(element: &Element, state: Rc<RefCell<State<Element>>>, on_update: F) -> Self
    where
        F: Fn(&RawEvent, bool) + 'static,
    {
        let on_update = Rc::new(on_update);
        let mut targets: Vec<(EventTarget, &'static str)> = REGION_EVENTS
            .iter()
            .map(|&name| (element.clone().unchecked_into::<EventTarget>(), name))
            .collect();
        if let Some(window) = web_sys::window() {
            for name in WINDOW_EVENTS {
                targets.push((window.clone().unchecked_into::<EventTarget>(), name));
            }
        }

        let mut listeners = Vec::with_capacity(targets.len());
        for (target, name) in targets {
            let state = state.clone();
            let on_update = on_update.clone();
            let listener = Closure::wrap(Box::new(move |e: Event| {
                let raw = RawEvent::from_dom_event(&e);
                let outcome = {
                    let mut st = state.borrow_mut();
                    arbitrate(&mut *st, &raw)
                };
                if outcome.prevent {
                    e.prevent_default();
                }
                if outcome.observed {
                    on_update(&raw, outcome.valid);
                }
            }) as Box<dyn FnMut(_)>);
            if let Err(e) = target.add_event_listener_with_callback(name, listener.as_ref().unchecked_ref()) {
                log::warn!("could not attach '{}' listener: {:?}", name, e);
            }
            listeners.push((target, name, listener));
        }
        log::debug!("region attached with {} listeners", listeners.len());
        Self { listeners }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Outcome {
    valid: bool,
    /// Default browser handling should be suppressed.
    prevent: bool,
    /// The event reached the contact records or invalidated them.
    observed: bool,
}

/// Runs one event through the coordinator; clears the records once every
/// contact has ended if the settings ask for it.
fn arbitrate<S: Surface>(state: &mut State<S>, raw: &RawEvent) -> Outcome {
    let tracked_before = !state.tracker().is_empty();
    let valid = state.update_inputs(raw);
    let tracked_after = !state.tracker().is_empty();
    let prevent = state.settings().prevent_default && raw.is_multi_contact();
    let reset_when_idle = state.settings().reset_when_idle;
    if valid && reset_when_idle && state.num_active_inputs() == 0 && tracked_after {
        state.reset_inputs();
    }
    Outcome {
        valid,
        prevent,
        observed: !valid || tracked_before || tracked_after,
    }
}

impl Drop for Region {
    fn drop(&mut self) {
        for (target, name, listener) in &self.listeners {
            let _ = target.remove_event_listener_with_callback(name, listener.as_ref().unchecked_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::state::bindings::tests::Node;

    fn touch(kind: &str, ids: &[i64], changed: &[i64]) -> RawEvent {
        let list = |ids: &[i64]| -> Vec<ContactDatum> {
            ids.iter().map(|&id| ContactDatum::at(id, 0.0, 0.0)).collect()
        };
        RawEvent::touch(kind, list(ids), list(changed))
    }

    #[test]
    fn idle_region_forgets_ended_contacts() {
        let mut state: State<Node> = State::default();
        let outcome = arbitrate(&mut state, &touch("touchstart", &[1], &[1]));
        assert!(outcome.valid && outcome.prevent && outcome.observed);
        assert!(arbitrate(&mut state, &touch("touchend", &[], &[1])).observed);
        assert!(state.tracker().is_empty());
    }

    #[test]
    fn ended_contacts_stay_when_idle_reset_is_off() {
        let settings = Settings {
            reset_when_idle: false,
            prevent_default: false,
            ..Settings::default()
        };
        let mut state: State<Node> = State::new(settings);
        let outcome = arbitrate(&mut state, &touch("touchstart", &[1], &[1]));
        assert!(outcome.valid && !outcome.prevent);
        arbitrate(&mut state, &touch("touchend", &[], &[1]));
        assert_eq!(state.tracker().ended_count(), 1);
    }

    #[test]
    fn mouse_events_are_never_prevented() {
        let mut state: State<Node> = State::default();
        let outcome = arbitrate(&mut state, &RawEvent::pointer("mousedown", 1.0, 1.0));
        assert!(outcome.valid && !outcome.prevent);
    }

    #[test]
    fn hover_without_a_press_goes_unobserved() {
        let mut state: State<Node> = State::default();
        let hover = arbitrate(&mut state, &RawEvent::pointer("mousemove", 3.0, 3.0));
        assert_eq!(
            hover,
            Outcome {
                valid: true,
                prevent: false,
                observed: false
            }
        );
        arbitrate(&mut state, &RawEvent::pointer("mousedown", 3.0, 3.0));
        assert!(arbitrate(&mut state, &RawEvent::pointer("mousemove", 6.0, 3.0)).observed);
        // the release empties the records and is still reported
        assert!(arbitrate(&mut state, &RawEvent::pointer("mouseup", 6.0, 3.0)).observed);
        assert!(!arbitrate(&mut state, &RawEvent::pointer("mousemove", 9.0, 3.0)).observed);
    }

    #[test]
    fn invalidation_is_always_observed() {
        let mut state: State<Node> = State::default();
        let outcome = arbitrate(&mut state, &touch("touchcancel", &[], &[1]));
        assert!(!outcome.valid && outcome.observed);
    }

    #[test]
    fn a_second_touch_keeps_the_first_alive() {
        let mut state: State<Node> = State::default();
        arbitrate(&mut state, &touch("touchstart", &[1], &[1]));
        arbitrate(&mut state, &touch("touchstart", &[1, 2], &[2]));
        arbitrate(&mut state, &touch("touchend", &[1], &[2]));
        assert_eq!(state.num_active_inputs(), 1);
        assert_eq!(state.tracker().len(), 2);
    }
}
