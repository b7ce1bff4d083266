// Replays recorded raw event sequences through a coordinator

use std::cell::RefCell;
use std::rc::Rc;
use touch_region::{ContactId, Phase, RawEvent, Settings, State, Surface};

#[derive(Clone)]
struct Panel {
    name: &'static str,
    channels: Rc<RefCell<Vec<String>>>,
}

impl Panel {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            channels: Rc::default(),
        }
    }
}

impl Surface for Panel {
    type Handler = Rc<dyn Fn()>;

    fn same_surface(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.channels, &other.channels)
    }

    fn register_notification(&self, channel: &str, _handler: &Self::Handler, _capture: bool) {
        self.channels.borrow_mut().push(channel.to_string());
    }
}

fn load(raw: &str) -> Vec<RawEvent> {
    serde_json::from_str(raw).expect("fixture parses")
}

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Feeds every event and records (accepted, active count) after each.
fn replay(state: &mut State<Panel>, events: &[RawEvent]) -> Vec<(bool, usize)> {
    events
        .iter()
        .map(|e| (state.update_inputs(e), state.num_active_inputs()))
        .collect()
}

#[test]
fn single_touch_counts_one_then_zero() {
    init();
    let mut state = State::default();
    let trace = replay(&mut state, &load(include_str!("fixtures/single_touch.json")));
    assert_eq!(trace, vec![(true, 1), (true, 1), (true, 0)]);

    let contact = state.tracker().get(ContactId(1)).unwrap();
    assert_eq!(contact.phase, Phase::End);
    assert_eq!(contact.initial.client_x, 10.0);
    assert_eq!(contact.current.client_x, 14.0);
    assert_eq!(contact.current.time_stamp, 32.0);
}

#[test]
fn contacts_on_two_targets_invalidate() {
    init();
    let mut state = State::default();
    let trace = replay(&mut state, &load(include_str!("fixtures/split_targets.json")));
    assert_eq!(trace, vec![(false, 0)]);
    assert!(state.contacts().is_empty());
}

#[test]
fn two_finger_sequence_stays_valid() {
    let mut state = State::default();
    let trace = replay(&mut state, &load(include_str!("fixtures/two_finger_pinch.json")));
    assert_eq!(trace, vec![(true, 1), (true, 2), (true, 2), (true, 1), (true, 0)]);
    let ids: Vec<ContactId> = state.contacts().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![ContactId(4), ContactId(5)]);
}

#[test]
fn mouse_drag_uses_the_pointer_record() {
    let mut state = State::default();
    let trace = replay(&mut state, &load(include_str!("fixtures/mouse_drag.json")));
    // the hover before the press is an orphan and changes nothing
    assert_eq!(trace, vec![(true, 0), (true, 1), (true, 1), (true, 0)]);
    let pointer = state.tracker().get(ContactId::POINTER).unwrap();
    assert_eq!(pointer.initial.client_x, 2.0);
    assert_eq!(pointer.previous.client_x, 40.0);
}

#[test]
fn replaying_a_start_twice_resets() {
    let mut state = State::<Panel>::default();
    let events = load(include_str!("fixtures/single_touch.json"));
    assert!(state.update_inputs(&events[0]));
    assert!(!state.update_inputs(&events[0]));
    assert_eq!(state.num_active_inputs(), 0);
}

#[test]
fn bindings_are_scoped_to_their_panel() {
    let mut state = State::new(Settings::default());
    let left = Panel::new("left");
    let right = Panel::new("right");
    let noop: Rc<dyn Fn()> = Rc::new(|| {});

    state.add_binding(left.clone(), "swipe", noop.clone(), false, false).unwrap();
    state.add_binding(right.clone(), "pinch", noop.clone(), true, false).unwrap();
    state.add_binding(left.clone(), "swipe", noop.clone(), false, true).unwrap();
    assert!(state.add_binding(left.clone(), "flick", noop.clone(), false, false).is_err());

    let on_left = state.retrieve_bindings(&left);
    assert_eq!(on_left.len(), 2);
    assert!(on_left.iter().all(|b| b.element.name == "left"));
    assert_eq!(on_left[0].gesture_id(), on_left[1].gesture_id());
    assert!(on_left[1].bind_once);

    assert_eq!(*left.channels.borrow(), vec!["swipe0", "swipe0"]);
    assert_eq!(*right.channels.borrow(), vec!["pinch1"]);
}
