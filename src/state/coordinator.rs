//! The state coordinator.
//!
//! One `State` per interaction surface. It is created once, lives as long as
//! its owner, and is handed by reference to whatever drives the event loop.
//! Every operation runs to completion; nothing here blocks or suspends.

use super::bindings::{Binding, BindingRegistry, Surface};
use super::contacts::{Contact, ContactTracker};
use crate::config::Settings;
use crate::error::{Invalidation, Result};
use crate::gestures::{GestureHandle, GestureRef, GestureSet};
use crate::model::RawEvent;

pub struct State<S: Surface> {
    settings: Settings,
    gestures: GestureSet,
    tracker: ContactTracker,
    registry: BindingRegistry<S>,
    last_invalidation: Option<Invalidation>,
}

impl<S: Surface> State<S> {
    /// Builds the built-in capability set from `settings`.
    pub fn new(settings: Settings) -> Self {
        Self {
            gestures: GestureSet::new(&settings.gestures),
            tracker: ContactTracker::new(settings.duplicate_start),
            registry: BindingRegistry::new(),
            last_invalidation: None,
            settings,
        }
    }

    /// Binds `element` to a gesture given by name or by instance.
    pub fn add_binding(
        &mut self,
        element: S,
        gesture: impl Into<GestureRef>,
        handler: S::Handler,
        capture: bool,
        bind_once: bool,
    ) -> Result<&Binding<S>> {
        self.registry
            .bind(&self.gestures, element, gesture.into(), handler, capture, bind_once)
    }

    pub fn retrieve_bindings(&self, element: &S) -> Vec<&Binding<S>> {
        self.registry.bindings_for(element)
    }

    /// Feeds one raw event batch. `false` means the contact sequence was
    /// invalidated and every record discarded.
    pub fn update_inputs(&mut self, raw: &RawEvent) -> bool {
        match self.tracker.ingest(raw) {
            Ok(()) => true,
            Err(reason) => {
                log::debug!("contact sequence invalidated: {}", reason);
                self.last_invalidation = Some(reason);
                self.invalidate_gestures();
                false
            }
        }
    }

    pub fn reset_inputs(&mut self) {
        self.tracker.reset();
    }

    pub fn num_active_inputs(&self) -> usize {
        self.tracker.active_count()
    }

    /// Type discriminator of a known name or of a gesture instance.
    pub fn gesture_type(&self, gesture: impl Into<GestureRef>) -> Option<String> {
        self.gestures.classify(&gesture.into())
    }

    /// Makes a custom gesture bindable by name.
    pub fn register_gesture(&mut self, key: &str, gesture: GestureHandle) -> Result<()> {
        self.gestures.register(key, gesture)
    }

    pub fn contacts(&self) -> Vec<&Contact> {
        self.tracker.contacts()
    }

    pub fn tracker(&self) -> &ContactTracker {
        &self.tracker
    }

    pub fn bindings(&self) -> &BindingRegistry<S> {
        &self.registry
    }

    pub fn gestures(&self) -> &GestureSet {
        &self.gestures
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Swaps settings in place. Only the contact policy takes effect for an
    /// existing coordinator; interpreter options apply to new ones.
    pub fn apply_settings(&mut self, settings: Settings) {
        self.tracker.set_duplicate_start(settings.duplicate_start);
        self.settings = settings;
    }

    pub fn last_invalidation(&self) -> Option<Invalidation> {
        self.last_invalidation
    }

    // Every interpreter that could have been following the sequence hears
    // about it, bound instances included.
    fn invalidate_gestures(&self) {
        let named = self.gestures.iter().map(|(_, g)| g);
        let bound = self.registry.iter().map(|b| &b.gesture);
        let mut seen: Vec<&GestureHandle> = Vec::new();
        for gesture in named.chain(bound) {
            if seen.iter().any(|s| std::rc::Rc::ptr_eq(s, gesture)) {
                continue;
            }
            seen.push(gesture);
            if let Ok(mut g) = gesture.try_borrow_mut() {
                g.invalidate();
            }
        }
    }
}

impl<S: Surface> Default for State<S> {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
