// Element ↔ gesture ↔ handler bindings

use crate::error::{GestureError, Result};
use crate::gestures::{GestureHandle, GestureId, GestureRef, GestureSet};

/// A visual element gestures can be bound to.
///
/// Elements are compared by identity, never by value. Registering the
/// notification channel is the only thing the registry asks of them.
pub trait Surface: Clone {
    type Handler: Clone;

    fn same_surface(&self, other: &Self) -> bool;

    fn register_notification(&self, channel: &str, handler: &Self::Handler, capture: bool);
}

/// One subscription of an element to a gesture.
pub struct Binding<S: Surface> {
    pub element: S,
    pub gesture: GestureHandle,
    pub handler: S::Handler,
    pub capture: bool,
    /// Stored and passed along; the dispatcher enforces it.
    pub bind_once: bool,
}

impl<S: Surface> Binding<S> {
    pub fn gesture_id(&self) -> Option<GestureId> {
        self.gesture.try_borrow().ok().and_then(|g| g.id())
    }

    pub fn channel(&self) -> Option<String> {
        self.gesture.try_borrow().ok().and_then(|g| g.channel())
    }
}

impl<S: Surface> Clone for Binding<S> {
    fn clone(&self) -> Self {
        Self {
            element: self.element.clone(),
            gesture: self.gesture.clone(),
            handler: self.handler.clone(),
            capture: self.capture,
            bind_once: self.bind_once,
        }
    }
}

pub struct BindingRegistry<S: Surface> {
    bindings: Vec<Binding<S>>,
    next_id: u32,
}

impl<S: Surface> Default for BindingRegistry<S> {
    fn default() -> Self {
        Self {
            bindings: Vec::new(),
            next_id: 0,
        }
    }
}

impl<S: Surface> BindingRegistry<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `element` to the gesture `gesture` refers to.
    ///
    /// The resolved capability gets the next id if it never had one; an id,
    /// once given, stays. The element's notification channel is registered
    /// exactly once per successful call.
    pub fn bind(
        &mut self,
        gestures: &GestureSet,
        element: S,
        gesture: GestureRef,
        handler: S::Handler,
        capture: bool,
        bind_once: bool,
    ) -> Result<&Binding<S>> {
        let resolved = match gesture {
            GestureRef::ByName(name) => gestures
                .get(&name)
                .cloned()
                .ok_or(GestureError::UnrecognizedGesture(name))?,
            GestureRef::ByInstance(handle) => handle,
        };
        let channel = {
            let mut g = resolved.borrow_mut();
            if g.id().is_none() {
                g.set_id(GestureId(self.next_id));
                self.next_id += 1;
            }
            g.channel().unwrap_or_default()
        };
        log::debug!("binding {} (capture: {}, once: {})", channel, capture, bind_once);

        element.register_notification(&channel, &handler, capture);
        self.bindings.push(Binding {
            element,
            gesture: resolved,
            handler,
            capture,
            bind_once,
        });
        let last = self.bindings.len() - 1;
        Ok(&self.bindings[last])
    }

    /// Every binding on `element`, in registration order.
    pub fn bindings_for(&self, element: &S) -> Vec<&Binding<S>> {
        self.bindings
            .iter()
            .filter(|b| b.element.same_surface(element))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding<S>> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Id the next never-bound gesture will receive.
    pub fn next_id(&self) -> GestureId {
        GestureId(self.next_id)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::gestures::{handle, Tap};
    use std::cell::RefCell;
    use std::rc::Rc;

    pub type Log = Rc<RefCell<Vec<(u32, String, bool)>>>;

    /// Element double that records every registered channel.
    #[derive(Clone)]
    pub struct Node {
        pub key: u32,
        pub log: Log,
    }

    impl Node {
        pub fn new(key: u32, log: &Log) -> Self {
            Self {
                key,
                log: log.clone(),
            }
        }
    }

    impl Surface for Node {
        type Handler = Rc<dyn Fn(&str)>;

        fn same_surface(&self, other: &Self) -> bool {
            self.key == other.key
        }

        fn register_notification(&self, channel: &str, _handler: &Self::Handler, capture: bool) {
            self.log.borrow_mut().push((self.key, channel.to_string(), capture));
        }
    }

    pub fn noop() -> Rc<dyn Fn(&str)> {
        Rc::new(|_| {})
    }

    #[test]
    fn named_binding_registers_its_channel_once() {
        let log = Log::default();
        let set = GestureSet::default();
        let mut registry = BindingRegistry::new();
        let binding = registry
            .bind(&set, Node::new(1, &log), "tap".into(), noop(), true, false)
            .unwrap();
        assert_eq!(binding.gesture_id(), Some(GestureId(0)));
        assert_eq!(*log.borrow(), vec![(1, "tap0".to_string(), true)]);
    }

    #[test]
    fn unknown_name_binds_nothing() {
        let log = Log::default();
        let set = GestureSet::default();
        let mut registry = BindingRegistry::new();
        let err = registry
            .bind(&set, Node::new(1, &log), "wiggle".into(), noop(), false, false)
            .err()
            .unwrap();
        assert!(matches!(err, GestureError::UnrecognizedGesture(ref n) if n == "wiggle"));
        assert!(registry.is_empty());
        assert!(log.borrow().is_empty());
        assert_eq!(registry.next_id(), GestureId(0));
    }

    #[test]
    fn instance_keeps_its_first_id() {
        let log = Log::default();
        let set = GestureSet::default();
        let mut registry = BindingRegistry::new();
        let tap = handle(Tap::default());
        registry
            .bind(&set, Node::new(1, &log), (&tap).into(), noop(), false, false)
            .unwrap();
        registry
            .bind(&set, Node::new(2, &log), (&tap).into(), noop(), false, true)
            .unwrap();
        assert_eq!(tap.borrow().id(), Some(GestureId(0)));
        assert_eq!(registry.next_id(), GestureId(1));
        assert!(registry.iter().nth(1).unwrap().bind_once);
    }

    #[test]
    fn lookup_is_by_element_identity() {
        let log = Log::default();
        let set = GestureSet::default();
        let mut registry = BindingRegistry::new();
        let a = Node::new(1, &log);
        let b = Node::new(2, &log);
        registry.bind(&set, a.clone(), "pan".into(), noop(), false, false).unwrap();
        registry.bind(&set, b.clone(), "pan".into(), noop(), false, false).unwrap();
        registry.bind(&set, a.clone(), "tap".into(), noop(), false, false).unwrap();

        let kinds: Vec<String> = registry
            .bindings_for(&a)
            .iter()
            .map(|b| b.gesture.borrow().kind().to_string())
            .collect();
        assert_eq!(kinds, vec!["pan", "tap"]);
        assert!(registry.bindings_for(&a).iter().all(|binding| binding.element.key == 1));
        assert_eq!(registry.bindings_for(&b).len(), 1);
    }
}
