//! Gesture capabilities.
//!
//! The coordinator never looks inside an interpreter: it only needs a type
//! discriminator, a slot for the numeric id handed out on first binding, and
//! a way to tell the interpreter its contact sequence was thrown away.
//! Detection itself lives with the interpreters.

use crate::config::{DistanceOptions, GestureOptions, PanOptions, RotateOptions, SwipeOptions, TapOptions};
use crate::error::{GestureError, Result};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Names of the capabilities every coordinator starts with.
pub const BUILTIN_GESTURES: [&str; 6] = ["tap", "pan", "pinch", "rotate", "swipe", "expand"];

/// Process-unique gesture id, allocated in increasing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GestureId(pub u32);

impl fmt::Display for GestureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub trait Gesture: fmt::Debug {
    /// Type discriminator, e.g. `"swipe"`.
    fn kind(&self) -> &str;

    fn id(&self) -> Option<GestureId>;

    fn set_id(&mut self, id: GestureId);

    /// The contact sequence this interpreter was following has been discarded.
    fn invalidate(&mut self) {}

    /// Notification channel name: kind followed by id (`"swipe3"`).
    fn channel(&self) -> Option<String> {
        self.id().map(|id| format!("{}{}", self.kind(), id))
    }
}

/// Shared, single-threaded handle to an interpreter.
pub type GestureHandle = Rc<RefCell<dyn Gesture>>;

pub fn handle<G: Gesture + 'static>(gesture: G) -> GestureHandle {
    Rc::new(RefCell::new(gesture))
}

/// How an application names the gesture it wants to bind.
#[derive(Clone)]
pub enum GestureRef {
    ByName(String),
    ByInstance(GestureHandle),
}

impl From<&str> for GestureRef {
    fn from(name: &str) -> Self {
        Self::ByName(name.to_string())
    }
}

impl From<String> for GestureRef {
    fn from(name: String) -> Self {
        Self::ByName(name)
    }
}

impl From<GestureHandle> for GestureRef {
    fn from(handle: GestureHandle) -> Self {
        Self::ByInstance(handle)
    }
}

impl From<&GestureHandle> for GestureRef {
    fn from(handle: &GestureHandle) -> Self {
        Self::ByInstance(handle.clone())
    }
}

impl fmt::Debug for GestureRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByName(name) => f.debug_tuple("ByName").field(name).finish(),
            Self::ByInstance(handle) => match handle.try_borrow() {
                Ok(g) => f.debug_tuple("ByInstance").field(&g.kind()).finish(),
                Err(_) => f.write_str("ByInstance(<borrowed>)"),
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Tap {
    id: Option<GestureId>,
    pub options: TapOptions,
}

impl Tap {
    pub fn new(options: TapOptions) -> Self {
        Self { id: None, options }
    }
}

impl Gesture for Tap {
    fn kind(&self) -> &str {
        "tap"
    }
    fn id(&self) -> Option<GestureId> {
        self.id
    }
    fn set_id(&mut self, id: GestureId) {
        self.id = Some(id);
    }
}

#[derive(Debug, Clone, Default)]
pub struct Pan {
    id: Option<GestureId>,
    pub options: PanOptions,
}

impl Pan {
    pub fn new(options: PanOptions) -> Self {
        Self { id: None, options }
    }
}

impl Gesture for Pan {
    fn kind(&self) -> &str {
        "pan"
    }
    fn id(&self) -> Option<GestureId> {
        self.id
    }
    fn set_id(&mut self, id: GestureId) {
        self.id = Some(id);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DistanceKind {
    Pinch,
    Expand,
}

/// Two-contact distance change; pinch and expand only differ by direction.
#[derive(Debug, Clone)]
pub struct Distance {
    id: Option<GestureId>,
    direction: DistanceKind,
    pub options: DistanceOptions,
}

impl Distance {
    pub fn pinch(options: DistanceOptions) -> Self {
        Self {
            id: None,
            direction: DistanceKind::Pinch,
            options,
        }
    }

    pub fn expand(options: DistanceOptions) -> Self {
        Self {
            id: None,
            direction: DistanceKind::Expand,
            options,
        }
    }

    pub fn direction(&self) -> DistanceKind {
        self.direction
    }
}

impl Gesture for Distance {
    fn kind(&self) -> &str {
        match self.direction {
            DistanceKind::Pinch => "pinch",
            DistanceKind::Expand => "expand",
        }
    }
    fn id(&self) -> Option<GestureId> {
        self.id
    }
    fn set_id(&mut self, id: GestureId) {
        self.id = Some(id);
    }
}

#[derive(Debug, Clone, Default)]
pub struct Rotate {
    id: Option<GestureId>,
    pub options: RotateOptions,
}

impl Rotate {
    pub fn new(options: RotateOptions) -> Self {
        Self { id: None, options }
    }
}

impl Gesture for Rotate {
    fn kind(&self) -> &str {
        "rotate"
    }
    fn id(&self) -> Option<GestureId> {
        self.id
    }
    fn set_id(&mut self, id: GestureId) {
        self.id = Some(id);
    }
}

#[derive(Debug, Clone, Default)]
pub struct Swipe {
    id: Option<GestureId>,
    pub options: SwipeOptions,
}

impl Swipe {
    pub fn new(options: SwipeOptions) -> Self {
        Self { id: None, options }
    }
}

impl Gesture for Swipe {
    fn kind(&self) -> &str {
        "swipe"
    }
    fn id(&self) -> Option<GestureId> {
        self.id
    }
    fn set_id(&mut self, id: GestureId) {
        self.id = Some(id);
    }
}

/// Name → interpreter table. A name, once present, always resolves to the
/// same instance.
pub struct GestureSet {
    entries: BTreeMap<String, GestureHandle>,
}

impl GestureSet {
    pub fn new(options: &GestureOptions) -> Self {
        let mut entries: BTreeMap<String, GestureHandle> = BTreeMap::new();
        entries.insert("tap".into(), handle(Tap::new(options.tap)));
        entries.insert("pan".into(), handle(Pan::new(options.pan)));
        entries.insert("pinch".into(), handle(Distance::pinch(options.distance)));
        entries.insert("rotate".into(), handle(Rotate::new(options.rotate)));
        entries.insert("swipe".into(), handle(Swipe::new(options.swipe)));
        entries.insert("expand".into(), handle(Distance::expand(options.distance)));
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&GestureHandle> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Adds a custom capability under `key`. Existing names are never rebound.
    pub fn register(&mut self, key: &str, gesture: GestureHandle) -> Result<()> {
        if self.entries.contains_key(key) {
            return Err(GestureError::AlreadyRegistered(key.to_string()));
        }
        self.entries.insert(key.to_string(), gesture);
        Ok(())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GestureHandle)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Resolves a reference to a capability; unknown names give `None`.
    pub fn resolve(&self, gesture: &GestureRef) -> Option<GestureHandle> {
        match gesture {
            GestureRef::ByName(name) => self.get(name).cloned(),
            GestureRef::ByInstance(handle) => Some(handle.clone()),
        }
    }

    /// A known name classifies as itself; an instance by its own kind.
    pub fn classify(&self, gesture: &GestureRef) -> Option<String> {
        match gesture {
            GestureRef::ByName(name) => self.contains(name).then(|| name.clone()),
            GestureRef::ByInstance(handle) => {
                let kind = handle.try_borrow().ok()?.kind().to_string();
                Some(kind)
            }
        }
    }
}

impl Default for GestureSet {
    fn default() -> Self {
        Self::new(&GestureOptions::default())
    }
}
