//! Touch Region
//!
//! Multi-contact gesture bookkeeping for browser surfaces: it tracks which
//! contacts are alive, keeps the element ↔ gesture ↔ handler bindings, and
//! decides on every raw event whether the running contact sequence still
//! holds together or has to be thrown away.
//!
//! Recognizing a pinch or a swipe from contact geometry is up to the
//! gesture interpreters; this crate only gives them a consistent view of
//! the contacts and a place to be bound.
//!
//! # Example
//!
//! ```no_run
//! use touch_region::{RawEvent, Settings, State};
//! use touch_region::model::ContactDatum;
//!
//! let mut state: State<web_sys::Element> = State::new(Settings::default());
//! let one = ContactDatum::at(1, 10.0, 10.0);
//! assert!(state.update_inputs(&RawEvent::touch("touchstart", vec![one], vec![one])));
//! assert_eq!(state.num_active_inputs(), 1);
//! ```

pub mod config;
pub mod error;
pub mod gestures;
pub mod model;
pub mod state;
pub mod util;
pub mod web;

pub use config::{DuplicateStart, Settings};
pub use error::{GestureError, Invalidation, Result};
pub use gestures::{BUILTIN_GESTURES, Gesture, GestureHandle, GestureId, GestureRef, GestureSet};
pub use model::{ContactId, Phase, RawEvent};
pub use state::{Binding, Contact, State, Surface};
pub use util::normalize_event;
pub use web::Region;
