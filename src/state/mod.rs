pub mod bindings;
pub mod contacts;
pub mod coordinator;

pub use bindings::{Binding, BindingRegistry, Surface};
pub use contacts::{Contact, ContactTracker};
pub use coordinator::State;
