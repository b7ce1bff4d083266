pub mod app;
pub mod bindings_panel;
pub mod contacts_panel;
pub mod settings_modal;
