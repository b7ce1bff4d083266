use super::bindings_panel::{BindingRow, BindingsPanel};
use super::contacts_panel::ContactsPanel;
use super::settings_modal::SettingsModal;
use std::rc::Rc;
use touch_region::{BUILTIN_GESTURES, RawEvent, Region, Settings, State};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Element;
use yew::prelude::*;

const SETTINGS_KEY: &str = "tr_settings";

/// What the panels show about the region.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegionView {
    pub events_seen: u64,
    pub active: usize,
    pub ended: usize,
    pub invalidations: u64,
    pub last_event: String,
    pub last_invalidation: Option<String>,
}

pub enum RegionAction {
    Observed {
        kind: String,
        valid: bool,
        active: usize,
        ended: usize,
        invalidation: Option<String>,
    },
    Cleared,
}

impl Reducible for RegionView {
    type Action = RegionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RegionAction::Observed {
                kind,
                valid,
                active,
                ended,
                invalidation,
            } => {
                next.events_seen += 1;
                next.last_event = kind;
                next.active = active;
                next.ended = ended;
                if !valid {
                    next.invalidations += 1;
                    next.last_invalidation = invalidation;
                }
            }
            RegionAction::Cleared => {
                next.active = 0;
                next.ended = 0;
            }
        }
        Rc::new(next)
    }
}

fn load_settings() -> Settings {
    let raw = web_sys::window()
        .and_then(|win| win.local_storage().ok().flatten())
        .and_then(|store| store.get_item(SETTINGS_KEY).ok().flatten());
    match raw.map(|r| Settings::from_json(&r)) {
        Some(Ok(settings)) => settings,
        Some(Err(e)) => {
            log::warn!("ignoring stored settings: {}", e);
            Settings::default()
        }
        None => Settings::default(),
    }
}

fn save_settings(settings: &Settings) {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            match settings.to_json() {
                Ok(s) => {
                    let _ = store.set_item(SETTINGS_KEY, &s);
                }
                Err(e) => log::warn!("could not save settings: {}", e),
            }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let surface_ref = use_node_ref();
    let settings = use_state(load_settings);
    let show_settings = use_state(|| false);
    let view = use_reducer(RegionView::default);
    let rows = use_state(Vec::<BindingRow>::new);
    let state = {
        let initial = (*settings).clone();
        use_mut_ref(move || State::<Element>::new(initial))
    };

    // Bind every built-in gesture on the surface, then start feeding events
    {
        let surface_ref = surface_ref.clone();
        let state = state.clone();
        let view = view.clone();
        let rows = rows.clone();
        use_effect_with((), move |_| {
            let region = surface_ref.cast::<Element>().map(|el| {
                let mut bound = Vec::new();
                for name in BUILTIN_GESTURES {
                    // fired by whichever interpreter dispatches on this channel
                    let handler = Closure::<dyn Fn(web_sys::Event)>::new(|e: web_sys::Event| {
                        log::info!("gesture notification '{}'", e.type_())
                    })
                    .into_js_value()
                    .unchecked_into::<js_sys::Function>();
                    // taps are observed on the way down, everything else bubbles
                    let capture = name == "tap";
                    let mut st = state.borrow_mut();
                    match st.add_binding(el.clone(), name, handler, capture, false) {
                        Ok(b) => bound.push(BindingRow {
                            channel: b.channel().unwrap_or_default(),
                            capture: b.capture,
                            bind_once: b.bind_once,
                        }),
                        Err(e) => log::warn!("{}", e),
                    }
                }
                rows.set(bound);

                let observer = {
                    let state = state.clone();
                    let view = view.clone();
                    move |raw: &RawEvent, valid: bool| {
                        let st = state.borrow();
                        view.dispatch(RegionAction::Observed {
                            kind: raw.kind.clone(),
                            valid,
                            active: st.num_active_inputs(),
                            ended: st.tracker().ended_count(),
                            invalidation: st.last_invalidation().map(|r| r.to_string()),
                        });
                    }
                };
                Region::attach(&el, state.clone(), observer)
            });
            move || drop(region)
        });
    }

    let open_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(true))
    };
    let close_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(false))
    };
    let change_settings = {
        let settings = settings.clone();
        let state = state.clone();
        Callback::from(move |next: Settings| {
            save_settings(&next);
            state.borrow_mut().apply_settings(next.clone());
            settings.set(next);
        })
    };
    let reset_contacts = {
        let state = state.clone();
        let view = view.clone();
        Callback::from(move |_| {
            state.borrow_mut().reset_inputs();
            view.dispatch(RegionAction::Cleared);
        })
    };

    html! {
        <div style="position:fixed; inset:0; background:#0d1117; color:#c9d1d9; font-family:sans-serif;">
            <div id="top-bar" style="display:flex; justify-content:space-between; align-items:center; padding:8px 12px; border-bottom:1px solid #30363d;">
                <span style="font-weight:600;">{"Touch Region"}</span>
                <button onclick={open_settings} style="padding:4px 10px;">{"Settings"}</button>
            </div>
            <div ref={surface_ref} style="position:absolute; top:45px; left:0; right:0; bottom:0; touch-action:none; user-select:none;">
                <ContactsPanel
                    active={view.active}
                    ended={view.ended}
                    events_seen={view.events_seen}
                    invalidations={view.invalidations}
                    last_event={view.last_event.clone()}
                    last_invalidation={view.last_invalidation.clone()}
                />
                <BindingsPanel rows={(*rows).clone()} />
            </div>
            <SettingsModal
                show={*show_settings}
                settings={(*settings).clone()}
                on_close={close_settings}
                on_change={change_settings}
                on_reset_contacts={reset_contacts}
            />
        </div>
    }
}
