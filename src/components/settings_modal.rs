use touch_region::{DuplicateStart, Settings};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub settings: Settings,
    pub on_close: Callback<()>,
    pub on_change: Callback<Settings>,
    pub on_reset_contacts: Callback<()>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_idle_cb = {
        let cb = props.on_change.clone();
        let settings = props.settings.clone();
        Callback::from(move |_| {
            cb.emit(Settings {
                reset_when_idle: !settings.reset_when_idle,
                ..settings.clone()
            })
        })
    };
    let toggle_prevent_cb = {
        let cb = props.on_change.clone();
        let settings = props.settings.clone();
        Callback::from(move |_| {
            cb.emit(Settings {
                prevent_default: !settings.prevent_default,
                ..settings.clone()
            })
        })
    };
    let toggle_restart_cb = {
        let cb = props.on_change.clone();
        let settings = props.settings.clone();
        Callback::from(move |_| {
            let policy = match settings.duplicate_start {
                DuplicateStart::Reset => DuplicateStart::Restart,
                DuplicateStart::Restart => DuplicateStart::Reset,
            };
            cb.emit(settings.clone().with_duplicate_start(policy))
        })
    };
    let reset_contacts_cb = {
        let cb = props.on_reset_contacts.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:340px; max-width:480px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.settings.reset_when_idle} onclick={toggle_idle_cb} />
                    <span>{"Forget contacts once all have ended"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.settings.prevent_default} onclick={toggle_prevent_cb} />
                    <span>{"Prevent default touch handling"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.settings.duplicate_start == DuplicateStart::Restart} onclick={toggle_restart_cb} />
                    <span>{"Restart a contact that starts twice (instead of resetting)"}</span>
                </label>
            </div>
            <div style="display:flex; gap:8px; flex-wrap:wrap;">
                <button onclick={reset_contacts_cb} style="background:#f85149; border:1px solid #b62324; color:#fff; flex:1;">{"Reset Contacts"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Done"}</button>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Settings are saved in local storage. Interpreter options apply after a reload."}</div>
        </div>
    </div>}
}
