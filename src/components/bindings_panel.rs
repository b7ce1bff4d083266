use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct BindingRow {
    pub channel: String,
    pub capture: bool,
    pub bind_once: bool,
}

#[derive(Properties, PartialEq, Clone)]
pub struct BindingsPanelProps {
    pub rows: Vec<BindingRow>,
}

#[function_component]
pub fn BindingsPanel(props: &BindingsPanelProps) -> Html {
    html! {<div style="position:absolute; right:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:170px;">
        <div style="font-weight:600; margin-bottom:4px;">{"Bindings"}</div>
        { for props.rows.iter().map(|row| {
            html!{<div style="display:flex; gap:6px; font-size:12px;">
                <span style="flex:1;">{ row.channel.clone() }</span>
                { if row.capture { html!{<span style="color:#8b949e;">{"capture"}</span>} } else { html!{} } }
                { if row.bind_once { html!{<span style="color:#8b949e;">{"once"}</span>} } else { html!{} } }
            </div>}
        }) }
    </div>}
}
