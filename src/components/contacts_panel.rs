use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ContactsPanelProps {
    pub active: usize,
    pub ended: usize,
    pub events_seen: u64,
    pub invalidations: u64,
    pub last_event: String,
    pub last_invalidation: Option<String>,
}

#[function_component]
pub fn ContactsPanel(props: &ContactsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // label | value
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style={row_style}>
                <span style={format!("{} color:#2ea043;", label_style)}>{"Active contacts"}</span>
                <span style={format!("{} color:#2ea043;", value_style)}>{ props.active }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#8b949e;", label_style)}>{"Ended"}</span>
                <span style={format!("{} color:#8b949e;", value_style)}>{ props.ended }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Events"}</span>
                <span style={format!("{} color:#58a6ff;", value_style)}>{ props.events_seen }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#f85149;", label_style)}>{"Invalidations"}</span>
                <span style={format!("{} color:#f85149;", value_style)}>{ props.invalidations }</span>
            </div>
            <div style="font-size:11px; color:#8b949e;">{ format!("last: {}", props.last_event) }</div>
            { if let Some(reason) = &props.last_invalidation {
                html!{<div style="font-size:11px; color:#f85149; max-width:230px;">{ reason.clone() }</div>}
            } else { html!{} } }
        </div>
    }
}
