use leptos::prelude::*;

/// Card holding one JSON dump. `output_id` becomes the id of the `<pre>` element.
#[component]
pub fn Panel(
    /// Title displayed at the top of the card
    title: String,
    /// id of the output element
    output_id: &'static str,
    /// Text shown in the output element
    #[prop(into)]
    text: Signal<String>,
    /// Controls rendered above the output (buttons, inputs)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-title">{title}</div>
            <div class="panel-controls">{children()}</div>
            <pre id=output_id class="panel-output">{move || text.get()}</pre>
        </div>
    }
}
