use leptos::*;

/// Bobs its children up and down forever (see `.floating` in the stylesheet).
#[component]
pub fn Floating(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=format!("floating {class}")>{children()}</div> }
}
