use leptos::*;
use portfolio_core::content::Icon;

#[component]
pub fn IconGlyph(
    icon: Icon,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] style: String,
) -> impl IntoView {
    view! { <i class=format!("icon {} {class}", icon.class()) style=style aria-hidden="true"></i> }
}
