use crate::theme::use_palette;
use leptos::*;
use portfolio_core::Spotlight;

/// Bordered card with a radial highlight that follows the pointer.
///
/// `color` overrides the theme's spotlight tint.
#[component]
pub fn SpotlightCard(
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] color: Option<String>,
    children: Children,
) -> impl IntoView {
    let palette = use_palette();
    let node = create_node_ref::<html::Div>();
    let (spot, set_spot) = create_signal(Spotlight::default());

    let on_move = move |ev: ev::MouseEvent| {
        let Some(el) = node.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        set_spot.update(|s| {
            s.track(
                f64::from(ev.client_x()),
                f64::from(ev.client_y()),
                rect.left(),
                rect.top(),
            )
        });
    };

    let background = move || {
        let tint = color
            .clone()
            .unwrap_or_else(|| palette.get().spotlight.to_string());
        spot.with(|s| format!("opacity: {}; background: {}", s.opacity(), s.background(&tint)))
    };

    view! {
      <div
        node_ref=node
        class=format!("spotlight-card {class}")
        on:mousemove=on_move
        on:mouseenter=move |_| set_spot.update(Spotlight::enter)
        on:mouseleave=move |_| set_spot.update(Spotlight::leave)
      >
        <div class="spotlight-glow" style=background></div>
        <div class="spotlight-body">{children()}</div>
      </div>
    }
}
