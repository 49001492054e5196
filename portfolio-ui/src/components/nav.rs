use crate::components::icon::IconGlyph;
use crate::components::scramble_text::ScrambleText;
use crate::theme::ThemeContext;
use leptos::*;
use portfolio_core::content::{NAV_LINKS, PROFILE};

#[component]
pub fn NavBar(theme: ThemeContext) -> impl IntoView {
    let palette = theme.palette();

    view! {
      <nav class="nav-bar">
        <a class="brand" href="#home">
          <IconGlyph icon=PROFILE.brand_icon />
          <ScrambleText text=PROFILE.brand />
        </a>
        <ul class="nav-links">
          {NAV_LINKS
              .iter()
              .map(|entry| view! {
                <li>
                  <a class="nav-link" href=entry.href>{entry.label}</a>
                </li>
              })
              .collect_view()}
        </ul>
        <button
          class="theme-toggle"
          aria-label="Toggle theme"
          on:click=move |_| theme.toggle()
        >
          {move || view! { <IconGlyph icon=palette.get().toggle_icon /> }}
        </button>
      </nav>
    }
}
