use leptos::leptos_dom::helpers::{set_interval_with_handle, IntervalHandle};
use leptos::*;
use portfolio_core::boot::LINE_INTERVAL;
use portfolio_core::content::{BOOT_CAPTION, BOOT_LINES};
use portfolio_core::{BootEvent, BootSequence};

/// Retro terminal intro. Lines appear one per tick; `on_complete` fires
/// once after the last line has settled.
#[component]
pub fn BootScreen(on_complete: Callback<()>, #[prop(into)] leaving: Signal<bool>) -> impl IntoView {
    let sequence = store_value(BootSequence::new(BOOT_LINES.len()));
    let (shown, set_shown) = create_signal(0usize);
    let ticker = store_value(None::<IntervalHandle>);

    let stop = move || {
        if let Some(handle) = ticker.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    };

    let tick = move || {
        let events = sequence
            .try_update_value(|s| s.advance(LINE_INTERVAL))
            .unwrap_or_default();
        for event in events {
            match event {
                BootEvent::Line(i) => set_shown.set(i + 1),
                BootEvent::Complete => {
                    stop();
                    on_complete.call(());
                }
            }
        }
    };

    match set_interval_with_handle(tick, LINE_INTERVAL) {
        Ok(handle) => ticker.set_value(Some(handle)),
        Err(err) => {
            log::warn!("boot timer unavailable ({err:?}); skipping intro");
            set_shown.set(BOOT_LINES.len());
            on_complete.call(());
        }
    }
    on_cleanup(stop);

    view! {
      <div class="boot-screen" class:leaving=move || leaving.get()>
        <div class="boot-bezel">
          <div class="boot-glass">
            <div class="boot-lines">
              {move || {
                  BOOT_LINES[..shown.get()]
                      .iter()
                      .map(|line| view! { <div class="boot-line">{*line}</div> })
                      .collect_view()
              }}
              <span class="boot-cursor">"_"</span>
            </div>
            <div class="scanlines"></div>
          </div>
          <div class="boot-caption">{BOOT_CAPTION}</div>
          <div class="boot-led"></div>
        </div>
      </div>
    }
}
