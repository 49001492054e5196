use leptos::leptos_dom::helpers::{set_interval_with_handle, IntervalHandle};
use leptos::*;
use portfolio_core::scramble::{Scramble, TICK};

/// Text that scrambles and resolves itself each time the pointer enters it.
#[component]
pub fn ScrambleText(#[prop(into)] text: String, #[prop(optional, into)] class: String) -> impl IntoView {
    let state = store_value(Scramble::new(&text));
    let (display, set_display) = create_signal(text);
    let ticker = store_value(None::<IntervalHandle>);

    let stop = move || {
        if let Some(handle) = ticker.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    };

    let render = move |advance: &dyn Fn(&mut Scramble) -> bool| -> bool {
        state
            .try_update_value(|s| {
                let running = advance(s);
                set_display.set(s.display().to_string());
                running
            })
            .unwrap_or(false)
    };

    let on_enter = move |_| {
        stop();
        if !render(&|s| s.trigger(&mut rand::thread_rng())) {
            return;
        }
        let tick = move || {
            if !render(&|s| s.step(&mut rand::thread_rng())) {
                stop();
            }
        };
        match set_interval_with_handle(tick, TICK) {
            Ok(handle) => ticker.set_value(Some(handle)),
            Err(err) => {
                log::warn!("scramble timer unavailable: {err:?}");
                render(&|s| {
                    s.settle();
                    false
                });
            }
        }
    };

    on_cleanup(stop);

    view! {
      <span class=format!("scramble {class}") on:mouseenter=on_enter>
        {move || display.get()}
      </span>
    }
}
