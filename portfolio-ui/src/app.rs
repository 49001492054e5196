use crate::bridge::{self, EmailJsSender};
use crate::components::boot_screen::BootScreen;
use crate::components::nav::NavBar;
use crate::components::sections::Sections;
use crate::theme::provide_theme;
use leptos::*;
use portfolio_core::contact::{SUCCESS_HOLD, SUCCESS_MESSAGE};
use portfolio_core::{ContactFlow, EmailSender, SiteConfig, Spring, SubmissionState, Theme};
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;

/// How long the intro stays mounted while it fades out.
const INTRO_EXIT: Duration = Duration::from_millis(1500);

#[derive(Clone, Copy)]
struct ProgressBar {
    spring: StoredValue<Spring>,
    running: StoredValue<bool>,
    last_frame: StoredValue<f64>,
    value: WriteSignal<f64>,
}

impl ProgressBar {
    /// Retargets the spring and starts the frame loop if it is idle.
    fn retarget(self, target: f64) {
        self.spring.update_value(|s| s.set_target(target));
        if self.running.get_value() {
            return;
        }
        self.running.set_value(true);
        self.last_frame.set_value(bridge::now_ms());
        request_animation_frame(move || self.frame());
    }

    fn frame(self) {
        let now = bridge::now_ms();
        let dt = ((now - self.last_frame.get_value()) / 1000.0).max(0.0);
        self.last_frame.set_value(now);

        let Some((moving, value)) = self.spring.try_update_value(|s| (s.step(dt), s.value())) else {
            return;
        };
        self.value.set(value);
        if moving {
            request_animation_frame(move || self.frame());
        } else {
            self.running.set_value(false);
        }
    }
}

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let theme = provide_theme(Theme::from_ambient(bridge::prefers_light()));
    let palette = theme.palette();
    log::info!("starting with {:?} theme", theme.theme.get_untracked());

    let booted = create_rw_signal(false);
    let intro_mounted = create_rw_signal(true);
    let flow = create_rw_signal(ContactFlow::new());
    let sender = store_value(EmailJsSender::new(config.email));

    let (progress, set_progress) = create_signal(0.0_f64);
    let bar = ProgressBar {
        spring: store_value(Spring::default()),
        running: store_value(false),
        last_frame: store_value(0.0),
        value: set_progress,
    };
    let scroll = window_event_listener(ev::scroll, move |_| bar.retarget(bridge::scroll_fraction()));
    on_cleanup(move || scroll.remove());

    let on_boot_complete = Callback::new(move |_: ()| {
        booted.set(true);
        set_timeout(move || intro_mounted.set(false), INTRO_EXIT);
    });

    let on_submit = Callback::new(move |_: ()| {
        let accepted = match flow.try_update(ContactFlow::begin) {
            Some(Ok(message)) => message,
            Some(Err(err)) => {
                log::debug!("submission refused: {err}");
                return;
            }
            None => return,
        };
        let Some(sender) = sender.try_get_value() else {
            return;
        };
        spawn_local(async move {
            let outcome = sender.send(&accepted).await;
            let state = flow.try_update(|f| f.finish(outcome));
            if state == Some(SubmissionState::Success) {
                set_timeout(
                    move || {
                        flow.update(|f| {
                            f.advance(SUCCESS_HOLD);
                        })
                    },
                    SUCCESS_HOLD,
                );
            }
        });
    });

    let success = move || flow.with(|f| f.state() == SubmissionState::Success);

    view! {
      <div class=move || format!("app {}", palette.get().root)>
        <Show when=move || intro_mounted.get()>
          <BootScreen on_complete=on_boot_complete leaving=booted />
        </Show>

        <Show when=move || booted.get()>
          <div class="page">
            <div class=move || format!("backdrop {}", palette.get().backdrop)></div>
            <div
              class=move || format!("progress-bar {}", palette.get().accent)
              style=move || format!("transform: scaleX({:.4})", progress.get())
            ></div>
            <NavBar theme=theme />

            <Show when=success>
              <div class="sent-banner">
                <div class=move || format!("sent-banner-text {}", palette.get().accent)>{SUCCESS_MESSAGE}</div>
              </div>
            </Show>

            <main>
              <Sections flow=flow on_submit=on_submit />
            </main>
          </div>
        </Show>
      </div>
    }
}
