use crate::bridge;
use crate::components::icon::IconGlyph;
use crate::theme::use_palette;
use crate::viewport::use_seen_once;
use leptos::leptos_dom::helpers::{set_interval_with_handle, IntervalHandle};
use leptos::*;
use portfolio_core::content::Icon;
use portfolio_core::reveal::{PARTICLE_COUNT, PARTICLE_FLIGHT};
use portfolio_core::{Particle, RevealSequence, RevealStage};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Sampling period of the stage clock. Stage boundaries come from elapsed
/// wall time, not from counting ticks.
const STAGE_TICK: Duration = Duration::from_millis(50);

fn stage_class(stage: RevealStage) -> &'static str {
    match stage {
        RevealStage::Hidden => "stage-hidden",
        RevealStage::FlyIn => "stage-fly-in",
        RevealStage::Pause => "stage-pause",
        RevealStage::Flash => "stage-flash",
        RevealStage::Vanish => "stage-vanish",
        RevealStage::ContentReveal => "stage-reveal",
        RevealStage::Done => "stage-done",
    }
}

fn particle_style(p: &Particle) -> String {
    format!(
        "--dx: {:.1}px; --dy: {:.1}px; --rot: {:.1}deg; width: {:.1}px; height: {:.1}px; animation-duration: {}ms",
        p.x,
        p.y,
        p.rotation,
        p.size,
        p.size,
        PARTICLE_FLIGHT.as_millis()
    )
}

/// Hides its children until first seen, then plays the hard-drive fly-in,
/// flash and particle burst before revealing them.
#[component]
pub fn DriveBurst(children: Children) -> impl IntoView {
    let palette = use_palette();
    let node = create_node_ref::<html::Div>();
    let seen = use_seen_once(node);
    let (stage, set_stage) = create_signal(RevealStage::Hidden);
    let ticker = store_value(None::<IntervalHandle>);
    let particles = Particle::burst(&mut rand::thread_rng(), PARTICLE_COUNT);

    let stop = move || {
        if let Some(handle) = ticker.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    };

    create_effect(move |started: Option<bool>| {
        if started == Some(true) {
            return true;
        }
        if !seen.get() {
            return false;
        }

        let sequence = Rc::new(RefCell::new(RevealSequence::new()));
        sequence.borrow_mut().start();
        set_stage.set(RevealStage::FlyIn);
        let origin = bridge::now_ms();

        let tick = move || {
            let elapsed = Duration::from_secs_f64((bridge::now_ms() - origin).max(0.0) / 1000.0);
            let mut seq = sequence.borrow_mut();
            if let Some(next) = seq.advance_to(elapsed) {
                set_stage.set(next);
            }
            if seq.is_done() {
                stop();
            }
        };
        match set_interval_with_handle(tick, STAGE_TICK) {
            Ok(handle) => ticker.set_value(Some(handle)),
            Err(err) => {
                log::warn!("reveal timer unavailable ({err:?}); showing content");
                set_stage.set(RevealStage::Done);
            }
        }
        true
    });

    on_cleanup(stop);

    view! {
      <div node_ref=node class=move || format!("drive-burst {} {}", stage_class(stage.get()), palette.get().accent)>
        <div class="drive" class:gone=move || stage.get().drive_gone()>
          <div class="drive-box">
            <IconGlyph icon=Icon::HardDrive />
          </div>
        </div>

        <Show when=move || stage.get().particles_launched()>
          {particles
              .iter()
              .map(|p| view! { <div class="particle" style=particle_style(p)></div> })
              .collect_view()}
        </Show>

        <div class="flash"></div>

        <div class="reveal-content" class:visible=move || stage.get().content_visible()>
          {children()}
        </div>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_stage_has_a_distinct_class() {
        let stages = [
            RevealStage::Hidden,
            RevealStage::FlyIn,
            RevealStage::Pause,
            RevealStage::Flash,
            RevealStage::Vanish,
            RevealStage::ContentReveal,
            RevealStage::Done,
        ];
        let mut classes: Vec<_> = stages.iter().map(|s| stage_class(*s)).collect();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), stages.len());
    }

    #[test]
    fn particle_style_sets_offsets_and_size() {
        let style = particle_style(&Particle {
            x: -12.0,
            y: 40.5,
            rotation: 90.0,
            size: 4.0,
        });
        assert!(style.starts_with("--dx: -12.0px; --dy: 40.5px; --rot: 90.0deg;"));
        assert!(style.ends_with("animation-duration: 1500ms"));
    }
}
