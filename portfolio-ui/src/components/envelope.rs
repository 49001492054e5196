use crate::components::icon::IconGlyph;
use crate::components::scramble_text::ScrambleText;
use crate::viewport::use_seen_once;
use leptos::*;
use portfolio_core::contact::{CHANNEL_HINT, SEALED_LABEL};
use portfolio_core::content::Icon;
use portfolio_core::{ContactFlow, ContactMessage, EnvelopeView};

#[derive(Clone, Copy)]
enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    fn get(self, msg: &ContactMessage) -> String {
        match self {
            Field::Name => msg.user_name.clone(),
            Field::Email => msg.user_email.clone(),
            Field::Message => msg.message.clone(),
        }
    }

    fn set(self, msg: &mut ContactMessage, value: String) {
        match self {
            Field::Name => msg.user_name = value,
            Field::Email => msg.user_email = value,
            Field::Message => msg.message = value,
        }
    }
}

/// Envelope-shaped contact form. Everything visual is derived from the
/// submission state through [`EnvelopeView`]; the actual delivery is the
/// caller's `on_submit`.
#[component]
pub fn ContactEnvelope(flow: RwSignal<ContactFlow>, on_submit: Callback<()>) -> impl IntoView {
    let node = create_node_ref::<html::Div>();
    let seen = use_seen_once(node);
    let view_state = create_memo(move |_| EnvelopeView::new(seen.get(), flow.with(|f| f.state())));

    let value = move |field: Field| move || flow.with(|f| field.get(f.fields()));
    let input = move |field: Field| {
        move |ev: ev::Event| {
            let v = event_target_value(&ev);
            flow.update(|f| field.set(f.fields_mut(), v));
        }
    };

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
      <div
        node_ref=node
        class="envelope"
        class:entered=move || view_state.get().entered
        class:flying=move || view_state.get().flying
        class:locked=move || !view_state.get().interactive
      >
        <div class="envelope-chips">
          <span class="chip">"VISHNU MAIL"</span>
          <span class="chip chip-priority">"PRIORITY"</span>
        </div>
        <div class="stamp">
          <IconGlyph icon=Icon::Mail />
          <span>"STAMP"</span>
        </div>

        <div class="flap" class:open=move || view_state.get().flap_open>
          <div class="flap-text">"ENVELOPE OPENED"</div>
          <div class="flap-text small">"PLEASE FILL YOUR DETAILS"</div>
        </div>

        <Show when=move || view_state.get().sealed>
          <div class="sealed">
            <IconGlyph icon=Icon::Mail class="sealed-icon" />
            <span class="sealed-label">{SEALED_LABEL}</span>
          </div>
        </Show>

        <form class="envelope-form" class:hidden=move || !view_state.get().form_visible on:submit=submit>
          <h2 class="envelope-heading">
            <IconGlyph icon=Icon::PaperPlane />
            <ScrambleText text="SEND MESSAGE" />
          </h2>
          <div class="hint">
            <IconGlyph icon=Icon::Wifi class="hint-icon" />
            <p>{CHANNEL_HINT}</p>
          </div>

          <input
            type="text"
            name="user_name"
            placeholder="NAME"
            required
            prop:value=value(Field::Name)
            on:input=input(Field::Name)
          />
          <input
            type="email"
            name="user_email"
            placeholder="EMAIL"
            required
            prop:value=value(Field::Email)
            on:input=input(Field::Email)
          />
          <textarea
            name="message"
            placeholder="MESSAGE"
            rows="5"
            required
            prop:value=value(Field::Message)
            on:input=input(Field::Message)
          ></textarea>

          {move || {
              view_state
                  .get()
                  .error_message
                  .map(|msg| view! { <p class="send-error">{msg}</p> })
          }}

          <button type="submit" class="send-button" disabled=move || view_state.get().submit_disabled>
            <IconGlyph icon=Icon::PaperPlane />
            {move || view_state.get().submit_label}
          </button>
        </form>
      </div>
    }
}
