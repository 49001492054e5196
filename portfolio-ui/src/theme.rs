use leptos::*;
use portfolio_core::{Palette, Theme};

/// Theme shared with every presentational component through context.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        self.theme.update(|t| *t = t.toggled());
        log::debug!("theme toggled to {:?}", self.theme.get_untracked());
    }

    pub fn palette(&self) -> Signal<Palette> {
        let theme = self.theme;
        Signal::derive(move || theme.get().palette())
    }
}

pub fn provide_theme(initial: Theme) -> ThemeContext {
    let ctx = ThemeContext {
        theme: create_rw_signal(initial),
    };
    provide_context(ctx);
    ctx
}

/// Palette of the surrounding theme, or the default theme's palette when
/// rendered outside a provider.
pub fn use_palette() -> Signal<Palette> {
    match use_context::<ThemeContext>() {
        Some(ctx) => ctx.palette(),
        None => Signal::derive(|| Theme::default().palette()),
    }
}
