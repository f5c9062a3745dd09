use leptos::prelude::*;

use crate::motion::{Entrance, Stagger};

use super::Environment;

/// Reveal state handed down to whatever a [`Reveal`] wraps.
#[derive(Debug, Clone, Copy)]
pub struct RevealContext {
    pub revealed: ReadSignal<bool>,
    pub entrance: Memo<Entrance>,
}

impl RevealContext {
    pub fn progress(&self, level: u8) -> u8 {
        self.entrance.get().progress(level, self.revealed.get())
    }
}

/// Fades and slides its children in after the card's stagger delay.
#[component]
pub fn Reveal(
    index: usize,
    stagger: Stagger,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let env = expect_context::<Environment>();
    let entrance = Memo::new(move |_| Entrance::new(index, stagger, env.reduced_motion.get()));
    let (revealed, set_revealed) = signal(false);

    // the transition needs one painted frame in the hidden state
    Effect::new(move |_| {
        request_animation_frame(move || {
            _ = set_revealed.try_set(true);
        });
    });

    provide_context(RevealContext { revealed, entrance });

    view! {
        <div class=class style=move || entrance.get().style(revealed.get())>
            {children()}
        </div>
    }
}
