use leptos::prelude::*;

use crate::{content::SkillRecord, motion::Stagger};

use super::reveal::{Reveal, RevealContext};

#[component]
pub fn SkillCard(skill: &'static SkillRecord, index: usize) -> impl IntoView {
    let theme = skill.area.theme();
    view! {
        <Reveal
            index
            stagger=Stagger::GRID
            class=format!(
                "group rounded-2xl p-6 border bg-gradient-to-br backdrop-blur-sm transition-shadow hover:shadow-2xl {} {} {}",
                theme.bg,
                theme.border,
                theme.glow,
            )
        >
            <SkillBody skill />
        </Reveal>
    }
}

#[component]
fn SkillBody(skill: &'static SkillRecord) -> impl IntoView {
    let reveal = expect_context::<RevealContext>();
    let theme = skill.area.theme();
    let filled = skill.filled_dots();

    view! {
        <div class="flex items-center justify-between mb-4">
            <div class="flex items-center gap-3">
                <span class=format!("text-2xl {}", theme.text)>{skill.area.icon()}</span>
                <h3 class="text-lg font-semibold text-white">{skill.name.clone()}</h3>
            </div>
            <span class=format!("text-sm font-medium {}", theme.text)>
                {skill.proficiency().label()}
            </span>
        </div>

        <div class="flex gap-1 mb-3" aria-hidden="true">
            {(0..SkillRecord::INDICATOR_DOTS)
                .map(|i| {
                    let class = if i < filled {
                        format!("w-2 h-2 rounded-full bg-gradient-to-r {}", theme.progress)
                    } else {
                        "w-2 h-2 rounded-full bg-white/10".to_string()
                    };
                    view! { <span class=class></span> }
                })
                .collect_view()}
        </div>

        <div
            class="w-full h-2 rounded-full bg-white/10 overflow-hidden mb-4"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=skill.level.to_string()
        >
            <div
                class=format!(
                    "h-full rounded-full bg-gradient-to-r transition-[width] duration-1000 ease-out {}",
                    theme.progress,
                )
                style=move || format!("width: {}%;", reveal.progress(skill.level))
            ></div>
        </div>

        <div class="flex flex-wrap gap-2">
            {skill
                .technologies
                .iter()
                .map(|tech| {
                    view! {
                        <span class="px-2 py-1 text-xs rounded-md bg-white/5 text-gray-300 border border-white/10">
                            {tech.clone()}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
