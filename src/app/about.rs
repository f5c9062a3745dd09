use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use crate::{
    content::{site_content, TimelineEntry},
    motion::Stagger,
};

use super::{reveal::Reveal, ContentUnavailable};

#[component]
pub fn AboutPage() -> impl IntoView {
    let page = match site_content() {
        Ok(content) => Either::Left(view! {
            <div class="max-w-3xl mx-auto text-center mb-16">
                <p class="text-lg text-gray-300 leading-relaxed">{content.profile.summary.clone()}</p>
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                <TimelineColumn heading="Experience" entries=content.timeline.experience.as_slice() />
                <TimelineColumn heading="Education" entries=content.timeline.education.as_slice() />
            </div>
        }),
        Err(error) => Either::Right(view! { <ContentUnavailable error /> }),
    };

    view! {
        <Title text="About" />
        <section class="max-w-7xl mx-auto px-6 py-16">
            <h1 class="text-5xl font-bold text-center mb-8 bg-gradient-to-r from-white via-blue-200 to-cyan-200 bg-clip-text text-transparent">
                "About Me"
            </h1>
            {page}
        </section>
    }
}

#[component]
fn TimelineColumn(heading: &'static str, entries: &'static [TimelineEntry]) -> impl IntoView {
    view! {
        <div>
            <h2 class="text-3xl font-bold text-white mb-8">{heading}</h2>
            <ol class="relative border-l border-white/10 ml-3 space-y-10">
                {entries
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        view! {
                            <li class="pl-8">
                                <span class="absolute -left-2 mt-2 w-4 h-4 rounded-full bg-gradient-to-r from-blue-500 to-cyan-500"></span>
                                <Reveal index stagger=Stagger::GRID>
                                    <p class="text-sm text-cyan-300 mb-1">{entry.period.clone()}</p>
                                    <h3 class="text-xl font-semibold text-white">{entry.title.clone()}</h3>
                                    <p class="text-gray-400 mb-3">{entry.subtitle.clone()}</p>
                                    <p class="text-gray-300 leading-relaxed">{entry.description.clone()}</p>
                                </Reveal>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </div>
    }
}
