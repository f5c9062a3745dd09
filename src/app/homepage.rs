use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_router::components::A;

use crate::content::{site_content, SiteContent};

use super::{projects::ProjectCard, skills::SkillCard, ContentUnavailable};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        {match site_content() {
            Ok(content) => Either::Left(view! { <Landing content /> }),
            Err(error) => Either::Right(view! { <ContentUnavailable error /> }),
        }}
    }
}

#[component]
fn Landing(content: &'static SiteContent) -> impl IntoView {
    let profile = &content.profile;
    view! {
        <div class="max-w-7xl mx-auto px-6">
            <section class="min-h-[70vh] flex flex-col justify-center items-center text-center py-16">
                <p class="text-lg text-cyan-300 mb-4">{format!("Hi, I'm {}", profile.greeting_name)}</p>
                <h1 class="text-5xl md:text-7xl font-bold mb-6 bg-gradient-to-r from-white via-blue-200 to-cyan-200 bg-clip-text text-transparent">
                    {profile.name.clone()}
                </h1>
                <p class="text-2xl text-gray-200 mb-6">{profile.headline.clone()}</p>
                <p class="text-lg text-gray-400 max-w-2xl mb-10 leading-relaxed">{profile.summary.clone()}</p>
                <div class="flex flex-col sm:flex-row gap-4">
                    <A
                        href="/projects"
                        attr:class="px-8 py-3 rounded-xl font-semibold text-white bg-gradient-to-r from-blue-600 to-cyan-600 hover:from-blue-500 hover:to-cyan-500"
                    >
                        "View My Work"
                    </A>
                    <A
                        href="/contact"
                        attr:class="px-8 py-3 rounded-xl font-semibold text-white border border-white/20 hover:bg-white/10"
                    >
                        "Get In Touch"
                    </A>
                </div>
            </section>

            <section class="py-16">
                <h2 class="text-4xl font-bold text-center text-white mb-12">"Skills & Expertise"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {content
                        .skills
                        .iter()
                        .enumerate()
                        .map(|(index, skill)| view! { <SkillCard skill index /> })
                        .collect_view()}
                </div>
            </section>

            <section class="py-16">
                <div class="flex items-end justify-between mb-12">
                    <h2 class="text-4xl font-bold text-white">"Featured Projects"</h2>
                    <A href="/projects" attr:class="text-cyan-400 hover:text-cyan-300">
                        "All projects →"
                    </A>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {content
                        .featured_projects()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project index /> })
                        .collect_view()}
                </div>
            </section>

            <section class="py-16">
                <div class="rounded-3xl p-12 text-center border border-blue-500/20 bg-gradient-to-r from-blue-600/20 to-cyan-600/20">
                    <h2 class="text-3xl font-bold text-white mb-4">"Let's work together"</h2>
                    <p class="text-lg text-gray-300 mb-8">
                        "Have an idea or an opening on your team? I'd love to hear about it."
                    </p>
                    <A
                        href="/contact"
                        attr:class="inline-block px-8 py-3 rounded-xl font-semibold text-slate-900 bg-white hover:bg-gray-100"
                    >
                        "Contact Me"
                    </A>
                </div>
            </section>
        </div>
    }
}
