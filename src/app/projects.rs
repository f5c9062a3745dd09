use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use crate::{
    content::{site_content, ProjectRecord},
    motion::Stagger,
    preview::Thumbnail,
};

use super::{reveal::Reveal, ContentUnavailable};

const PLACEHOLDER_IMAGE: &str = "/images/placeholder-project.jpg";

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let grid = match site_content() {
        Ok(content) => Either::Left(view! {
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                {content
                    .projects
                    .iter()
                    .enumerate()
                    .map(|(index, project)| view! { <ProjectCard project index /> })
                    .collect_view()}
            </div>
        }),
        Err(error) => Either::Right(view! { <ContentUnavailable error /> }),
    };

    view! {
        <Title text="Projects" />
        <section class="max-w-7xl mx-auto px-6 py-16">
            <div class="text-center mb-16">
                <h1 class="text-5xl font-bold mb-6 bg-gradient-to-r from-white via-blue-200 to-cyan-200 bg-clip-text text-transparent">
                    "My Projects"
                </h1>
                <p class="text-xl text-gray-300 max-w-3xl mx-auto">
                    "A selection of things I've designed and built."
                </p>
            </div>
            {grid}
        </section>
    }
}

#[component]
pub fn ProjectCard(project: &'static ProjectRecord, index: usize) -> impl IntoView {
    let thumbnail = RwSignal::new(Thumbnail::new(
        Some(project.image.clone()),
        Some(PLACEHOLDER_IMAGE.to_string()),
    ));
    let on_error = move |_| {
        if let Some(err) = thumbnail.try_update(Thumbnail::on_error) {
            log::warn!("{err}");
        }
    };

    let image = move || match thumbnail.with(|t| t.src().map(str::to_string)) {
        Some(src) => Either::Left(view! {
            <img
                src=src
                alt=project.title.clone()
                loading="lazy"
                class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-105"
                on:error=on_error
            />
        }),
        None => Either::Right(view! {
            <div class="w-full h-full flex items-center justify-center text-gray-500 text-sm">
                "Image unavailable"
            </div>
        }),
    };

    let links = [
        ("View project", project.link.as_deref()),
        ("GitHub", project.github_link.as_deref()),
        ("Live demo", project.live_link.as_deref()),
    ];

    view! {
        <Reveal
            index
            stagger=Stagger::GRID
            class="group rounded-2xl overflow-hidden border border-white/10 bg-white/5 backdrop-blur-sm hover:border-blue-500/40 hover:shadow-2xl hover:shadow-blue-500/10 transition-shadow"
        >
            <div class="relative h-56 bg-slate-800 overflow-hidden">
                {image}
                <span class="absolute top-4 left-4 px-3 py-1 rounded-full bg-black/60 text-sm font-mono text-cyan-300">
                    {format!("{:02}", index + 1)}
                </span>
            </div>
            <div class="p-6">
                <h3 class="text-2xl font-bold text-white mb-3">{project.title.clone()}</h3>
                <p class="text-gray-300 mb-5 leading-relaxed">{project.description.clone()}</p>
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 text-xs rounded-full bg-blue-500/10 text-blue-300 border border-blue-500/20">
                                    {tech.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex flex-wrap gap-4">
                    {links
                        .into_iter()
                        .filter_map(|(label, href)| href.map(|href| (label, href.to_string())))
                        .map(|(label, href)| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-sm font-medium text-cyan-400 hover:text-cyan-300"
                                >
                                    {label}
                                    " →"
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Reveal>
    }
}
