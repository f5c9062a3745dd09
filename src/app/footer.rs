use chrono::{Datelike, Utc};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::{site_content, SocialLink};

use super::navbar::NAV_ITEMS;

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();
    let profile = site_content().ok().map(|c| &c.profile);
    let owner = profile.map(|p| p.name.clone()).unwrap_or_default();

    view! {
        <footer class="mt-24 border-t border-white/10 bg-slate-950/60">
            <div class="max-w-7xl mx-auto px-6 py-12 grid grid-cols-1 md:grid-cols-3 gap-10">
                <div>
                    <p class="text-xl font-bold text-white mb-2">{owner.clone()}</p>
                    {profile.map(|p| view! { <p class="text-gray-400 text-sm">{p.headline.clone()}</p> })}
                </div>
                <nav class="flex flex-col gap-2 text-sm">
                    {NAV_ITEMS
                        .iter()
                        .map(|&(href, label)| {
                            view! {
                                <A href=href attr:class="text-gray-400 hover:text-white">
                                    {label}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>
                {profile.map(|p| view! { <SocialLinks socials=p.socials.as_slice() /> })}
            </div>
            <div class="border-t border-white/10 py-6 text-center text-sm text-gray-500">
                {format!("© {year} {owner}. All rights reserved.")}
                <span class="block mt-1 text-xs" title=env!("BUILD_TIME")>
                    {concat!("Built ", env!("BUILD_DATE"))}
                </span>
            </div>
        </footer>
    }
}

#[component]
pub fn SocialLinks(socials: &'static [SocialLink]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-3">
            {socials
                .iter()
                .map(|social| {
                    view! {
                        <a
                            href=social.url.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label=social.name.clone()
                            class="flex items-center gap-2 px-4 py-2 rounded-xl border border-white/10 bg-white/5 text-gray-300 hover:text-white hover:border-cyan-400/40"
                        >
                            <i class=social.icon.clone()></i>
                            {social.name.clone()}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
