use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

use crate::content::site_content;

pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/about", "About"),
    ("/projects", "Projects"),
    ("/certificates", "Certificates"),
    ("/contact", "Contact"),
];

fn link_class(active: bool) -> &'static str {
    if active {
        "px-4 py-2 rounded-lg text-white bg-white/10"
    } else {
        "px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-white/5"
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;
    let (menu_open, set_menu_open) = signal(false);
    let brand = site_content()
        .map(|c| c.profile.greeting_name.clone())
        .unwrap_or_else(|_| "Portfolio".to_string());

    Effect::watch(
        move || pathname.get(),
        move |_, _, _| set_menu_open.set(false),
        false,
    );

    let links = move || {
        NAV_ITEMS
            .iter()
            .map(|&(href, label)| {
                let active = move || pathname.with(|p| p == href);
                view! {
                    <A href=href attr:class=move || link_class(active())>
                        {label}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="fixed top-0 inset-x-0 z-40 border-b border-white/10 bg-slate-950/80 backdrop-blur-md">
            <div class="max-w-7xl mx-auto px-6 h-16 flex items-center justify-between">
                <A href="/" attr:class="text-xl font-bold bg-gradient-to-r from-blue-400 to-cyan-400 bg-clip-text text-transparent">
                    {brand}
                </A>
                <div class="hidden md:flex items-center gap-1">{links()}</div>
                <button
                    class="md:hidden p-2 rounded-lg text-gray-300 hover:bg-white/10"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden flex flex-col gap-1 px-6 pb-4">{links()}</div>
            </Show>
        </nav>
    }
}
