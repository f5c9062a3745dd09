mod about;
mod certificates;
mod contact;
mod footer;
mod homepage;
mod navbar;
mod projects;
mod reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_prefers_reduced_motion, use_window_size, UseWindowSizeReturn};

use crate::content::{site_content, ContentError};

use about::AboutPage;
use certificates::CertificatesPage;
use contact::ContactPage;
use footer::Footer;
use homepage::HomePage;
use navbar::Navbar;
use projects::ProjectsPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-slate-950 text-white">
                <App />
            </body>
        </html>
    }
}

/// Browser state the cards react to, shared by every card on the page.
#[derive(Debug, Clone, Copy)]
pub struct Environment {
    pub window_width: Signal<f64>,
    pub reduced_motion: Signal<bool>,
}

impl Environment {
    fn from_window() -> Self {
        let UseWindowSizeReturn { width, .. } = use_window_size();
        Self {
            window_width: width,
            reduced_motion: use_prefers_reduced_motion(),
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(Environment::from_window());

    let owner = site_content()
        .map(|c| c.profile.name.clone())
        .unwrap_or_else(|_| "Portfolio".to_string());

    view! {
        <Title formatter=move |title| format!("{title} - {owner}") />
        <Meta name="description" content="Professional portfolio: projects, skills and certificates" />

        <Router>
            <div class="min-h-screen flex flex-col bg-gradient-to-br from-slate-950 via-slate-900 to-blue-950">
                <Navbar />
                <main class="flex-grow pt-24">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/about") view=AboutPage />
                        <Route path=path!("/projects") view=ProjectsPage />
                        <Route path=path!("/certificates") view=CertificatesPage />
                        <Route path=path!("/contact") view=ContactPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

/// Shown in place of a page when the embedded content couldn't be read.
#[component]
fn ContentUnavailable(error: ContentError) -> impl IntoView {
    log::error!("{error}");
    view! {
        <div class="max-w-3xl mx-auto my-20 p-6 rounded-xl border border-red-500/30 bg-red-500/10 text-red-300">
            <p class="font-semibold mb-2">"This page couldn't be loaded."</p>
            <pre class="whitespace-pre-wrap text-sm">{error.to_string()}</pre>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Not Found" />
        <div class="max-w-3xl mx-auto py-28 px-6 text-center">
            <h1 class="text-6xl font-bold mb-6 bg-gradient-to-r from-white to-blue-200 bg-clip-text text-transparent">
                "404"
            </h1>
            <p class="text-xl text-gray-300 mb-8">"This page doesn't exist."</p>
            <A
                href="/"
                attr:class="px-6 py-3 bg-gradient-to-r from-blue-600 to-cyan-600 rounded-xl font-semibold"
            >
                "Back home"
            </A>
        </div>
    }
}
