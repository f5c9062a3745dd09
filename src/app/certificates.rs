use leptos::{
    either::{Either, EitherOf3},
    ev, html,
    prelude::*,
    task::spawn_local,
};
use leptos_meta::Title;
use leptos_use::{use_event_listener, use_window};

use crate::{
    content::{site_content, DocumentRecord},
    motion::Stagger,
    preview::{
        load_document, ClickTarget, PageCountCache, PageRender, PdfJsEngine, PreviewError,
        PreviewSession, PreviewState, RenderEngine, Thumbnail,
    },
};

use super::{reveal::Reveal, ContentUnavailable, Environment};

#[component]
pub fn CertificatesPage() -> impl IntoView {
    let grid = match site_content() {
        Ok(content) => Either::Left(view! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                {content
                    .certificates
                    .iter()
                    .enumerate()
                    .map(|(index, record)| view! { <CertificateCard record index /> })
                    .collect_view()}
            </div>
        }),
        Err(error) => Either::Right(view! { <ContentUnavailable error /> }),
    };

    view! {
        <Title text="Certificates" />
        <section class="max-w-7xl mx-auto px-6 py-16">
            <div class="text-center mb-16">
                <h1 class="text-5xl font-bold mb-6 bg-gradient-to-r from-white via-blue-200 to-cyan-200 bg-clip-text text-transparent">
                    "Certificates"
                </h1>
                <p class="text-xl text-gray-300 max-w-3xl mx-auto">
                    "Courses and credentials I've completed. Select one to read the full document."
                </p>
            </div>
            {grid}
        </section>
    }
}

/// A certificate in the grid. Each card owns its own preview session, so a
/// failing document never touches the others.
#[component]
fn CertificateCard(record: &'static DocumentRecord, index: usize) -> impl IntoView {
    let env = expect_context::<Environment>();
    let theme = record.category.theme();
    let session = RwSignal::new(PreviewSession::new(
        record.document_ref.clone(),
        PageCountCache::global(),
    ));
    let thumbnail = RwSignal::new(Thumbnail::new(record.preview_ref.clone(), None));

    Effect::new(move |_| {
        let available = env.window_width.get();
        session.maybe_update(|s| s.recompute_viewport_width(available));
    });

    let open = move || {
        let Some(request) = session.try_update(PreviewSession::open).flatten() else {
            return;
        };
        spawn_local(async move {
            let outcome = load_document(&PdfJsEngine, &request).await;
            // the card may have been unmounted while loading
            match session.try_update(|s| s.resolve(request.token, outcome)) {
                None | Some(Ok(())) | Some(Err(PreviewError::StaleCallback(_))) => {}
                Some(Err(err)) => log::error!("{err}"),
            }
        });
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if matches!(ev.key().as_str(), "Enter" | " ") {
            ev.prevent_default();
            open();
        }
    };

    let on_thumbnail_error = move |_| {
        if let Some(err) = thumbnail.try_update(Thumbnail::on_error) {
            log::warn!("{err}");
        }
    };

    let preview = move || match thumbnail.with(|t| t.src().map(str::to_string)) {
        Some(src) => Either::Left(view! {
            <img
                src=src
                alt=format!("Preview of {}", record.title)
                loading="lazy"
                class="w-full h-full object-cover object-top transition-transform duration-500 group-hover:scale-105"
                on:error=on_thumbnail_error
            />
        }),
        None => Either::Right(view! {
            <div class=format!(
                "w-full h-full flex flex-col items-center justify-center gap-2 bg-gradient-to-br {} {}",
                theme.bg,
                theme.text,
            )>
                <span class="text-5xl">"📄"</span>
                <span class="text-sm">"Preview unavailable"</span>
            </div>
        }),
    };

    let is_open = Memo::new(move |_| session.with(PreviewSession::is_open));

    view! {
        <Reveal index stagger=Stagger::CERTIFICATES>
            <div
                role="button"
                tabindex="0"
                aria-label=format!("Open {}", record.title)
                class=format!(
                    "group h-full cursor-pointer rounded-2xl overflow-hidden border bg-white/5 backdrop-blur-sm transition-shadow hover:shadow-2xl focus:outline-none focus:ring-2 focus:ring-cyan-400 {} {}",
                    theme.border,
                    theme.glow,
                )
                on:click=move |_| open()
                on:keydown=on_keydown
            >
                <div class="relative h-48 bg-slate-800 overflow-hidden">{preview}</div>
                <div class="p-6">
                    <span class=format!(
                        "inline-block mb-3 px-3 py-1 rounded-full text-xs font-medium bg-gradient-to-r {} {}",
                        theme.bg,
                        theme.text,
                    )>{record.issuer.clone()}</span>
                    <h3 class="text-xl font-bold text-white mb-2">{record.title.clone()}</h3>
                    <p class="text-sm text-gray-400">{record.date.clone()}</p>
                </div>
            </div>
        </Reveal>
        <Show when=move || is_open.get()>
            <PreviewModal record session />
        </Show>
    }
}

#[component]
fn PreviewModal(record: &'static DocumentRecord, session: RwSignal<PreviewSession>) -> impl IntoView {
    let close = move || session.update(PreviewSession::close);

    // only registered while the modal is mounted
    _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            close();
        }
    });

    let state = Memo::new(move |_| session.with(PreviewSession::state));
    let pages = Memo::new(move |_| session.with(PreviewSession::pages));

    let page_count = move || match state.get() {
        PreviewState::Ready(1) => Some("1 page".to_string()),
        PreviewState::Ready(n) => Some(format!("{n} pages")),
        _ => None,
    };

    let body = move || match state.get() {
        PreviewState::Loading => EitherOf3::A(view! {
            <div class="flex flex-col items-center justify-center py-24 text-gray-400">
                <div class="w-10 h-10 mb-4 rounded-full border-4 border-white/10 border-t-cyan-400 animate-spin"></div>
                "Loading document…"
            </div>
        }),
        PreviewState::Failed => EitherOf3::B(view! {
            <div class="flex flex-col items-center justify-center py-24 text-red-300">
                <p class="font-semibold mb-2">"Failed to load the document."</p>
                <p class="text-sm text-gray-400">"Close the preview and try again."</p>
            </div>
        }),
        PreviewState::Ready(_) | PreviewState::Closed => EitherOf3::C(view! {
            <div class="flex flex-col items-center gap-6">
                <For each=move || pages.get() key=|page| *page let:page>
                    <PdfPage document_ref=record.document_ref.as_str() page />
                </For>
            </div>
        }),
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/80 backdrop-blur-sm"
            role="dialog"
            aria-modal="true"
            aria-label=record.title.clone()
            on:click=move |_| {
                session.maybe_update(|s| s.click(ClickTarget::Backdrop));
            }
        >
            <div
                class="relative flex flex-col w-full max-w-5xl max-h-[90vh] rounded-2xl overflow-hidden border border-white/10 bg-slate-900 shadow-2xl"
                on:click=move |ev| {
                    ev.stop_propagation();
                    session.maybe_update(|s| s.click(ClickTarget::Surface));
                }
            >
                <header class="flex items-start justify-between gap-4 p-6 border-b border-white/10">
                    <div>
                        <h2 class="text-2xl font-bold text-white">{record.title.clone()}</h2>
                        <p class="text-sm text-gray-400">
                            {record.issuer.clone()} " · " {record.date.clone()}
                            {move || page_count().map(|count| format!(" · {count}"))}
                        </p>
                    </div>
                    <button
                        class="p-2 rounded-lg text-gray-400 hover:text-white hover:bg-white/10"
                        aria-label="Close preview"
                        on:click=move |_| close()
                    >
                        "✕"
                    </button>
                </header>
                <div class="flex-1 overflow-auto p-6 bg-slate-950">{body}</div>
                <DocumentDetails record />
            </div>
        </div>
    }
}

#[component]
fn DocumentDetails(record: &'static DocumentRecord) -> impl IntoView {
    let theme = record.category.theme();
    view! {
        <footer class="flex flex-wrap items-center gap-3 p-4 border-t border-white/10 text-sm">
            {record
                .credential_id
                .clone()
                .map(|id| view! { <span class="text-gray-400">"Credential ID: " <code>{id}</code></span> })}
            {record
                .tags
                .iter()
                .map(|tag| {
                    view! {
                        <span class=format!("px-2 py-1 rounded-md bg-white/5 {}", theme.text)>
                            {tag.clone()}
                        </span>
                    }
                })
                .collect_view()}
            {record
                .tier
                .map(|tier| {
                    view! {
                        <span class="ml-auto px-3 py-1 rounded-full bg-amber-500/10 text-amber-300 border border-amber-500/20">
                            {tier.label()}
                        </span>
                    }
                })}
        </footer>
    }
}

/// One flattened page drawn onto its own canvas.
#[component]
fn PdfPage(document_ref: &'static str, page: PageRender) -> impl IntoView {
    let canvas = NodeRef::<html::Canvas>::new();
    let (failed, set_failed) = signal(false);

    Effect::new(move |_| {
        let Some(surface) = canvas.get() else {
            return;
        };
        spawn_local(async move {
            if let Err(err) = PdfJsEngine.render_page(document_ref, page, &surface).await {
                log::error!("page {}: {err}", page.page);
                _ = set_failed.try_set(true);
            }
        });
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas
                class="max-w-full h-auto rounded-lg shadow-lg bg-white"
                aria-label=format!("Page {}", page.page)
            ></canvas>
            <Show when=move || failed.get()>
                <p class="absolute inset-0 flex items-center justify-center text-sm text-red-400 bg-slate-900/90">
                    {format!("Page {} could not be drawn.", page.page)}
                </p>
            </Show>
        </div>
    }
}
