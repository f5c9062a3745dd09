use leptos::{
    either::{Either, EitherOf3},
    ev::SubmitEvent,
    html,
    prelude::*,
};
use leptos_meta::Title;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::{
    contact::{ContactError, ContactMessage},
    content::{site_content, Faq, Profile},
};

use super::{footer::SocialLinks, ContentUnavailable};

const CONFIRMATION_MS: f64 = 5000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormStatus {
    Idle,
    Opened,
    Invalid(ContactError),
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let page = match site_content() {
        Ok(content) => Either::Left(view! {
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                <ContactForm profile=&content.profile />
                <ContactInfo profile=&content.profile />
            </div>
            <FaqGrid faqs=content.faqs.as_slice() />
        }),
        Err(error) => Either::Right(view! { <ContentUnavailable error /> }),
    };

    view! {
        <Title text="Contact" />
        <section class="max-w-7xl mx-auto px-6 py-16">
            <div class="text-center mb-16">
                <h1 class="text-5xl font-bold mb-6 bg-gradient-to-r from-white via-blue-200 to-cyan-200 bg-clip-text text-transparent">
                    "Get In Touch"
                </h1>
                <p class="text-xl text-gray-300 max-w-3xl mx-auto">
                    "Have a project in mind or just want to say hello? Send me a message."
                </p>
            </div>
            {page}
        </section>
    }
}

#[component]
fn ContactForm(profile: &'static Profile) -> impl IntoView {
    let form_ref = NodeRef::<html::Form>::new();
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let subject_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (status, set_status) = signal(FormStatus::Idle);

    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            if let Some(form) = form_ref.get_untracked() {
                form.reset();
            }
            _ = set_status.try_set(FormStatus::Idle);
        },
        CONFIRMATION_MS,
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let value = |input: NodeRef<html::Input>| {
            input
                .get_untracked()
                .map(|el| el.value())
                .unwrap_or_default()
        };
        let message = ContactMessage {
            name: value(name_ref),
            email: value(email_ref),
            subject: value(subject_ref),
            message: message_ref
                .get_untracked()
                .map(|el| el.value())
                .unwrap_or_default(),
        };

        match message.mailto(&profile.email, &profile.greeting_name) {
            Ok(link) => {
                if let Err(err) = window().location().set_href(&link) {
                    log::error!("couldn't open mail client: {err:?}");
                    return;
                }
                set_status.set(FormStatus::Opened);
                start(());
            }
            Err(err) => set_status.set(FormStatus::Invalid(err)),
        }
    };

    let banner = move || match status.get() {
        FormStatus::Idle => EitherOf3::A(()),
        FormStatus::Opened => EitherOf3::B(view! {
            <div class="mb-6 p-4 rounded-xl border border-green-500/30 bg-green-500/10 text-green-300">
                "Your mail client should open with the message ready to send. Thank you!"
            </div>
        }),
        FormStatus::Invalid(err) => EitherOf3::C(view! {
            <div class="mb-6 p-4 rounded-xl border border-red-500/30 bg-red-500/10 text-red-300">
                {err.to_string()}
            </div>
        }),
    };

    let input_class = "w-full px-4 py-3 rounded-xl bg-white/5 border border-white/10 text-white placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-cyan-400";

    view! {
        <div class="rounded-2xl p-8 border border-white/10 bg-white/5 backdrop-blur-sm">
            <h2 class="text-2xl font-bold text-white mb-6">"Send a Message"</h2>
            {banner}
            <form node_ref=form_ref class="space-y-5" on:submit=on_submit novalidate=true>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-5">
                    <label class="block">
                        <span class="block mb-2 text-sm text-gray-300">"Name"</span>
                        <input node_ref=name_ref type="text" name="name" required class=input_class />
                    </label>
                    <label class="block">
                        <span class="block mb-2 text-sm text-gray-300">"Email"</span>
                        <input node_ref=email_ref type="email" name="email" required class=input_class />
                    </label>
                </div>
                <label class="block">
                    <span class="block mb-2 text-sm text-gray-300">"Subject"</span>
                    <input node_ref=subject_ref type="text" name="subject" required class=input_class />
                </label>
                <label class="block">
                    <span class="block mb-2 text-sm text-gray-300">"Message"</span>
                    <textarea node_ref=message_ref name="message" rows="6" required class=input_class></textarea>
                </label>
                <button
                    type="submit"
                    class="w-full py-3 rounded-xl font-semibold text-white bg-gradient-to-r from-blue-600 to-cyan-600 hover:from-blue-500 hover:to-cyan-500 transition-colors"
                >
                    "Send Message"
                </button>
            </form>
        </div>
    }
}

#[component]
fn ContactInfo(profile: &'static Profile) -> impl IntoView {
    let rows = [
        ("✉", "Email", profile.email.clone(), Some(format!("mailto:{}", profile.email))),
        ("☎", "Phone", profile.phone.clone(), Some(format!("tel:{}", profile.phone_href))),
        ("⌖", "Location", profile.location.clone(), None),
        ("⏱", "Response time", profile.response_time.clone(), None),
    ];

    view! {
        <div class="space-y-8">
            <div class="rounded-2xl p-8 border border-white/10 bg-white/5 backdrop-blur-sm">
                <h2 class="text-2xl font-bold text-white mb-6">"Contact Information"</h2>
                <ul class="space-y-5">
                    {rows
                        .into_iter()
                        .map(|(icon, label, value, href)| {
                            view! {
                                <li class="flex items-center gap-4">
                                    <span class="flex items-center justify-center w-12 h-12 rounded-xl bg-blue-500/10 text-blue-300 text-xl">
                                        {icon}
                                    </span>
                                    <div>
                                        <p class="text-sm text-gray-400">{label}</p>
                                        {match href {
                                            Some(href) => Either::Left(view! {
                                                <a href=href class="text-white hover:text-cyan-300">{value}</a>
                                            }),
                                            None => Either::Right(view! { <p class="text-white">{value}</p> }),
                                        }}
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <div class="rounded-2xl p-8 border border-white/10 bg-white/5 backdrop-blur-sm">
                <h2 class="text-2xl font-bold text-white mb-6">"Find Me Online"</h2>
                <SocialLinks socials=profile.socials.as_slice() />
            </div>
        </div>
    }
}

#[component]
fn FaqGrid(faqs: &'static [Faq]) -> impl IntoView {
    view! {
        <div class="mt-20">
            <h2 class="text-3xl font-bold text-center text-white mb-10">"Frequently Asked Questions"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {faqs
                    .iter()
                    .map(|faq| {
                        view! {
                            <div class="rounded-2xl p-6 border border-white/10 bg-white/5">
                                <h3 class="text-lg font-semibold text-white mb-2">{faq.question.clone()}</h3>
                                <p class="text-gray-300 leading-relaxed">{faq.answer.clone()}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
