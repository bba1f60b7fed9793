//! Contact window content: email and social links.

use leptos::*;
use shell_ui::{Icon, IconName, IconSize};
use window_contract::{WindowContentContext, WindowModule};

const CONTACT_EMAIL: &str = "hello@adrianmercer.dev";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Social {
    id: &'static str,
    label: &'static str,
    url: &'static str,
    accent: &'static str,
}

const SOCIALS: [Social; 4] = [
    Social {
        id: "github",
        label: "GitHub",
        url: "https://github.com/adrianmercer",
        accent: "#24292f",
    },
    Social {
        id: "linkedin",
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/adrian-mercer",
        accent: "#0a66c2",
    },
    Social {
        id: "mastodon",
        label: "Mastodon",
        url: "https://hachyderm.io/@adrianmercer",
        accent: "#6364ff",
    },
    Social {
        id: "rss",
        label: "RSS",
        url: "https://adrianmercer.dev/feed.xml",
        accent: "#f26522",
    },
];

fn mount(_context: WindowContentContext) -> View {
    view! { <ContactWindow /> }.into_view()
}

/// Content module registered for the contact window.
pub fn module() -> WindowModule {
    WindowModule::new(mount)
}

#[component]
fn ContactWindow() -> impl IntoView {
    view! {
        <div class="app app-contact">
            <img class="contact-portrait" src="/images/adrian.jpg" alt="Adrian Mercer" />
            <h3>"Let's Connect"</h3>
            <p>
                "Got an idea, a bug to squash, or just want to talk tech? \
                 The inbox below is read by a human."
            </p>
            <p class="contact-email">
                <span aria-hidden="true">
                    <Icon icon=IconName::Mail size=IconSize::Sm />
                </span>
                <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
            </p>
            <ul class="contact-socials">
                {SOCIALS
                    .iter()
                    .map(|social| {
                        view! {
                            <li
                                class="contact-social"
                                style=format!("background-color:{};", social.accent)
                            >
                                <a
                                    href=social.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    title=social.label
                                >
                                    {social.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
