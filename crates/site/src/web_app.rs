use leptos::*;
use leptos_meta::*;

use shell_runtime::{registry, DesktopShell, ShellProvider};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Adrian Mercer" />
        <Meta
            name="description"
            content="Personal portfolio presented as a browser-hosted desktop shell."
        />

        <main class="site-root">
            <ShellProvider registry=registry::default_window_registry()>
                <DesktopShell>
                    <Welcome />
                </DesktopShell>
            </ShellProvider>
        </main>
    }
}

#[component]
fn Welcome() -> impl IntoView {
    view! {
        <div class="welcome">
            <p class="welcome-kicker">"Hello, I'm"</p>
            <h1 class="welcome-name">"Adrian Mercer"</h1>
            <p class="welcome-tagline">
                "Engineer. This desktop is my portfolio - open something from the dock."
            </p>
        </div>
    }
}
