//! Terminal window content: a boot-transcript style listing of the tech stack.

use leptos::*;
use shell_ui::{Icon, IconName, IconSize};
use window_contract::{WindowContentContext, WindowModule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TechCategory {
    category: &'static str,
    items: &'static [&'static str],
}

const TECH_STACK: [TechCategory; 5] = [
    TechCategory {
        category: "Languages",
        items: &["Rust", "TypeScript", "Python"],
    },
    TechCategory {
        category: "Frontend",
        items: &["Leptos", "React", "Tailwind CSS"],
    },
    TechCategory {
        category: "Backend",
        items: &["Axum", "PostgreSQL", "Redis"],
    },
    TechCategory {
        category: "Infrastructure",
        items: &["Docker", "Terraform", "Fly.io"],
    },
    TechCategory {
        category: "Tooling",
        items: &["Git", "Nix", "GitHub Actions"],
    },
];

fn boot_status_line() -> String {
    format!(
        "{count} of {count} stacks loaded successfully",
        count = TECH_STACK.len()
    )
}

fn mount(_context: WindowContentContext) -> View {
    view! { <TerminalWindow /> }.into_view()
}

/// Content module registered for the terminal window.
pub fn module() -> WindowModule {
    WindowModule::new(mount)
}

#[component]
fn TerminalWindow() -> impl IntoView {
    view! {
        <div class="app app-terminal">
            <p class="terminal-prompt">"adrian@portfolio:~$ ./tech-stack --list"</p>
            <h3 class="terminal-heading">"Tech Stack"</h3>
            <ul class="terminal-stacks">
                {TECH_STACK
                    .iter()
                    .map(|stack| {
                        view! {
                            <li class="terminal-stack-row">
                                <span class="terminal-check" aria-hidden="true">
                                    <Icon icon=IconName::Checkmark size=IconSize::Xs />
                                </span>
                                <span class="terminal-category">{stack.category}</span>
                                <span class="terminal-items">{stack.items.join(", ")}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <p class="terminal-status">
                <span class="terminal-flag" aria-hidden="true">
                    <Icon icon=IconName::Flag size=IconSize::Xs />
                </span>
                <span>{boot_status_line()}</span>
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_counts_every_category() {
        assert_eq!(boot_status_line(), "5 of 5 stacks loaded successfully");
    }

    #[test]
    fn every_category_is_named_and_non_empty() {
        for stack in &TECH_STACK {
            assert!(!stack.category.is_empty());
            assert!(!stack.items.is_empty());
        }
    }

    #[test]
    fn category_names_are_unique() {
        for (i, a) in TECH_STACK.iter().enumerate() {
            for b in TECH_STACK.iter().skip(i + 1) {
                assert_ne!(a.category, b.category);
            }
        }
    }
}
