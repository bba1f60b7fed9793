//! Resume window content: summary, experience timeline, and a download link.

use leptos::*;
use window_contract::{WindowContentContext, WindowModule};

const RESUME_PDF_PATH: &str = "/files/adrian-mercer-resume.pdf";

const SUMMARY: &str = "Systems-leaning web engineer. Eight years shipping \
product front ends and the services behind them; currently focused on \
Rust-to-WASM UI runtimes.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Role {
    company: &'static str,
    title: &'static str,
    period: &'static str,
    points: &'static [&'static str],
}

const EXPERIENCE: [Role; 3] = [
    Role {
        company: "Orbit Analytics",
        title: "Senior Engineer",
        period: "2023 - present",
        points: &[
            "Lead the dashboard rendering layer, 60fps over 50k live series",
            "Moved chart virtualization to WASM, cutting p95 frame time 40%",
        ],
    },
    Role {
        company: "Ledgerline",
        title: "Product Engineer",
        period: "2021 - 2023",
        points: &[
            "Built the invoicing editor and its offline reconciliation flow",
            "Owned the design-system migration across 140 screens",
        ],
    },
    Role {
        company: "Fieldnotes",
        title: "Engineer",
        period: "2019 - 2021",
        points: &[
            "First engineering hire; shipped the sync protocol v1 and v2",
        ],
    },
];

fn mount(_context: WindowContentContext) -> View {
    view! { <ResumeWindow /> }.into_view()
}

/// Content module registered for the resume window.
pub fn module() -> WindowModule {
    WindowModule::new(mount)
}

#[component]
fn ResumeWindow() -> impl IntoView {
    view! {
        <div class="app app-resume">
            <p class="resume-summary">{SUMMARY}</p>
            <h3>"Experience"</h3>
            <ol class="resume-roles">
                {EXPERIENCE
                    .iter()
                    .map(|role| {
                        view! {
                            <li class="resume-role">
                                <div class="resume-role-head">
                                    <strong>{role.company}</strong>
                                    <span>{role.title}</span>
                                    <span class="resume-role-period">{role.period}</span>
                                </div>
                                <ul class="resume-role-points">
                                    {role
                                        .points
                                        .iter()
                                        .map(|point| view! { <li>{*point}</li> })
                                        .collect_view()}
                                </ul>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
            <a class="resume-download" href=RESUME_PDF_PATH download="adrian-mercer-resume.pdf">
                "Download PDF"
            </a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_carries_at_least_one_point() {
        for role in &EXPERIENCE {
            assert!(!role.points.is_empty(), "{}", role.company);
        }
    }

    #[test]
    fn download_path_is_a_pdf() {
        assert!(RESUME_PDF_PATH.ends_with(".pdf"));
    }
}
