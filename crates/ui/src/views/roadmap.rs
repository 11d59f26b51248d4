use dioxus::prelude::*;

use roadmap_core::model::ToggleError;
use services::{LoadState, RoadmapSession};

use crate::context::AppContext;
use crate::vm::{PhaseVm, project_roadmap};

/// The roadmap page.
///
/// One fetch per mount, driven through `RoadmapSession`: the ticket taken at
/// mount time settles the response, and teardown on unmount turns any late
/// response into a no-op. Toggling writes the session signal, which re-renders
/// the page and recomputes every percentage from the mutated document.
#[component]
pub fn RoadmapView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_signal(RoadmapSession::new);
    let fault = use_signal(|| None::<ToggleError>);

    {
        let ctx = ctx.clone();
        let _load = use_future(move || {
            let fetch = ctx.roadmap_fetch();
            let identity = ctx.session_context();
            async move {
                let ticket = session.write().begin_load();
                let result = fetch.fetch_roadmap(&identity).await;
                session.write().settle(ticket, result);
            }
        });
    }

    use_drop(move || {
        session.write().tear_down();
    });

    // A toggle with indices the view did not enumerate is a bug in this
    // component; surface it instead of rendering around it.
    if let Some(err) = fault() {
        return rsx! {
            div { class: "fatal",
                h1 { "Something went wrong" }
                pre { "{err}" }
            }
        };
    }

    let state = session.read().state().clone();
    match state {
        LoadState::Idle | LoadState::Loading => rsx! {
            div { class: "page",
                p { class: "loading", "Loading..." }
            }
        },
        LoadState::Failed(err) => rsx! {
            div { class: "page",
                p { class: "load-error", "{err}" }
            }
        },
        LoadState::Ready(document) => {
            let vm = project_roadmap(&document);
            rsx! {
                div { class: "page roadmap",
                    h1 { "Your Learning Roadmap" }
                    p { class: "overview", "{vm.overview}" }

                    section { class: "overall-progress",
                        div { class: "progress-heading",
                            h2 { "Overall Progress" }
                            span { class: "percent", "{vm.overall_percent}%" }
                        }
                        ProgressBar { percent: vm.overall_percent }
                    }

                    for phase in vm.phases {
                        PhaseCard { phase, session, fault }
                    }

                    section { class: "additional-resources",
                        h2 { "Additional Resources" }
                        p {
                            strong { "Mentorship: " }
                            "{vm.mentorship}"
                        }
                        p {
                            strong { "Community Support: " }
                            "{vm.community_support}"
                        }
                        p {
                            strong { "Job Search Strategies: " }
                            "{vm.job_search_strategies}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProgressBar(percent: u8) -> Element {
    rsx! {
        div { class: "progress-track",
            div { class: "progress-fill", style: "width: {percent}%;" }
        }
    }
}

#[component]
fn PhaseCard(
    phase: PhaseVm,
    session: Signal<RoadmapSession>,
    fault: Signal<Option<ToggleError>>,
) -> Element {
    let mut session = session;
    let mut fault = fault;
    rsx! {
        section { class: "phase-card",
            h2 { "{phase.name}" }
            p { class: "description", "{phase.description}" }

            div { class: "phase-progress",
                div { class: "progress-heading",
                    h4 { "Phase Progress" }
                    span { class: "percent", "{phase.percent}%" }
                }
                ProgressBar { percent: phase.percent }
            }

            h4 { "Actionable Steps:" }
            ul { class: "steps",
                for step in phase.steps {
                    li { key: "{step.step_index}",
                        input {
                            r#type: "checkbox",
                            checked: step.done,
                            onchange: {
                                let phase_index = step.phase_index;
                                let step_index = step.step_index;
                                move |_| {
                                    if let Err(err) =
                                        session.write().toggle_step(phase_index, step_index)
                                    {
                                        fault.set(Some(err));
                                    }
                                }
                            },
                        }
                        span {
                            class: if step.done { "step-label done" } else { "step-label" },
                            "{step.label}"
                        }
                    }
                }
            }

            if !phase.courses.is_empty() {
                h4 { "Recommended Courses:" }
                ul { class: "courses",
                    for course in phase.courses {
                        li { key: "{course.link}",
                            a { href: "{course.link}", target: "_blank", "{course.title}" }
                            p { class: "course-meta", "{course.meta}" }
                        }
                    }
                }
            }

            h4 { "Industry Trends:" }
            p { class: "trends", "{phase.industry_trends}" }
        }
    }
}
