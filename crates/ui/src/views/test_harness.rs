use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use roadmap_core::model::{AdditionalResources, Phase, RoadmapDocument};
use services::{LoadError, RoadmapFetch, SessionContext};

use crate::context::{UiApp, build_app_context};
use crate::views::RoadmapView;

/// Fetcher returning one canned outcome, standing in for the HTTP client.
pub struct CannedFetch(pub Result<RoadmapDocument, LoadError>);

#[async_trait]
impl RoadmapFetch for CannedFetch {
    async fn fetch_roadmap(
        &self,
        _session: &SessionContext,
    ) -> Result<RoadmapDocument, LoadError> {
        self.0.clone()
    }
}

struct TestApp {
    fetch: Arc<dyn RoadmapFetch>,
    identity: SessionContext,
}

impl UiApp for TestApp {
    fn session_context(&self) -> SessionContext {
        self.identity.clone()
    }

    fn roadmap_fetch(&self) -> Arc<dyn RoadmapFetch> {
        Arc::clone(&self.fetch)
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for HarnessProps {}

#[component]
fn RoadmapHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { RoadmapView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_roadmap_harness(
    outcome: Result<RoadmapDocument, LoadError>,
    user_id: &str,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        fetch: Arc::new(CannedFetch(outcome)),
        identity: SessionContext::new(user_id),
    });
    let dom = VirtualDom::new_with_props(RoadmapHarness, HarnessProps { app });
    ViewHarness { dom }
}

pub fn sample_document() -> RoadmapDocument {
    RoadmapDocument {
        overview: "Become a backend engineer".into(),
        phases: vec![
            Phase {
                phase_name: "Phase A".into(),
                description: "Foundations".into(),
                actionable_steps: vec!["Learn HTTP".into(), "Learn SQL".into()],
                completed_steps: [0].into_iter().collect(),
                recommended_courses: Vec::new(),
                industry_trends: "APIs everywhere".into(),
            },
            Phase {
                phase_name: "Phase B".into(),
                description: "Going deeper".into(),
                actionable_steps: vec!["Build a service".into(), "Deploy it".into()],
                completed_steps: std::collections::BTreeSet::new(),
                recommended_courses: Vec::new(),
                industry_trends: String::new(),
            },
        ],
        additional_resources: AdditionalResources {
            mentorship: "Find a mentor".into(),
            community_support: "Join a forum".into(),
            job_search_strategies: "Build a portfolio".into(),
        },
    }
}
