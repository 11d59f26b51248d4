use services::{GENERIC_FETCH_MESSAGE, LoadError};

use super::test_harness::{sample_document, setup_roadmap_harness};

#[tokio::test(flavor = "current_thread")]
async fn roadmap_view_smoke_renders_phases_and_progress() {
    let mut harness = setup_roadmap_harness(Ok(sample_document()), "user-1");
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Your Learning Roadmap"), "missing title in {html}");
    assert!(html.contains("Become a backend engineer"), "missing overview in {html}");
    assert!(html.contains("Overall Progress"), "missing overall bar in {html}");
    // 1 of 4 steps completed across both phases.
    assert!(html.contains("25%"), "missing overall percent in {html}");
    assert!(html.contains("Phase A"), "missing phase name in {html}");
    assert!(html.contains("Learn HTTP"), "missing step label in {html}");
    assert!(html.contains("Additional Resources"), "missing resources in {html}");
    assert!(html.contains("Find a mentor"), "missing mentorship text in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_view_smoke_renders_invalid_data_error() {
    let mut harness = setup_roadmap_harness(Err(LoadError::InvalidData), "user-1");
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Invalid roadmap data received"),
        "missing error message in {html}"
    );
    assert!(!html.contains("Overall Progress"), "error should replace content: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_view_smoke_renders_generic_fetch_failure() {
    let outcome = Err(LoadError::fetch_with_fallback(None));
    let mut harness = setup_roadmap_harness(outcome, "");
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains(GENERIC_FETCH_MESSAGE),
        "missing fallback message in {html}"
    );
}
