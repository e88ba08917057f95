use services::AppServices;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_services};

async fn services_at_main() -> AppServices {
    let services = AppServices::in_memory().await.expect("services");
    let flow = services.flow();
    flow.finish_onboarding().await.expect("onboarding");
    flow.finish_intake().await.expect("intake");
    flow.skip_diagnostic().await.expect("skip");
    services
}

#[tokio::test(flavor = "current_thread")]
async fn first_run_shows_onboarding() {
    let mut harness = setup_view_harness(ViewKind::App).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Smart SAT Prep"), "missing first page in {html}");
    assert!(html.contains("Skip"), "missing skip in {html}");
    assert!(!html.contains("Start Practice"), "tabs leaked into {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn intake_stage_shows_questionnaire() {
    let services = AppServices::in_memory().await.expect("services");
    services.flow().finish_onboarding().await.expect("onboarding");

    let mut harness = setup_view_harness_with_services(ViewKind::App, services);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("personalize your practice"), "missing intake in {html}");
    assert!(html.contains("Multiple times"), "missing history options in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn gate_follows_stage_changes_while_mounted() {
    let mut harness = setup_view_harness(ViewKind::App).await;
    harness.rebuild();
    harness.drive_async().await;
    assert!(harness.render().contains("Smart SAT Prep"));

    harness.services.flow().finish_onboarding().await.expect("onboarding");
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("personalize your practice"), "gate did not advance: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn diagnostic_stage_offers_start_and_not_now() {
    let services = AppServices::in_memory().await.expect("services");
    let flow = services.flow();
    flow.finish_onboarding().await.expect("onboarding");
    flow.finish_intake().await.expect("intake");

    let mut harness = setup_view_harness_with_services(ViewKind::App, services);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Quick diagnostic?"), "missing offer in {html}");
    assert!(html.contains("Not now"), "missing skip in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn main_stage_shows_home_and_tabs() {
    let mut harness = setup_view_harness_with_services(ViewKind::App, services_at_main().await);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Mini Set · Mixed Topics"), "missing focus card in {html}");
    assert!(html.contains("Start Practice"), "missing start button in {html}");
    assert!(html.contains("Profile"), "missing tab bar in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn stats_view_renders_week_snapshot() {
    let mut harness = setup_view_harness(ViewKind::Stats).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("210 min"), "missing activity header in {html}");
    assert!(html.contains("Best: Functions"), "missing best topic in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_renders_topic_setup() {
    let mut harness = setup_view_harness(ViewKind::Practice).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Build fundamentals"), "missing header in {html}");
    assert!(html.contains("10 questions"), "missing count in {html}");
    assert!(html.contains("Run diagnostic"), "missing diagnostic entry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn profile_view_renders_after_reset() {
    let services = services_at_main().await;
    services.profile().reset_progress().await.expect("reset");

    let mut harness = setup_view_harness_with_services(ViewKind::Profile, services);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Izbassar"), "missing name in {html}");
    assert!(html.contains("Beginner"), "missing level in {html}");
    assert!(html.contains("Reset progress"), "missing reset button in {html}");
}
