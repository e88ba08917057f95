use sprint_core::Stage;
use sprint_core::model::{IntakeAnswers, PracticeSessionConfig, TargetBand, UserLevel};
use sprint_core::session::TickOutcome;
use services::AppServices;

#[tokio::test]
async fn first_run_reaches_main_and_survives_restart() {
    let url = "sqlite:file:first_run_flow?mode=memory&cache=shared";
    let services = AppServices::new_sqlite(url).await.unwrap();
    let flow = services.flow();
    let mut stages = flow.subscribe();
    assert_eq!(flow.stage(), Stage::Onboarding);

    flow.finish_onboarding().await.unwrap();
    assert_eq!(*stages.borrow_and_update(), Stage::Intake);

    let answers = IntakeAnswers {
        level: UserLevel::Advanced,
        target_band: TargetBand::Band700To800,
        ..IntakeAnswers::default()
    };
    services.intake().save(answers).await.unwrap();
    flow.finish_intake().await.unwrap();
    assert_eq!(*stages.borrow_and_update(), Stage::Diagnostic);

    let mut diagnostic = services.practice().start(PracticeSessionConfig::diagnostic());
    assert!(diagnostic.start_if_needed());
    diagnostic.select(2);
    diagnostic.next_or_finish();
    assert!(matches!(diagnostic.tick(), TickOutcome::Running { .. }));
    diagnostic.finish();
    services
        .profile()
        .record_session(&diagnostic.result())
        .await
        .unwrap();
    flow.finish_diagnostic().await.unwrap();
    assert_eq!(*stages.borrow_and_update(), Stage::Main);

    let restarted = AppServices::new_sqlite(url).await.unwrap();
    assert_eq!(restarted.flow().stage(), Stage::Main);
    assert_eq!(restarted.intake().load().await.unwrap(), answers);
}

#[tokio::test]
async fn skipping_diagnostic_lands_on_main() {
    let services = AppServices::in_memory().await.unwrap();
    let flow = services.flow();
    flow.finish_onboarding().await.unwrap();
    flow.finish_intake().await.unwrap();
    assert_eq!(flow.skip_diagnostic().await.unwrap(), Stage::Main);
    assert!(!flow.milestones().diagnostic_done);
}

#[tokio::test]
async fn resetting_progress_keeps_stage() {
    let services = AppServices::in_memory().await.unwrap();
    let flow = services.flow();
    flow.finish_onboarding().await.unwrap();
    flow.finish_intake().await.unwrap();
    flow.skip_diagnostic().await.unwrap();

    let progress = services.profile().reset_progress().await.unwrap();
    assert_eq!(progress.total_solved, 0);
    assert_eq!(flow.stage(), Stage::Main);
}
