//! End-to-end scenarios driving the dashboard through its messages.

use std::time::{Duration, Instant};

use habitflow_client::HabitClient;
use habitflow_config::{ThemeMode, ThemeState};
use habitflow_protocol::{
    CardAction, CardRegistry, Category, CategoryFilter, Message, SyncState,
    dummy::dummy_registry,
};
use habitflow_tui::App;
use habitflow_tui::charts::ChartRole;
use habitflow_tui::lifecycle::COLLAPSE_DURATION;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app() -> App {
    App::new(
        dummy_registry(),
        ThemeState::initialize(None, ThemeMode::Dark),
    )
}

fn create(app: &mut App, title: &str, now: Instant) {
    app.update_at(Message::NewHabit, now);
    for ch in title.chars() {
        app.update_at(Message::FormInput { ch }, now);
    }
    app.update_at(Message::FormSubmit, now);
}

async fn wait_for_report(app: &mut App) {
    for _ in 0..200 {
        if app.drain_reports() > 0 {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("no persistence report arrived");
}

#[test]
fn create_complete_delete() {
    let mut app = app();
    let now = Instant::now();

    create(&mut app, "Stretch", now);
    let card = app.state().selected_card().unwrap();
    assert_eq!(card.title, "Stretch");
    assert_eq!(card.sync, SyncState::LocalOnly);
    let id = card.id;

    app.update_at(Message::Card(CardAction::Complete), now);
    assert!(app.state().registry().get(id).unwrap().completed());
    // a second completion is a no-op
    app.update_at(Message::Card(CardAction::Complete), now);
    assert_eq!(app.state().registry().completed_count(), 2);

    app.update_at(Message::Card(CardAction::Delete), now);
    app.update_at(Message::Confirm { accepted: true }, now);
    // the card stays until its collapse finishes
    app.tick(now + COLLAPSE_DURATION / 2);
    assert_eq!(app.state().registry().len(), 7);
    app.tick(now + COLLAPSE_DURATION);
    assert_eq!(app.state().registry().len(), 6);
    assert!(app.state().registry().get(id).is_none());

    let categories = app
        .charts()
        .backend()
        .get(ChartRole::CategoryBreakdown)
        .unwrap();
    assert_eq!(categories.data.values[0], 2);
}

#[test]
fn drink_water_from_empty_dashboard() {
    let mut app = App::new(
        CardRegistry::new(),
        ThemeState::initialize(None, ThemeMode::Light),
    );
    let now = Instant::now();

    app.update_at(Message::NewHabit, now);
    for ch in "Drink Water".chars() {
        app.update_at(Message::FormInput { ch }, now);
    }
    app.update_at(Message::FormNextField, now);
    for ch in "8 glasses".chars() {
        app.update_at(Message::FormInput { ch }, now);
    }
    app.update_at(Message::FormSubmit, now);

    let card = app.state().selected_card().unwrap();
    assert_eq!(card.category.display_name(), "Health & Fitness");
    assert_eq!(card.progress_percent(), 0);
    let id = card.id;

    app.update_at(Message::Card(CardAction::Complete), now);
    let emitted = app.state().lifecycle.notifier().emitted();
    app.update_at(Message::Card(CardAction::Complete), now);
    assert_eq!(app.state().lifecycle.notifier().emitted(), emitted);
    assert!(app.state().registry().get(id).unwrap().completed());

    app.update_at(Message::Card(CardAction::Delete), now);
    app.update_at(Message::Confirm { accepted: true }, now);
    app.tick(now + COLLAPSE_DURATION);
    assert!(app.state().registry().is_empty());
    assert_eq!(app.state().selected, None);
}

#[test]
fn filter_hides_cards_without_removing_them() {
    let mut app = app();
    app.update(Message::SetFilter(CategoryFilter::Only(Category::Education)));

    let registry = app.state().registry();
    assert_eq!(registry.visible_len(), 1);
    assert_eq!(registry.len(), 6);
    assert_eq!(
        app.state().selected_card().map(|c| c.title.as_str()),
        Some("Read 20 Pages")
    );

    // a card created under a filter it does not match stays hidden
    create(&mut app, "Plank", Instant::now());
    assert_eq!(app.state().registry().len(), 7);
    assert_eq!(app.state().registry().visible_len(), 1);
}

#[test]
fn theme_toggle_keeps_charts() {
    let mut app = app();
    app.update(Message::ToggleTheme);
    app.update(Message::ToggleTheme);

    assert_eq!(app.state().theme.mode(), ThemeMode::Dark);
    for role in [ChartRole::PerformanceTrend, ChartRole::CategoryBreakdown] {
        let chart = app.charts().backend().get(role).unwrap();
        assert_eq!(chart.creations, 1);
        assert_eq!(chart.redraws, 2);
    }
}

#[tokio::test]
async fn created_habit_is_persisted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/habits"))
        .and(body_json(serde_json::json!({
            "name": "Meditate",
            "description": "",
            "category": "Health",
            "frequency": "Daily",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HabitClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
    let mut app = app().with_client(client);

    create(&mut app, "Meditate", Instant::now());
    let id = app.state().selected_id().unwrap();
    assert_eq!(
        app.state().registry().get(id).unwrap().sync,
        SyncState::Pending
    );

    wait_for_report(&mut app).await;
    assert_eq!(
        app.state().registry().get(id).unwrap().sync,
        SyncState::Synced
    );
}

#[tokio::test]
async fn failed_persistence_keeps_card_and_marks_it() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/habits"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let client = HabitClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
    let mut app = app().with_client(client);

    create(&mut app, "Meditate", Instant::now());
    let id = app.state().selected_id().unwrap();

    wait_for_report(&mut app).await;
    let card = app.state().registry().get(id).unwrap();
    assert_eq!(card.title, "Meditate");
    assert_eq!(card.sync, SyncState::Failed);
    assert_eq!(app.state().registry().len(), 7);
}
