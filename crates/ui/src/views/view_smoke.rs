use quiz_core::model::GameRules;

use super::test_harness::{setup_view_harness, westeros_labels};
use crate::vm::{GameIntent, GameVm};

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_renders_a_round() {
    let mut harness = setup_view_harness(westeros_labels(), GameRules::standard());
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Tap the sigil of house"),
        "missing prompt in {html}"
    );
    assert!(
        html.contains("game-sigil-0") && html.contains("game-sigil-2"),
        "missing sigil buttons in {html}"
    );
    assert!(html.contains("Round 0 / 5"), "missing progress in {html}");
    assert!(html.contains("game-audio"), "missing audio element in {html}");
    assert!(
        !html.contains("Play Again?"),
        "overlay rendered before the game finished in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_renders_error_for_a_small_pool() {
    let labels = vec!["Stark".to_string(), "Tully".to_string()];
    let mut harness = setup_view_harness(labels, GameRules::standard());
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Not enough sigils"),
        "missing pool error in {html}"
    );
    assert!(
        !html.contains("game-sigil-0"),
        "sigil buttons rendered without a pool in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_shows_summary_after_the_final_round() {
    let mut harness = setup_view_harness(westeros_labels(), GameRules::standard());
    harness.rebuild();
    harness.drive_async().await;

    let dispatch = harness.handles.dispatch();
    for _ in 0..5 {
        dispatch.call(GameIntent::Choose(0));
        harness.drive();
    }

    let html = harness.render();
    assert!(html.contains("out of 5"), "missing score line in {html}");
    assert!(html.contains("Play Again?"), "missing restart button in {html}");
    assert!(
        html.contains("I drink and you know things") || html.contains("SHAME SHAME SHAME"),
        "missing verdict in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn play_again_starts_a_fresh_game() {
    let mut harness = setup_view_harness(westeros_labels(), GameRules::standard());
    harness.rebuild();
    harness.drive_async().await;

    let dispatch = harness.handles.dispatch();
    for _ in 0..5 {
        dispatch.call(GameIntent::Choose(0));
        harness.drive();
    }
    assert!(harness.render().contains("Play Again?"));

    dispatch.call(GameIntent::PlayAgain);
    harness.drive();

    let html = harness.render();
    assert!(
        !html.contains("Play Again?"),
        "overlay still up after restart in {html}"
    );
    assert!(html.contains("Round 0 / 5"), "round counter not reset in {html}");

    let vm = harness.handles.vm();
    let score = vm.read().as_ref().map(GameVm::score);
    assert_eq!(score, Some(0));
}

#[tokio::test(flavor = "current_thread")]
async fn choices_are_ignored_while_the_overlay_is_up() {
    let mut harness = setup_view_harness(westeros_labels(), GameRules::standard());
    harness.rebuild();
    harness.drive_async().await;

    let dispatch = harness.handles.dispatch();
    for _ in 0..5 {
        dispatch.call(GameIntent::Choose(0));
        harness.drive();
    }

    // A stray tap after the last round must not advance anything.
    dispatch.call(GameIntent::Choose(0));
    harness.drive();

    let vm = harness.handles.vm();
    let played = vm.read().as_ref().map(|vm| vm.progress().played);
    assert_eq!(played, Some(5));
}
