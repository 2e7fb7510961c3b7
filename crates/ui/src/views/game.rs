use dioxus::document::eval;
use dioxus::prelude::*;

use quiz_core::model::GameSummary;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{GameIntent, GameVm, egg_row, score_line, start_game, verdict_line};

mod scripts;

use scripts::audio_script;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn GameView() -> Element {
    let ctx = use_context::<AppContext>();
    let rules = ctx.rules();
    let labels = ctx.sigil_labels();
    let autoplay = ctx.autoplay_audio();

    let vm = use_signal(|| None::<GameVm>);
    let mut audio_playing = use_signal(move || autoplay);

    let labels_for_resource = labels;
    let resource = use_resource(move || {
        let labels = labels_for_resource.clone();
        let mut vm = vm;

        async move {
            let started = start_game(labels, rules)?;
            vm.set(Some(started));
            Ok::<_, ViewError>(())
        }
    });

    let state = view_state_from_resource(&resource);

    let dispatch_intent = use_callback(move |intent: GameIntent| {
        let mut vm = vm;
        match intent {
            GameIntent::Choose(index) => {
                if let Some(vm) = vm.write().as_mut() {
                    // Input is gated once the summary overlay is up; reset is
                    // the only way back.
                    if !vm.is_finished() {
                        let _ = vm.choose(index);
                    }
                }
            }
            GameIntent::PlayAgain => {
                if let Some(vm) = vm.write().as_mut() {
                    vm.play_again();
                }
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<GameTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let has_round = vm.read().is_some();
        if !has_round {
            return;
        }

        let finished = vm.read().as_ref().is_some_and(GameVm::is_finished);
        if finished {
            if evt.data.key() == Key::Enter {
                evt.prevent_default();
                dispatch_intent.call(GameIntent::PlayAgain);
            }
            return;
        }

        if let Key::Character(value) = evt.data.key() {
            match value.as_str() {
                "1" => {
                    evt.prevent_default();
                    dispatch_intent.call(GameIntent::Choose(0));
                }
                "2" => {
                    evt.prevent_default();
                    dispatch_intent.call(GameIntent::Choose(1));
                }
                "3" => {
                    evt.prevent_default();
                    dispatch_intent.call(GameIntent::Choose(2));
                }
                _ => {}
            }
        }
    });

    // The audio element is driven imperatively; play/pause is independent of
    // game state.
    use_effect(move || {
        let js = audio_script(audio_playing());
        let _ = eval(&js);
    });

    let vm_guard = vm.read();
    let summary = vm_guard.as_ref().and_then(GameVm::summary);
    let choices: Vec<String> = vm_guard
        .as_ref()
        .map(|vm| vm.choices().to_vec())
        .unwrap_or_default();
    let target_label = vm_guard
        .as_ref()
        .map(|vm| vm.target_label().to_owned())
        .unwrap_or_default();
    let score = vm_guard.as_ref().map_or(0, GameVm::score);
    let (rounds_played, rounds_limit) = vm_guard.as_ref().map_or((0, 0), |vm| {
        let progress = vm.progress();
        (progress.played, progress.limit)
    });
    let progress_label = format!("Round {rounds_played} / {rounds_limit}");
    let score_label = format!("Score: {score}");
    let score_eggs = egg_row(score);
    let audio_glyph = if audio_playing() { "⏸" } else { "▶" };
    let audio_label = if audio_playing() {
        "Pause music"
    } else {
        "Play music"
    };

    rsx! {
        div { class: "page game-page", id: "game-root", tabindex: "0", onkeydown: on_key,
            audio {
                id: "game-audio",
                src: asset!("/assets/theme.wav"),
                r#loop: "true",
                preload: "auto",
            }
            header { class: "game-header",
                h1 { class: "game-title", "KHALEESI'S QUIZ OF THRONES" }
                button {
                    class: "audio-toggle",
                    id: "game-audio-toggle",
                    r#type: "button",
                    aria_label: "{audio_label}",
                    onclick: move |_| {
                        let playing = audio_playing();
                        audio_playing.set(!playing);
                    },
                    "{audio_glyph}"
                }
            }
            div { class: "game-body",
                match state {
                    ViewState::Idle => rsx! {
                        p { "Idle" }
                    },
                    ViewState::Loading => rsx! {
                        p { "Loading..." }
                    },
                    ViewState::Error(err) => rsx! {
                        p { class: "game-error", "{err.message()}" }
                    },
                    ViewState::Ready(()) => rsx! {
                        if !choices.is_empty() {
                            div { class: "game-prompt",
                                p { class: "game-prompt__lead", "Tap the sigil of house" }
                                p { class: "game-prompt__target", "{target_label}" }
                            }
                            div { class: "sigil-row",
                                for (index, label) in choices.iter().enumerate() {
                                    SigilButton {
                                        key: "{label}",
                                        index,
                                        label: label.clone(),
                                        on_intent: dispatch_intent,
                                    }
                                }
                            }
                            p { class: "score-eggs", "{score_eggs}" }
                        } else {
                            p { "No round available." }
                        }
                    },
                }
            }
            footer { class: "game-footer",
                span { class: "game-footer__item", "{progress_label}" }
                span { class: "game-footer__item", "{score_label}" }
            }
            if let Some(summary) = summary {
                SummaryOverlay {
                    summary,
                    on_play_again: move |()| dispatch_intent.call(GameIntent::PlayAgain),
                }
            }
        }
    }
}

#[component]
fn SigilButton(index: usize, label: String, on_intent: EventHandler<GameIntent>) -> Element {
    rsx! {
        button {
            class: "sigil-card",
            id: "game-sigil-{index}",
            r#type: "button",
            onclick: move |_| on_intent.call(GameIntent::Choose(index)),
            span { class: "sigil-card__name", "{label}" }
        }
    }
}

#[component]
fn SummaryOverlay(summary: GameSummary, on_play_again: EventHandler<()>) -> Element {
    let verdict = verdict_line(summary.did_win());
    let score = score_line(&summary);
    let eggs = egg_row(summary.score());

    rsx! {
        div { class: "game-overlay",
            div {
                class: "game-summary",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "game-summary-title",
                h2 { class: "game-summary__verdict", id: "game-summary-title", "{verdict}" }
                p { class: "game-summary__score", "{score}" }
                p { class: "score-eggs", "{eggs}" }
                button {
                    class: "game-summary__cta",
                    id: "game-play-again",
                    r#type: "button",
                    onclick: move |_| on_play_again.call(()),
                    "Play Again?"
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct GameTestHandles {
    dispatch: Rc<RefCell<Option<Callback<GameIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<GameVm>>>>>,
}

#[cfg(test)]
impl GameTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<GameIntent>, vm: Signal<Option<GameVm>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<GameIntent> {
        (*self.dispatch.borrow()).expect("game dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<GameVm>> {
        (*self.vm.borrow()).expect("game vm registered")
    }
}
