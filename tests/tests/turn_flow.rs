use application::canned_responder::{CannedResponder, CANNED_PHRASES};
use application::remote_responder::{RemoteResponder, FALLBACK_PHRASES};
use application::turn_controller::{IgnoreReason, SubmitOutcome, TurnController};
use domain::message::Sender;
use domain::turn::TurnPhase;
use tests::{assert_alternating, seeded_store, ScriptedBackend};

#[tokio::test]
async fn canned_session_grows_by_two_per_turn() {
    let controller = TurnController::new(CannedResponder::instant());
    for k in 1..=6 {
        controller.submit(&format!("question {k}")).await;
        assert_eq!(controller.len(), 1 + 2 * k);
    }
    let messages = controller.messages();
    assert_alternating(&messages);
    for reply in messages.iter().skip(2).step_by(2) {
        assert!(CANNED_PHRASES.contains(&reply.text.as_str()));
    }
}

#[tokio::test]
async fn whitespace_never_changes_the_store() {
    let controller = TurnController::new(CannedResponder::instant());
    controller.submit("real").await;
    let before = controller.len();
    for input in [" ", "\t", "\n\n", ""] {
        assert_eq!(
            controller.submit(input).await,
            SubmitOutcome::Ignored(IgnoreReason::EmptyInput)
        );
    }
    assert_eq!(controller.len(), before);
}

#[tokio::test]
async fn hello_against_remote_backend() {
    let controller = TurnController::new(RemoteResponder::new(ScriptedBackend::replying(
        "*안녕하세요!*",
    )));
    controller.submit("hello").await;

    let messages = controller.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].sender, Sender::User);
    assert_eq!(messages[1].text, "hello");
    assert_eq!(messages[2].sender, Sender::Assistant);
    assert_eq!(messages[2].text, "*안녕하세요!*");
}

#[tokio::test]
async fn remote_failure_still_completes_the_turn() {
    let controller = TurnController::new(RemoteResponder::new(ScriptedBackend::failing()));
    let outcome = controller.submit("hello").await;

    let reply = outcome.reply().expect("turn should complete");
    assert!(FALLBACK_PHRASES.contains(&reply.text.as_str()));
    assert_eq!(controller.phase(), TurnPhase::Idle);
    assert_eq!(controller.len(), 3);

    controller.submit("again").await;
    assert_eq!(controller.len(), 5);
}

#[tokio::test]
async fn remote_prompt_carries_last_ten_prior_messages() {
    // greeting + 5 turns + "u5" = 12 prior messages
    let mut store = seeded_store(5);
    store.append(Sender::User, "u5");
    assert_eq!(store.len(), 12);

    let controller = TurnController::with_store(
        RemoteResponder::new(ScriptedBackend::replying("ok")),
        store,
    );
    controller.submit("fresh input").await;

    let prompts = controller.generator().backend().prompts();
    assert_eq!(prompts.len(), 1);
    let prompt = &prompts[0];

    assert!(!prompt.contains("안녕하세요"));
    assert!(!prompt.contains("user: u0\n"));
    let expected = [
        "assistant: a0", "user: u1", "assistant: a1", "user: u2", "assistant: a2", "user: u3",
        "assistant: a3", "user: u4", "assistant: a4", "user: u5",
    ];
    let lines: Vec<&str> = prompt
        .lines()
        .filter(|l| l.starts_with("user: ") || l.starts_with("assistant: "))
        .collect();
    assert_eq!(&lines[..10], &expected);
    assert_eq!(lines[10], "user: fresh input");
    assert!(prompt.ends_with("\nassistant:"));
}
