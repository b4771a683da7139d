//! End-to-end intent flows through the command surface.

use chatzone_client::commands::{channels, identity, messaging, profile};
use chatzone_client::{start, ClientConfig, ClientError};
use chatzone_shared::identity::{IdentityUpdate, SignupForm};
use chatzone_shared::routes::Route;

fn form(username: &str) -> SignupForm {
    SignupForm {
        username: username.to_string(),
        email: format!("{username}@chat.zone"),
        password: "pw".to_string(),
        is_over_18: true,
        accepted_terms: true,
    }
}

#[test]
fn full_session() {
    chatzone_client::init_tracing();
    let state = start(ClientConfig::default());

    assert_eq!(identity::navigate(&state, "/chat").unwrap(), Route::Signup);

    let login = identity::signup(&state, form("Carol")).unwrap();
    assert_eq!(login.redirect, Route::Chat);

    let view = messaging::chat_view(&state).unwrap();
    assert_eq!(view.message_count, 3);
    assert_eq!(view.active_channel.label, "general");

    let sent = messaging::send_message(&state, "hello".into()).unwrap();
    assert_eq!(sent.id, 4);

    let retro = channels::create_channel(&state, "retro @OldSchoolGamer @Carol".into()).unwrap();
    assert_eq!(retro.members, vec!["Carol", "OldSchoolGamer"]);
    assert_eq!(retro.label, "retro (2)");

    channels::switch_channel(&state, &retro.id).unwrap();
    assert!(messaging::get_messages(&state).unwrap().is_empty());

    let first = messaging::send_message(&state, "in retro".into()).unwrap();
    assert_eq!(first.id, 1);

    channels::switch_channel(&state, "general").unwrap();
    channels::switch_channel(&state, &retro.id).unwrap();
    assert!(messaging::get_messages(&state).unwrap().is_empty());

    assert_eq!(identity::logout(&state).unwrap(), Route::Signup);
    assert!(messaging::send_message(&state, "ghost".into())
        .unwrap_err()
        .is_rejection());
    assert!(identity::update_identity(&state, IdentityUpdate::default())
        .unwrap_err()
        .is_rejection());
    // Channels outlive the identity that created them.
    assert_eq!(channels::list_channels(&state).unwrap().len(), 2);
}

#[test]
fn mentions_respect_configured_directory() {
    let config = ClientConfig::from_json(r#"{"knownUsers":["Admin","Alice","Bob"]}"#).unwrap();
    let state = start(config);
    identity::signup(&state, form("Carol")).unwrap();

    let design = channels::create_channel(&state, "design @Alice @Bob".into()).unwrap();
    assert_eq!(design.name, "design");
    assert_eq!(design.members, vec!["Carol", "Alice", "Bob"]);
    assert_ne!(design.id, "general");

    let solo = channels::create_channel(&state, "@Carol team".into()).unwrap();
    assert_eq!(solo.members, vec!["Carol"]);
}

#[test]
fn renamed_user_becomes_the_author() {
    let state = start(ClientConfig::default());
    identity::signup(&state, form("Carol")).unwrap();

    profile::begin_edit(&state).unwrap();
    profile::edit_field(&state, "username", "Caro".into()).unwrap();
    profile::save_edit(&state).unwrap();

    let msg = messaging::send_message(&state, "new name".into()).unwrap();
    assert_eq!(msg.author, "Caro");
    assert!(profile::view_profile(&state, "Caro").unwrap().is_own);
    assert!(!profile::view_profile(&state, "Carol").unwrap().is_own);
}

#[test]
fn poisoned_state_is_reported() {
    let state = start(ClientConfig::default());
    let clone = state.clone();
    let _ = std::thread::spawn(move || {
        let _guard = clone.lock().unwrap();
        panic!("poison");
    })
    .join();

    assert!(matches!(
        identity::current_identity(&state),
        Err(ClientError::LockPoisoned(_))
    ));
}
