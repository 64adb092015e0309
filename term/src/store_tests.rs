use mockall::predicate::eq;

use crate::{
    store::{lifetime::ViewLifetime, reducer::StoreReducer},
    ui::{colors::Theme, route::Route},
};

use super::*;

fn state() -> State {
    State::new("Device Inventory", Theme::Blue, true)
}

#[test]
fn dispatch_runs_reducer_and_hands_effect_to_handler() {
    let mut reducer = MockReducer::new();
    let mut effects = MockEffectHandler::new();
    let lifetime = ViewLifetime::new();
    let expected = Effect::FetchDevices(lifetime.clone());

    reducer
        .expect_reduce()
        .withf(|_, action| *action == Action::ReloadDevices)
        .times(1)
        .returning(move |state, _| {
            state.message = Some("reloading".to_string());
            Effect::FetchDevices(lifetime.clone())
        });
    effects.expect_handle().with(eq(expected)).times(1).return_const(());

    let store = Store::new(state(), Box::new(reducer), Box::new(effects));
    store.dispatch(Action::ReloadDevices);

    assert_eq!(store.get_state().message, Some("reloading".to_string()));
}

#[test]
fn no_effect_is_not_handed_to_handler() {
    let mut effects = MockEffectHandler::new();
    effects.expect_handle().never();

    let store = Store::new(state(), StoreReducer::boxed(), Box::new(effects));
    store.dispatch(Action::UpdateMessage(Some("hello".to_string())));

    assert_eq!(store.get_state().message, Some("hello".to_string()));
}

#[test]
fn snapshots_are_unaffected_by_later_dispatches() {
    let mut effects = MockEffectHandler::new();
    effects.expect_handle().times(1).return_const(());

    let store = Store::new(state(), StoreReducer::boxed(), Box::new(effects));
    let before = store.get_state();

    store.dispatch(Action::Navigate(Route::Devices));

    let after = store.get_state();
    assert_ne!(before.lifetime, after.lifetime);
    assert!(before.lifetime.is_cancelled());
    assert_eq!(after.route, Route::Devices);
}
