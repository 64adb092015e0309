//! Navigation between views.

use crate::{
    store::{
        effect::Effect,
        state::{FormState, ListStatus, State},
    },
    ui::route::Route,
};

/// Ends the current view lifetime, enters `route` and returns the fetch the
/// new view needs on mount.
pub fn navigate(state: &mut State, route: Route) -> Effect {
    state.lifetime = state.lifetime.next();
    state.confirm_delete = None;
    state.route = route.clone();

    match route {
        Route::Devices => {
            state.list.status = ListStatus::Loading;
            state.list.devices.clear();
            Effect::FetchDevices(state.lifetime.clone())
        }
        Route::CreateDevice => {
            state.form = FormState::create();
            Effect::None
        }
        Route::EditDevice(id) => {
            state.form = FormState::edit(id.clone());
            Effect::FetchDevice(state.lifetime.clone(), id)
        }
    }
}
