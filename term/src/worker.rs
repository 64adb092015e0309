//! Executes reducer effects off the render thread.
//!
//! Every API effect runs its request on a short lived thread and reports the
//! outcome back as an action over a channel that the render loop drains.
//! Outcomes for a view lifetime that was cancelled meanwhile are dropped.

use color_eyre::eyre::eyre;
use derive_builder::Builder;
use devinv_lib::{
    client::DeviceApi,
    device::Device,
    error::{DeviceApiError, Result as ApiResult},
};
use std::{
    panic::{self, AssertUnwindSafe},
    sync::{Arc, Mutex, mpsc::Sender},
    thread::{self, JoinHandle},
};

use crate::{
    config::{Config, ConfigManager},
    error,
    store::{
        EffectHandler,
        action::Action,
        effect::Effect,
        lifetime::{LifetimeId, ViewLifetime},
    },
    ui::colors::Theme,
};

/// Runs API calls and config writes requested by the reducer.
#[derive(Builder)]
#[builder(pattern = "owned")]
pub struct ApiWorker {
    api: Arc<dyn DeviceApi>,
    tx: Sender<Action>,
    config_manager: Arc<Mutex<ConfigManager>>,
}

impl ApiWorker {
    pub fn builder() -> ApiWorkerBuilder {
        ApiWorkerBuilder::default()
    }

    /// Runs `request` on its own thread and forwards the action built by
    /// `outcome` unless `lifetime` ended while the request was in flight.
    /// A panicking request is reported to `outcome` as a transport error.
    fn spawn<T, F, O>(
        &self,
        lifetime: ViewLifetime,
        request: F,
        outcome: O,
    ) -> JoinHandle<()>
    where
        F: FnOnce(&dyn DeviceApi) -> ApiResult<T> + Send + 'static,
        O: FnOnce(LifetimeId, ApiResult<T>) -> Action + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();

        thread::spawn(move || {
            let id = lifetime.id();
            let result =
                panic::catch_unwind(AssertUnwindSafe(|| request(api.as_ref())))
                    .unwrap_or_else(|e| {
                        let report = error::report_from_thread_panic(e);
                        log::error!("api worker failed: {report}");
                        Err(DeviceApiError::Transport(report.to_string()))
                    });

            if lifetime.is_cancelled() {
                log::debug!("dropping result for cancelled lifetime {id}");
                return;
            }

            if let Err(e) = tx.send(outcome(id, result)) {
                log::warn!("failed to deliver api result: {e}");
            }
        })
    }

    fn save_theme(&self, theme: Theme) {
        let result = self
            .config_manager
            .lock()
            .map_err(|e| eyre!("config lock poisoned: {e}"))
            .and_then(|mut manager| manager.update(Config { theme }));

        if let Err(e) = result {
            log::error!("failed to save theme: {e}");
            let message = format!("failed to save theme: {e}");
            if let Err(e) = self.tx.send(Action::SetError(Some(message))) {
                log::warn!("failed to report theme error: {e}");
            }
        }
    }

    /// Starts the work described by `effect`. API effects return the handle
    /// of the thread performing the request.
    pub fn run(&self, effect: Effect) -> Option<JoinHandle<()>> {
        match effect {
            Effect::None => None,
            Effect::FetchDevices(lifetime) => Some(self.spawn(
                lifetime,
                |api| api.list(),
                |lifetime, result| match result {
                    Ok(devices) => Action::DevicesLoaded { lifetime, devices },
                    Err(error) => Action::DevicesFailed { lifetime, error },
                },
            )),
            Effect::FetchDevice(lifetime, id) => Some(self.spawn(
                lifetime,
                move |api| api.get(&id),
                |lifetime, result| match result {
                    Ok(device) => Action::DeviceLoaded { lifetime, device },
                    Err(error) => Action::DeviceLoadFailed { lifetime, error },
                },
            )),
            Effect::CreateDevice(lifetime, input) => Some(self.spawn(
                lifetime,
                move |api| api.create(&input),
                saved,
            )),
            Effect::UpdateDevice(lifetime, id, input) => Some(self.spawn(
                lifetime,
                move |api| api.update(&id, &input),
                saved,
            )),
            Effect::DeleteDevice(lifetime, id) => {
                let target = id.clone();
                Some(self.spawn(
                    lifetime,
                    move |api| api.delete(&target),
                    move |lifetime, result| match result {
                        Ok(()) => Action::DeviceDeleted { lifetime, id },
                        Err(error) => Action::DeleteFailed { lifetime, error },
                    },
                ))
            }
            Effect::SaveTheme(theme) => {
                self.save_theme(theme);
                None
            }
        }
    }
}

fn saved(lifetime: LifetimeId, result: ApiResult<Device>) -> Action {
    match result {
        Ok(device) => Action::DeviceSaved { lifetime, device },
        Err(error) => Action::SaveFailed { lifetime, error },
    }
}

impl EffectHandler for ApiWorker {
    fn handle(&self, effect: Effect) {
        log::debug!("handling effect: {effect:?}");
        // request threads are detached, results arrive over the channel
        let _ = self.run(effect);
    }
}

#[cfg(test)]
#[path = "./worker_tests.rs"]
mod tests;
