use devinv_lib::{
    device::{Device, DeviceCreateInput, DeviceUpdateInput},
    error::{DeviceApiError, FieldError, Result as ApiResult},
};
use std::{
    collections::HashSet,
    sync::{
        Mutex,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};
use tempfile::{TempDir, tempdir};

use crate::store::{
    StateGetter,
    state::{FormField, FormMode, FormStatus, ListStatus},
};

use super::*;

/// Device API backed by a vector. Ids come from a counter and are never
/// handed out twice, even after a delete.
#[derive(Default)]
struct InMemoryApi {
    devices: Mutex<Vec<Device>>,
    next_id: AtomicU64,
}

impl InMemoryApi {
    fn with(devices: Vec<Device>) -> Self {
        Self {
            devices: Mutex::new(devices),
            next_id: AtomicU64::new(0),
        }
    }

    fn not_found(id: &str) -> DeviceApiError {
        DeviceApiError::NotFound {
            message: format!("no device with id {id}"),
        }
    }

    fn validate(name: &str, manufacturer: &str) -> ApiResult<()> {
        let input = DeviceCreateInput::new(name, manufacturer);
        let fields: Vec<FieldError> = input
            .missing_fields()
            .into_iter()
            .map(|field| FieldError {
                field: field.to_string(),
                message: "field required".to_string(),
            })
            .collect();

        if fields.is_empty() {
            return Ok(());
        }

        Err(DeviceApiError::Validation {
            status: 422,
            message: "invalid input".to_string(),
            fields,
        })
    }
}

impl DeviceApi for InMemoryApi {
    fn list(&self) -> ApiResult<Vec<Device>> {
        Ok(self.devices.lock().unwrap().clone())
    }

    fn get(&self, id: &str) -> ApiResult<Device> {
        self.devices
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    fn create(&self, input: &DeviceCreateInput) -> ApiResult<Device> {
        Self::validate(&input.name, &input.manufacturer)?;
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let mut devices = self.devices.lock().unwrap();
        let device = Device {
            id: format!("dev{n}"),
            name: input.name.clone(),
            manufacturer: input.manufacturer.clone(),
            created_at: "2024-01-01T00:00:00".to_string(),
            updated_at: "2024-01-01T00:00:00".to_string(),
        };
        devices.push(device.clone());
        Ok(device)
    }

    fn update(&self, id: &str, input: &DeviceUpdateInput) -> ApiResult<Device> {
        Self::validate(&input.name, &input.manufacturer)?;
        let mut devices = self.devices.lock().unwrap();
        let device = devices
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        device.name = input.name.clone();
        device.manufacturer = input.manufacturer.clone();
        device.updated_at = "2024-01-02T00:00:00".to_string();
        Ok(device.clone())
    }

    fn delete(&self, id: &str) -> ApiResult<()> {
        let mut devices = self.devices.lock().unwrap();
        let before = devices.len();
        devices.retain(|d| d.id != id);
        if devices.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}

struct Setup {
    api: Arc<InMemoryApi>,
    store: Rc<Store>,
    rx: Receiver<Action>,
    _dir: TempDir,
}

fn setup(api: InMemoryApi) -> Setup {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    let config_manager = ConfigManager::builder()
        .path(path.to_str().unwrap())
        .build()
        .unwrap();

    let api = Arc::new(api);
    let (store, rx) =
        create_store(api.clone(), config_manager, "Inventory", true).unwrap();

    Setup {
        api,
        store,
        rx,
        _dir: dir,
    }
}

impl Setup {
    /// Dispatches worker results until `done` holds for the current state.
    fn settle(&self, done: impl Fn(&State) -> bool) {
        while !done(&self.store.get_state()) {
            let action = self
                .rx
                .recv_timeout(Duration::from_secs(5))
                .expect("timed out waiting for worker result");
            self.store.dispatch(action);
        }
    }

    fn type_into(&self, field: FormField, value: &str) {
        self.store
            .dispatch(Action::UpdateFormField(field, value.to_string()));
    }

    /// Creates a device through the form and waits for the list to reload.
    fn create_through_form(&self, name: &str, manufacturer: &str) {
        self.store.dispatch(Action::Navigate(Route::CreateDevice));
        self.type_into(FormField::Name, name);
        self.type_into(FormField::Manufacturer, manufacturer);
        self.store.dispatch(Action::SubmitForm);
        self.settle(|s| {
            s.route == Route::Devices && s.list.status == ListStatus::Loaded
        });
    }

    /// Confirms deletion of `device` and waits for the list to reload.
    fn delete_through_list(&self, device: Device) {
        let done = format!("deleted device {}", device.id);
        self.store.dispatch(Action::RequestDelete(device));
        self.store.dispatch(Action::ConfirmDelete);
        self.settle(|s| {
            s.message.as_deref() == Some(done.as_str())
                && s.list.status == ListStatus::Loaded
        });
    }
}

fn router() -> Device {
    Device {
        id: "abc123".to_string(),
        name: "Router".to_string(),
        manufacturer: "Acme".to_string(),
        created_at: "2024-01-01T00:00:00".to_string(),
        updated_at: "2024-01-01T00:00:00".to_string(),
    }
}

#[test]
fn root_route_lists_devices() {
    let test = setup(InMemoryApi::with(vec![router()]));

    test.store
        .dispatch(Action::Navigate(Route::parse("/").unwrap()));
    test.settle(|s| s.list.status != ListStatus::Loading);

    let state = test.store.get_state();
    assert_eq!(state.route, Route::Devices);
    assert_eq!(state.list.status, ListStatus::Loaded);
    assert_eq!(state.list.devices, vec![router()]);
}

#[test]
fn created_device_shows_up_in_list() {
    let test = setup(InMemoryApi::default());

    test.store.dispatch(Action::Navigate(Route::CreateDevice));
    test.type_into(FormField::Name, "Switch");
    test.type_into(FormField::Manufacturer, "Globex");
    test.store.dispatch(Action::SubmitForm);

    test.settle(|s| {
        s.route == Route::Devices && s.list.status == ListStatus::Loaded
    });

    let state = test.store.get_state();
    assert_eq!(state.list.devices.len(), 1);
    assert_eq!(state.list.devices[0].name, "Switch");
    assert_eq!(state.list.devices[0].manufacturer, "Globex");
    assert!(state.message.as_ref().unwrap().starts_with("saved Switch"));
}

#[test]
fn blank_fields_never_reach_the_api() {
    let test = setup(InMemoryApi::default());

    test.store.dispatch(Action::Navigate(Route::CreateDevice));
    test.type_into(FormField::Name, "Switch");
    test.store.dispatch(Action::SubmitForm);

    let state = test.store.get_state();
    assert_eq!(state.route, Route::CreateDevice);
    assert_eq!(state.form.status, FormStatus::Idle);
    assert_eq!(
        state.form.field_error(FormField::Manufacturer),
        Some("required".to_string())
    );
    assert!(test.rx.recv_timeout(Duration::from_millis(200)).is_err());
}

#[test]
fn edit_form_loads_and_saves_device() {
    let test = setup(InMemoryApi::with(vec![router()]));

    test.store
        .dispatch(Action::Navigate(Route::EditDevice("abc123".to_string())));
    test.settle(|s| s.form.status != FormStatus::Loading);

    let state = test.store.get_state();
    assert_eq!(state.form.mode, FormMode::Edit("abc123".to_string()));
    assert_eq!(state.form.value(FormField::Name), "Router");

    test.type_into(FormField::Manufacturer, "Acme Corp");
    test.store.dispatch(Action::SubmitForm);
    test.settle(|s| {
        s.route == Route::Devices && s.list.status == ListStatus::Loaded
    });

    let state = test.store.get_state();
    assert_eq!(state.list.devices.len(), 1);
    assert_eq!(state.list.devices[0].id, "abc123");
    assert_eq!(state.list.devices[0].manufacturer, "Acme Corp");

    let stored = test.api.get("abc123").unwrap();
    assert_eq!(stored.id, "abc123");
    assert_eq!(stored.name, "Router");
    assert_eq!(stored.manufacturer, "Acme Corp");
}

#[test]
fn editing_missing_device_returns_to_list() {
    let test = setup(InMemoryApi::with(vec![router()]));

    test.store
        .dispatch(Action::Navigate(Route::EditDevice("missing".to_string())));
    test.settle(|s| {
        s.route == Route::Devices && s.list.status == ListStatus::Loaded
    });

    let state = test.store.get_state();
    assert_eq!(
        state.message,
        Some("could not load device: not found".to_string())
    );
    assert_eq!(state.list.devices, vec![router()]);
}

#[test]
fn confirmed_delete_removes_device() {
    let test = setup(InMemoryApi::with(vec![router()]));

    test.store.dispatch(Action::Navigate(Route::Devices));
    test.settle(|s| s.list.status == ListStatus::Loaded);

    test.store.dispatch(Action::RequestDelete(router()));
    test.store.dispatch(Action::ConfirmDelete);
    test.settle(|s| {
        s.list.status == ListStatus::Loaded && s.list.devices.is_empty()
    });

    let state = test.store.get_state();
    assert_eq!(state.confirm_delete, None);
    assert_eq!(state.message, Some("deleted device abc123".to_string()));
}

#[test]
fn list_holds_survivors_after_creates_and_deletes() {
    let test = setup(InMemoryApi::default());

    for n in 1..=4 {
        test.create_through_form(&format!("Switch {n}"), "Globex");
    }

    let created = test.store.get_state().list.devices.clone();
    assert_eq!(created.len(), 4);

    test.delete_through_list(created[0].clone());
    test.delete_through_list(created[2].clone());

    // ids freed by the deletes are not handed out again
    test.create_through_form("Switch 5", "Globex");

    let state = test.store.get_state();
    let ids: HashSet<&str> =
        state.list.devices.iter().map(|d| d.id.as_str()).collect();
    let expected: HashSet<&str> = [
        created[1].id.as_str(),
        created[3].id.as_str(),
        "dev5",
    ]
    .into_iter()
    .collect();

    assert_eq!(state.list.devices.len(), 3);
    assert_eq!(ids, expected);
}
