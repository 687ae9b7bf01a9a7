use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use codee::{string::FromToStringCodec, Decoder, Encoder};
use leptos::leptos_dom::helpers::set_timeout_with_handle;
use leptos::prelude::window;
use web_sys::Storage;

use super::{Scheduler, SessionStore, StorageError, Task, TaskHandle};

/// `window.sessionStorage`, looked up on every access.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

fn session_storage() -> Result<Storage, StorageError> {
    window()
        .session_storage()
        .map_err(|e| StorageError::Access(format!("{e:?}")))?
        .ok_or(StorageError::Unavailable)
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Result<Option<bool>, StorageError> {
        let raw = session_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Access(format!("{e:?}")))?;
        raw.map(|raw| {
            <FromToStringCodec as Decoder<bool>>::decode(&raw)
                .map_err(|_| StorageError::Decode(raw.clone()))
        })
        .transpose()
    }

    fn set(&self, key: &str, value: bool) -> Result<(), StorageError> {
        let raw = <FromToStringCodec as Encoder<bool>>::encode(&value)
            .map_err(|_| StorageError::Encode)?;
        session_storage()?
            .set_item(key, &raw)
            .map_err(|e| StorageError::Access(format!("{e:?}")))
    }
}

/// Schedules tasks with `window.setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

fn take_task(slot: &Mutex<Option<Task>>) -> Option<Task> {
    slot.lock().unwrap_or_else(PoisonError::into_inner).take()
}

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TaskHandle {
        // kept reachable here in case arming the timer fails
        let slot = Arc::new(Mutex::new(Some(task)));
        let timer_slot = slot.clone();
        let armed = set_timeout_with_handle(
            move || {
                if let Some(task) = take_task(&timer_slot) {
                    task();
                }
            },
            delay,
        );
        match armed {
            Ok(handle) => TaskHandle::new(move || handle.clear()),
            Err(e) => {
                log::warn!("couldn't arm timer, running task now: {e:?}");
                if let Some(task) = take_task(&slot) {
                    task();
                }
                TaskHandle::noop()
            }
        }
    }
}
