//! In-memory host services for unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use side_config_sdk::{
    CollectorRequest, ConfigStoreClient, ConfigStoreError, ConfirmationPrompt, ModalHost,
    ModalOutcome, Notifier,
};

use crate::domain::collector::Collector;
use crate::domain::ports::HostServices;

/// Config store backed by a map, with injectable failures.
#[derive(Default)]
pub struct MockStore {
    data: Mutex<HashMap<String, Value>>,
    get_error: Mutex<Option<ConfigStoreError>>,
    put_error: Mutex<Option<ConfigStoreError>>,
    puts: Mutex<Vec<(String, Value)>>,
    gets: Mutex<usize>,
}

impl MockStore {
    pub fn with(key: &str, value: Value) -> Self {
        let store = Self::default();
        store.data.lock().insert(key.to_owned(), value);
        store
    }

    /// Overwrite a stored value without going through `put`.
    pub fn put_raw(&self, key: &str, value: Value) {
        self.data.lock().insert(key.to_owned(), value);
    }

    pub fn fail_gets(&self, error: ConfigStoreError) {
        *self.get_error.lock() = Some(error);
    }

    pub fn fail_puts(&self, error: ConfigStoreError) {
        *self.put_error.lock() = Some(error);
    }

    pub fn stored(&self, key: &str) -> Option<Value> {
        self.data.lock().get(key).cloned()
    }

    pub fn puts(&self) -> Vec<(String, Value)> {
        self.puts.lock().clone()
    }

    pub fn get_count(&self) -> usize {
        *self.gets.lock()
    }
}

#[async_trait]
impl ConfigStoreClient for MockStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, ConfigStoreError> {
        *self.gets.lock() += 1;
        if let Some(e) = self.get_error.lock().clone() {
            return Err(e);
        }
        Ok(self.data.lock().get(key).cloned())
    }

    async fn put(&self, key: &str, value: Value) -> Result<(), ConfigStoreError> {
        self.puts.lock().push((key.to_owned(), value.clone()));
        if let Some(e) = self.put_error.lock().clone() {
            return Err(e);
        }
        self.data.lock().insert(key.to_owned(), value);
        Ok(())
    }
}

/// What the operator does with the next modal form.
pub enum ModalStep {
    /// Type into the inputs and press confirm; dismisses if confirm is disabled.
    Fill {
        value: String,
        confirmation: String,
    },
    Dismiss,
}

impl ModalStep {
    pub fn secret(value: &str) -> Self {
        Self::Fill {
            value: value.to_owned(),
            confirmation: value.to_owned(),
        }
    }

    pub fn mismatched(value: &str, confirmation: &str) -> Self {
        Self::Fill {
            value: value.to_owned(),
            confirmation: confirmation.to_owned(),
        }
    }

    pub fn text(value: &str) -> Self {
        Self::secret(value)
    }
}

/// Modal host that drives the real collector forms from a script.
#[derive(Default)]
pub struct ScriptedModal {
    steps: Mutex<VecDeque<ModalStep>>,
    requests: Mutex<Vec<CollectorRequest>>,
}

impl ScriptedModal {
    pub fn new(steps: impl IntoIterator<Item = ModalStep>) -> Self {
        Self {
            steps: Mutex::new(steps.into_iter().collect()),
            requests: Mutex::default(),
        }
    }

    pub fn requests(&self) -> Vec<CollectorRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl ModalHost for ScriptedModal {
    async fn open(&self, request: CollectorRequest) -> ModalOutcome {
        let mut collector = Collector::for_request(&request);
        self.requests.lock().push(request);

        let Some(ModalStep::Fill {
            value,
            confirmation,
        }) = self.steps.lock().pop_front()
        else {
            return ModalOutcome::Dismissed;
        };

        match &mut collector {
            Collector::Secret(c) => {
                c.set_value(value);
                c.set_confirmation(confirmation);
            }
            Collector::Text(c) => c.set_value(value),
        }

        collector.submit().unwrap_or(ModalOutcome::Dismissed)
    }
}

/// Confirmation prompt answering from a script; answers `false` when exhausted.
#[derive(Default)]
pub struct ScriptedConfirm {
    answers: Mutex<VecDeque<bool>>,
    prompts: Mutex<Vec<(String, String)>>,
}

impl ScriptedConfirm {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            prompts: Mutex::default(),
        }
    }

    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl ConfirmationPrompt for ScriptedConfirm {
    async fn confirm(&self, title: &str, message: &str) -> bool {
        self.prompts
            .lock()
            .push((title.to_owned(), message.to_owned()));
        self.answers.lock().pop_front().unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.notices.lock().push(Notice::Success(message.to_owned()));
    }

    fn error(&self, message: &str) {
        self.notices.lock().push(Notice::Error(message.to_owned()));
    }
}

/// Host services plus typed handles to each mock.
pub struct TestHost {
    pub store: Arc<MockStore>,
    pub modal: Arc<ScriptedModal>,
    pub confirm: Arc<ScriptedConfirm>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestHost {
    pub fn new(store: MockStore) -> Self {
        Self {
            store: Arc::new(store),
            modal: Arc::new(ScriptedModal::default()),
            confirm: Arc::new(ScriptedConfirm::default()),
            notifier: Arc::new(RecordingNotifier::default()),
        }
    }

    #[must_use]
    pub fn with_modal(mut self, steps: impl IntoIterator<Item = ModalStep>) -> Self {
        self.modal = Arc::new(ScriptedModal::new(steps));
        self
    }

    #[must_use]
    pub fn with_answers(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.confirm = Arc::new(ScriptedConfirm::new(answers));
        self
    }

    pub fn services(&self) -> HostServices {
        HostServices {
            store: self.store.clone(),
            modal: self.modal.clone(),
            confirm: self.confirm.clone(),
            notifier: self.notifier.clone(),
        }
    }
}
