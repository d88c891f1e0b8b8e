//! In-memory fakes for workflow tests.

use std::cell::RefCell;
use std::time::Duration;

use crate::net::api::{AccountApi, ApiError};
use crate::net::types::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, User};
use crate::state::toast::{Notifier, ToastId};

/// Account API returning canned results and recording every request.
pub struct FakeApi {
    pub register_result: Result<RegisterResponse, ApiError>,
    pub login_result: Result<LoginResponse, ApiError>,
    pub register_calls: RefCell<Vec<RegisterRequest>>,
    pub login_calls: RefCell<Vec<LoginRequest>>,
}

impl FakeApi {
    pub fn registering(result: Result<RegisterResponse, ApiError>) -> Self {
        Self { register_result: result, ..Self::default() }
    }

    pub fn logging_in(result: Result<LoginResponse, ApiError>) -> Self {
        Self { login_result: result, ..Self::default() }
    }
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            register_result: Err(ApiError::Unavailable),
            login_result: Err(ApiError::Unavailable),
            register_calls: RefCell::new(Vec::new()),
            login_calls: RefCell::new(Vec::new()),
        }
    }
}

impl AccountApi for FakeApi {
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.register_calls.borrow_mut().push(request.clone());
        self.register_result.clone()
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.login_calls.borrow_mut().push(request.clone());
        self.login_result.clone()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Note {
    Loading(ToastId, String),
    Success(Option<ToastId>, String),
    Error(Option<ToastId>, String),
    Info(String, Option<String>, Duration),
}

/// Notifier that records calls in order.
#[derive(Default)]
pub struct RecordingNotifier {
    pub notes: RefCell<Vec<Note>>,
}

impl RecordingNotifier {
    pub fn notes(&self) -> Vec<Note> {
        self.notes.borrow().clone()
    }

    /// Id handed out by the first `loading` call.
    pub fn first_loading_id(&self) -> Option<ToastId> {
        self.notes.borrow().iter().find_map(|n| match n {
            Note::Loading(id, _) => Some(*id),
            _ => None,
        })
    }
}

impl Notifier for RecordingNotifier {
    fn loading(&self, message: &str) -> ToastId {
        let id = ToastId::new();
        self.notes.borrow_mut().push(Note::Loading(id, message.to_owned()));
        id
    }

    fn success(&self, id: Option<ToastId>, message: &str) {
        self.notes.borrow_mut().push(Note::Success(id, message.to_owned()));
    }

    fn error(&self, id: Option<ToastId>, message: &str) {
        self.notes.borrow_mut().push(Note::Error(id, message.to_owned()));
    }

    fn info(&self, message: &str, icon: Option<&str>, duration: Duration) {
        self.notes
            .borrow_mut()
            .push(Note::Info(message.to_owned(), icon.map(str::to_owned), duration));
    }
}

pub fn user(role: &str) -> User {
    User {
        id: "u1".to_owned(),
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        role: role.to_owned(),
    }
}
