//! # Mock Clients for Testing
//!
//! Two ways to test code that talks to an actor without spawning the real one.
//!
//! | | [`MockClient`] | [`create_mock_client`] |
//! |---|---|---|
//! | **Style** | queue replies up front, then call | receive each request, inspect it, reply |
//! | **Good for** | orchestration code calling several actors | asserting the exact payload a client sends |
//! | **Checks** | request kind and id, [`MockClient::verify`] | whatever the test asserts |
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, Query};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, PartialEq)] struct Dish { id: u32, name: String }
//! #[derive(Debug)] struct DishCreate { name: String }
//! #[derive(Debug)] enum DishAction {}
//! #[derive(Debug, thiserror::Error)] #[error("dish error")] struct DishError;
//!
//! #[async_trait]
//! impl ActorEntity for Dish {
//!     type Id = u32; type Create = DishCreate; type Update = (); type Action = DishAction;
//!     type ActionResult = (); type Context = (); type Error = DishError;
//!     fn id(&self) -> &u32 { &self.id }
//!     fn from_create_params(id: u32, p: DishCreate) -> Result<Self, Self::Error> { Ok(Self { id, name: p.name }) }
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, a: DishAction, _: &()) -> Result<(), Self::Error> { match a {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Dish>::new();
//!     mock.expect_get(7).return_ok(Some(Dish { id: 7, name: "Ramen".into() }));
//!     mock.expect_list().return_ok(vec![]);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(7).await.unwrap().unwrap().name, "Ramen");
//!     assert!(client.list(Query::all()).await.unwrap().is_empty());
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A queued reply, optionally pinned to the id the request must carry.
enum Expectation<T: ActorEntity> {
    Get {
        id: Option<T::Id>,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        id: Option<T::Id>,
        response: Result<T, FrameworkError>,
    },
    List {
        id: Option<T::Id>,
        response: Result<Vec<T>, FrameworkError>,
    },
    Update {
        id: Option<T::Id>,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: Option<T::Id>,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: Option<T::Id>,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

struct MockState<T: ActorEntity> {
    expectations: VecDeque<Expectation<T>>,
    failures: Vec<String>,
}

type SharedState<T> = Arc<Mutex<MockState<T>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests are answered in the order expectations were queued. A request that
/// does not match the next expectation is answered with an error and recorded;
/// [`MockClient::verify`] panics if anything was recorded or left unused.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    state: SharedState<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let state: SharedState<T> = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            failures: Vec::new(),
        }));
        let task_state = state.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&task_state).expectations.pop_front();
                answer(request, expectation, |failure| {
                    lock(&task_state).failures.push(failure)
                });
            }
        });

        Self {
            client: ResourceClient::new(sender),
            state,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Some(id), |id, response| Expectation::Get { id, response })
    }

    /// Expects a `create`.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(None, |id, response| Expectation::Create { id, response })
    }

    /// Expects a `list`, whatever the query.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(None, |id, response| Expectation::List { id, response })
    }

    /// Expects an `update` of `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(Some(id), |id, response| Expectation::Update { id, response })
    }

    /// Expects a `delete` of `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(Some(id), |id, response| Expectation::Delete { id, response })
    }

    /// Expects an action on `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(Some(id), |id, response| Expectation::Action { id, response })
    }

    /// Verifies that all expectations were met and no request was unexpected.
    pub fn verify(&self) {
        let state = lock(&self.state);
        if !state.failures.is_empty() {
            panic!("Unexpected requests: {}", state.failures.join("; "));
        }
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }

    fn builder<R>(
        &self,
        id: Option<T::Id>,
        wrap: fn(Option<T::Id>, Result<R, FrameworkError>) -> Expectation<T>,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            id,
            wrap,
            state: self.state.clone(),
        }
    }
}

/// Queues the reply for one expected request.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    id: Option<T::Id>,
    wrap: fn(Option<T::Id>, Result<R, FrameworkError>) -> Expectation<T>,
    state: SharedState<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.wrap)(self.id, response);
        lock(&self.state).expectations.push_back(expectation);
    }
}

fn lock<T: ActorEntity>(state: &SharedState<T>) -> std::sync::MutexGuard<'_, MockState<T>> {
    state.lock().expect("mock state poisoned")
}

fn id_mismatch<I: PartialEq + std::fmt::Display>(expected: &Option<I>, actual: &I) -> Option<String> {
    match expected {
        Some(expected) if expected != actual => Some(format!("expected id {expected}, got {actual}")),
        _ => None,
    }
}

/// Replies to `request` from `expectation`, recording any mismatch before the reply goes out.
fn answer<T: ActorEntity>(
    request: ResourceRequest<T>,
    expectation: Option<Expectation<T>>,
    record: impl Fn(String),
) {
    let unexpected = |what: &str| {
        record(format!("unexpected {what}"));
        FrameworkError::NotFound(format!("unexpected {what} request"))
    };
    let check = |want: &Option<T::Id>, id: &T::Id| {
        if let Some(failure) = id_mismatch(want, id) {
            record(failure);
        }
    };
    match (request, expectation) {
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response })) => {
            check(&want, &id);
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response, .. })) => {
            let _ = respond_to.send(response);
        }
        (ResourceRequest::List { respond_to, .. }, Some(Expectation::List { response, .. })) => {
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Update { id, respond_to, .. },
            Some(Expectation::Update { id: want, response }),
        ) => {
            check(&want, &id);
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Delete { id, respond_to }, Some(Expectation::Delete { id: want, response })) => {
            check(&want, &id);
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Action { id, respond_to, .. },
            Some(Expectation::Action { id: want, response }),
        ) => {
            check(&want, &id);
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Get { respond_to, .. }, _) => {
            let _ = respond_to.send(Err(unexpected("get")));
        }
        (ResourceRequest::Create { respond_to, .. }, _) => {
            let _ = respond_to.send(Err(unexpected("create")));
        }
        (ResourceRequest::List { respond_to, .. }, _) => {
            let _ = respond_to.send(Err(unexpected("list")));
        }
        (ResourceRequest::Update { respond_to, .. }, _) => {
            let _ = respond_to.send(Err(unexpected("update")));
        }
        (ResourceRequest::Delete { respond_to, .. }, _) => {
            let _ = respond_to.send(Err(unexpected("delete")));
        }
        (ResourceRequest::Action { respond_to, .. }, _) => {
            let _ = respond_to.send(Err(unexpected("action")));
        }
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver owned by the test.
///
/// The test plays the actor: it pulls each request with one of the `expect_*`
/// helpers below, asserts on the payload, and answers through the responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(crate::Query<T>, oneshot::Sender<Result<Vec<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
