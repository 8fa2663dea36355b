//! # Generic Messages
//!
//! The messages exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use std::fmt::{self, Debug};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A labelled predicate used to select entities in a `List` request.
///
/// The label is what shows up in logs, since closures have no useful `Debug`.
pub struct Query<T> {
    label: &'static str,
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Query<T> {
    pub fn new(label: &'static str, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self {
            label,
            predicate: Box::new(predicate),
        }
    }

    /// Matches every entity.
    pub fn all() -> Self {
        Self::new("all", |_| true)
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn matches(&self, item: &T) -> bool {
        (self.predicate)(item)
    }
}

impl<T> Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Query({})", self.label)
    }
}

/// Internal message type sent to the actor to request operations.
///
/// The variants are the CRUD lifecycle of a resource, a filtered `List`, and a
/// custom `Action` for resource-specific logic that doesn't fit CRUD. Every
/// payload type comes from the [`ActorEntity`] associated types, so a cart
/// payload can never reach the order actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        query: Query<T>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
