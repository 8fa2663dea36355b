//! # Generic Actor Server
//!
//! The `ResourceActor` owns the records of one entity type and processes every
//! request for them sequentially inside a single tokio task.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This is the "server" half of an actor: it owns the store and the receiving
/// end of the channel. Requests are handled one at a time, so a
/// read-modify-write inside a hook can never interleave with another request
/// for the same entity type. No `Mutex` is needed around the store.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Ticket { id: u32 }
/// #[derive(Debug)] struct TicketCreate;
/// #[derive(Debug)] enum TicketAction {}
/// #[derive(Debug, thiserror::Error)] #[error("ticket error")] struct TicketError;
///
/// #[async_trait]
/// impl ActorEntity for Ticket {
///     type Id = u32;
///     type Create = TicketCreate;
///     type Update = ();
///     type Action = TicketAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = TicketError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, _: TicketCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
///     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, action: TicketAction, _: &()) -> Result<(), Self::Error> { match action {} }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Ticket>::new(10);
///     tokio::spawn(actor.run(()));
///     let ticket = client.create(TicketCreate).await.unwrap();
///     assert_eq!(ticket.id, 1);
/// }
/// ```
///
/// # Operations
///
/// * **Create**: picks the id (the entity's natural key, or the next counter
///   value), builds the entity, runs `on_create`, then stores it and returns it.
/// * **Get**: clone of the stored entity, or `None`.
/// * **List**: clones of every entity matching the query, in id order.
/// * **Update**: runs `on_update` on the stored entity and returns the new state.
/// * **Delete**: runs `on_delete`, then removes the entity.
/// * **Action**: runs `handle_action` on the stored entity.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the mailbox. When it is full, client
    /// calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// `context` is passed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Cart" instead of "foody_orders::model::cart::Cart")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = match T::natural_id(&params) {
                        Some(id) => {
                            if self.store.contains_key(&id) {
                                warn!(entity_type, %id, "Already exists");
                                let _ = respond_to
                                    .send(Err(FrameworkError::AlreadyExists(id.to_string())));
                                continue;
                            }
                            id
                        }
                        None => {
                            let id = T::Id::from(self.next_id);
                            self.next_id += 1;
                            id
                        }
                    };

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, %id, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { query, respond_to } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| query.matches(item))
                        .cloned()
                        .collect();
                    debug!(entity_type, query = query.label(), count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        // Work on a copy so a failed hook leaves the stored entity untouched
                        let mut candidate = item.clone();
                        if let Err(e) = candidate.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        *item = candidate;
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let mut candidate = item.clone();
                        let result = candidate
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => {
                                *item = candidate;
                                info!(entity_type, %id, "Action ok")
                            }
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
