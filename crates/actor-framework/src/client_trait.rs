//! # ActorClient Trait
//!
//! Shared read/delete operations for resource-specific clients, built on top of
//! a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, Query, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard CRUD operations.
///
/// A domain client wraps a `ResourceClient<T>`, says how framework errors turn
/// into its own error type, and gets `get`, `fetch`, `list` and `delete` for free.
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Table { id: u32, seats: u8 }
/// #[derive(Debug)] struct TableCreate { seats: u8 }
/// #[derive(Debug)] enum TableAction {}
/// #[derive(Debug, thiserror::Error)]
/// enum TableError {
///     #[error("table not found: {0}")] NotFound(String),
///     #[error("{0}")] Other(String),
/// }
///
/// #[async_trait]
/// impl ActorEntity for Table {
///     type Id = u32; type Create = TableCreate; type Update = (); type Action = TableAction;
///     type ActionResult = (); type Context = (); type Error = TableError;
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, p: TableCreate) -> Result<Self, Self::Error> { Ok(Self { id, seats: p.seats }) }
///     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, a: TableAction, _: &()) -> Result<(), Self::Error> { match a {} }
/// }
///
/// struct TableClient { inner: ResourceClient<Table> }
///
/// #[async_trait]
/// impl ActorClient<Table> for TableClient {
///     type Error = TableError;
///     fn inner(&self) -> &ResourceClient<Table> { &self.inner }
///     fn map_error(e: FrameworkError) -> TableError {
///         match e {
///             FrameworkError::NotFound(id) => TableError::NotFound(id),
///             other => TableError::Other(other.to_string()),
///         }
///     }
/// }
///
/// async fn usage(client: TableClient) {
///     // get(), fetch(), list() and delete() are provided
///     let _ = client.fetch(1).await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID, `None` if it does not exist.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch an entity by ID, treating a missing entity as `NotFound`.
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        let missing = id.to_string();
        self.inner()
            .get(id)
            .await
            .map_err(Self::map_error)?
            .ok_or_else(|| Self::map_error(FrameworkError::NotFound(missing)))
    }

    /// All entities matching `query`, in creation order.
    #[tracing::instrument(skip(self))]
    async fn list(&self, query: Query<T>) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(query).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
