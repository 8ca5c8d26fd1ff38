//! A headless driver for the admin dashboard.
//!
//! [`Dashboard`] talks to a running server through [`ApiClient`], keeps the
//! fetched collections in a [`DashboardState`] and renders tabs as HTML
//! through the templates compiled into a [`Renderer`]. Fetch failures are
//! recorded in the state and surfaced as banners or inline error rows.

use std::{
    collections::HashSet,
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use futures::future::join_all;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::{
    sync::{watch, RwLock},
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, error, info, instrument, warn};

pub mod client;
pub mod render;
pub mod state;
pub mod tabs;

pub use client::{ApiClient, ClientError, CreateReceipt, FormData, DEFAULT_BASE_URL};
pub use render::{Renderer, SelectField, TabView};
pub use state::{Banner, BannerKind, DashboardState, FormPanel, LoadStatus, ResourceState};
pub use tabs::Tab;

use crate::{resource::Resource, views::DashboardStats};

/// Period of the background stats refresh
pub const STATS_REFRESH_PERIOD: Duration = Duration::from_secs(30);

pub const STATS_LOAD_FAILED: &str =
    "Failed to load dashboard statistics. Make sure the server is running.";

/// Collections fetched on startup; attendance has no tab.
const DASHBOARD_RESOURCES: [Resource; 9] = [
    Resource::Suppliers,
    Resource::Stores,
    Resource::Products,
    Resource::Employees,
    Resource::Customers,
    Resource::Orders,
    Resource::Sales,
    Resource::Payments,
    Resource::Positions,
];

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("A {0} submission is already in progress")]
    SubmissionInProgress(Resource),

    #[error("{0} cannot be {1} from the dashboard")]
    Unsupported(Resource, &'static str),

    #[error("Failed to render dashboard markup: {0}")]
    Render(#[from] tera::Error),
}

/// Asks the operator to approve a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
}

/// Marks one form as submitting until dropped
struct InFlight {
    forms: Arc<Mutex<HashSet<Resource>>>,
    resource: Resource,
}

impl InFlight {
    fn acquire(forms: &Arc<Mutex<HashSet<Resource>>>, resource: Resource) -> Option<Self> {
        let inserted = forms
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(resource);
        inserted.then(|| Self {
            forms: forms.clone(),
            resource,
        })
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.forms
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.resource);
    }
}

#[derive(Clone)]
pub struct Dashboard {
    client: ApiClient,
    renderer: Arc<Renderer>,
    state: Arc<RwLock<DashboardState>>,
    in_flight: Arc<Mutex<HashSet<Resource>>>,
    stats_tx: Arc<watch::Sender<Option<DashboardStats>>>,
}

impl Dashboard {
    pub fn new(client: ApiClient) -> Result<Self, DashboardError> {
        Ok(Self::with_renderer(client, Renderer::new()?))
    }

    pub fn with_renderer(client: ApiClient, renderer: Renderer) -> Self {
        let (stats_tx, _) = watch::channel(None);
        Self {
            client,
            renderer: Arc::new(renderer),
            state: Arc::new(RwLock::new(DashboardState::default())),
            in_flight: Arc::new(Mutex::new(HashSet::new())),
            stats_tx: Arc::new(stats_tx),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Runs `f` against the current state
    pub async fn snapshot<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        let state = self.state.read().await;
        f(&state)
    }

    /// Receives every successfully loaded set of stats
    pub fn subscribe_stats(&self) -> watch::Receiver<Option<DashboardStats>> {
        self.stats_tx.subscribe()
    }

    #[instrument(skip(self))]
    pub async fn load_stats(&self) -> Result<DashboardStats, ClientError> {
        match self.client.stats().await {
            Ok(stats) => {
                self.state.write().await.stats = Some(stats.clone());
                self.stats_tx.send_replace(Some(stats.clone()));
                Ok(stats)
            }
            Err(err) => {
                error!(error = %err, "Error loading dashboard stats");
                self.state
                    .write()
                    .await
                    .show_banner(BannerKind::Error, STATS_LOAD_FAILED);
                Err(err)
            }
        }
    }

    /// Re-fetches one collection into its holder
    #[instrument(skip(self))]
    pub async fn load(&self, resource: Resource) -> Result<(), ClientError> {
        let result = match resource {
            Resource::Suppliers => self.fetch(resource, |s, items| s.suppliers.replace(items)).await,
            Resource::Stores => self.fetch(resource, |s, items| s.stores.replace(items)).await,
            Resource::Products => self.fetch(resource, |s, items| s.products.replace(items)).await,
            Resource::Employees => self.fetch(resource, |s, items| s.employees.replace(items)).await,
            Resource::Positions => self.fetch(resource, |s, items| s.positions.replace(items)).await,
            Resource::Customers => self.fetch(resource, |s, items| s.customers.replace(items)).await,
            Resource::Orders => self.fetch(resource, |s, items| s.orders.replace(items)).await,
            Resource::Sales => self.fetch(resource, |s, items| s.sales.replace(items)).await,
            Resource::Payments => self.fetch(resource, |s, items| s.payments.replace(items)).await,
            Resource::Attendance => {
                debug!("Attendance is not shown on the dashboard");
                return Ok(());
            }
        };

        if let Err(err) = &result {
            warn!(%resource, error = %err, "Failed to load collection");
            self.state.write().await.fail(resource, err.to_string());
        }
        result
    }

    async fn fetch<T, F>(&self, resource: Resource, apply: F) -> Result<(), ClientError>
    where
        T: DeserializeOwned,
        F: FnOnce(&mut DashboardState, Vec<T>),
    {
        let items = self.client.list::<T>(resource).await?;
        debug!(%resource, count = items.len(), "Collection loaded");
        apply(&mut *self.state.write().await, items);
        Ok(())
    }

    /// Initial page load: stats plus every collection, concurrently
    pub async fn load_all(&self) {
        let loads = join_all(DASHBOARD_RESOURCES.iter().map(|&resource| self.load(resource)));
        let (results, _) = tokio::join!(loads, self.load_stats());
        let failed = results.iter().filter(|result| result.is_err()).count();
        if failed > 0 {
            warn!(failed, "Some collections failed to load");
        }
    }

    /// Activates `tab`, re-fetches its collection and renders it together
    /// with any selects fed by sibling collections
    #[instrument(skip(self))]
    pub async fn show_tab(&self, tab: Tab) -> Result<TabView, DashboardError> {
        self.state.write().await.active_tab = tab;
        // a failure is recorded on the holder and rendered as an error row
        let _ = self.load(tab.resource()).await;
        let state = self.state.read().await;
        Ok(self.renderer.tab_view(&state, tab)?)
    }

    /// Headline cards for the last loaded stats
    pub async fn render_stats(&self) -> Result<String, DashboardError> {
        let state = self.state.read().await;
        Ok(self.renderer.stats_cards(state.stats.as_ref())?)
    }

    /// The banner, or nothing once it has expired
    pub async fn render_banner(&self) -> Result<String, DashboardError> {
        let state = self.state.read().await;
        Ok(self.renderer.banner(state.visible_banner(std::time::Instant::now()))?)
    }

    pub async fn toggle_form(&self, resource: Resource) -> bool {
        let mut state = self.state.write().await;
        let form = state.form_mut(resource);
        form.toggle();
        form.open
    }

    /// Submits an add form. A second submission of the same form while the
    /// first is pending is rejected without a request.
    #[instrument(skip(self, form))]
    pub async fn submit_form(
        &self,
        resource: Resource,
        form: FormData,
    ) -> Result<CreateReceipt, DashboardError> {
        if !resource.supports_create() {
            return Err(DashboardError::Unsupported(resource, "created"));
        }
        let _in_flight = InFlight::acquire(&self.in_flight, resource)
            .ok_or(DashboardError::SubmissionInProgress(resource))?;

        self.state.write().await.form_mut(resource).values = form.clone();

        match self.client.create(resource, &form).await {
            Ok(receipt) => {
                {
                    let mut state = self.state.write().await;
                    state.show_banner(
                        BannerKind::Success,
                        format!("{} added successfully!", resource.label()),
                    );
                    state.form_mut(resource).reset();
                }
                info!(%resource, id = ?receipt.id, "Record added");
                self.refresh_after_write(resource).await;
                Ok(receipt)
            }
            Err(err) => {
                error!(%resource, error = %err, "Failed to add record");
                self.state.write().await.show_banner(
                    BannerKind::Error,
                    format!("Failed to add {}", resource.singular()),
                );
                Err(err.into())
            }
        }
    }

    /// Deletes a record once `confirm` approves; declining sends nothing
    #[instrument(skip(self, confirm))]
    pub async fn delete(
        &self,
        resource: Resource,
        id: i64,
        confirm: &impl Confirm,
    ) -> Result<DeleteOutcome, DashboardError> {
        if !resource.supports_delete() {
            return Err(DashboardError::Unsupported(resource, "deleted"));
        }
        let prompt = format!("Are you sure you want to delete this {}?", resource.singular());
        if !confirm.confirm(&prompt) {
            debug!(%resource, id, "Delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        match self.client.delete(resource, id).await {
            Ok(_) => {
                self.state.write().await.show_banner(
                    BannerKind::Success,
                    format!("{} deleted successfully!", resource.label()),
                );
                info!(%resource, id, "Record deleted");
                self.refresh_after_write(resource).await;
                Ok(DeleteOutcome::Deleted)
            }
            Err(err) => {
                error!(%resource, id, error = %err, "Failed to delete record");
                self.state.write().await.show_banner(
                    BannerKind::Error,
                    format!("Failed to delete {}", resource.singular()),
                );
                Err(err.into())
            }
        }
    }

    async fn refresh_after_write(&self, resource: Resource) {
        // failures land in the state; the write itself already succeeded
        let _ = tokio::join!(self.load(resource), self.load_stats());
    }

    /// Re-fetches stats every `period` until the handle is aborted; the first
    /// refresh happens one period from now
    pub fn spawn_stats_refresh(&self, period: Duration) -> JoinHandle<()> {
        let dashboard = self.clone();
        tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if dashboard.load_stats().await.is_err() {
                    debug!("Scheduled stats refresh failed");
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_flight_guard_releases_on_drop() {
        let forms = Arc::new(Mutex::new(HashSet::new()));
        let first = InFlight::acquire(&forms, Resource::Stores);
        assert!(first.is_some());
        assert!(InFlight::acquire(&forms, Resource::Stores).is_none());
        assert!(InFlight::acquire(&forms, Resource::Products).is_some());

        drop(first);
        assert!(InFlight::acquire(&forms, Resource::Stores).is_some());
    }

    #[test]
    fn closures_confirm() {
        let yes = |_: &str| true;
        let no = |prompt: &str| prompt.is_empty();
        assert!(yes.confirm("Are you sure?"));
        assert!(!no.confirm("Are you sure?"));
    }
}
