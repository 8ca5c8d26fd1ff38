//! Client-side view state: one holder per collection, the stats, the form
//! panels and the message banner.

use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use super::{client::FormData, tabs::Tab};
use crate::{
    entities::{customer, position, store, supplier},
    resource::Resource,
    views::{DashboardStats, EmployeeView, OrderView, PaymentView, ProductView, SaleView},
};

/// How long a banner stays visible after it is shown
pub const BANNER_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

/// The last fetched copy of one collection.
#[derive(Debug, Clone)]
pub struct ResourceState<T> {
    items: Vec<T>,
    status: LoadStatus,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            status: LoadStatus::Loading,
        }
    }
}

impl<T> ResourceState<T> {
    /// Swaps in a freshly fetched collection
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.status = LoadStatus::Loaded;
    }

    /// Marks the last fetch as failed; previously fetched items are kept for
    /// the form selects that depend on them
    pub fn fail(&mut self, reason: impl Into<String>) {
        self.status = LoadStatus::Failed(reason.into());
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, LoadStatus::Failed(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn css_class(self) -> &'static str {
        match self {
            BannerKind::Success => "success-message",
            BannerKind::Error => "error-message",
        }
    }
}

/// A transient message shown above the tabs
#[derive(Debug, Clone)]
pub struct Banner {
    pub text: String,
    pub kind: BannerKind,
    pub shown_at: Instant,
}

impl Banner {
    pub fn new(kind: BannerKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            shown_at: Instant::now(),
        }
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < BANNER_TTL
    }
}

/// An add-record form: whether it is expanded and what has been typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPanel {
    pub open: bool,
    pub values: FormData,
}

impl FormPanel {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Clears the fields and collapses the panel
    pub fn reset(&mut self) {
        self.values.clear();
        self.open = false;
    }
}

#[derive(Debug, Default)]
pub struct DashboardState {
    pub suppliers: ResourceState<supplier::Model>,
    pub stores: ResourceState<store::Model>,
    pub products: ResourceState<ProductView>,
    pub employees: ResourceState<EmployeeView>,
    pub positions: ResourceState<position::Model>,
    pub customers: ResourceState<customer::Model>,
    pub orders: ResourceState<OrderView>,
    pub sales: ResourceState<SaleView>,
    pub payments: ResourceState<PaymentView>,
    pub stats: Option<DashboardStats>,
    pub forms: HashMap<Resource, FormPanel>,
    pub active_tab: Tab,
    pub banner: Option<Banner>,
}

impl DashboardState {
    pub fn form(&self, resource: Resource) -> Option<&FormPanel> {
        self.forms.get(&resource)
    }

    pub fn form_mut(&mut self, resource: Resource) -> &mut FormPanel {
        self.forms.entry(resource).or_default()
    }

    /// Replaces any banner currently shown
    pub fn show_banner(&mut self, kind: BannerKind, text: impl Into<String>) {
        self.banner = Some(Banner::new(kind, text));
    }

    pub fn visible_banner(&self, now: Instant) -> Option<&Banner> {
        self.banner
            .as_ref()
            .filter(|banner| banner.is_visible_at(now))
    }

    /// Records a failed fetch on the holder for `resource`
    pub fn fail(&mut self, resource: Resource, reason: impl Into<String>) {
        let reason = reason.into();
        match resource {
            Resource::Suppliers => self.suppliers.fail(reason),
            Resource::Stores => self.stores.fail(reason),
            Resource::Products => self.products.fail(reason),
            Resource::Employees => self.employees.fail(reason),
            Resource::Positions => self.positions.fail(reason),
            Resource::Customers => self.customers.fail(reason),
            Resource::Orders => self.orders.fail(reason),
            Resource::Sales => self.sales.fail(reason),
            Resource::Payments => self.payments.fail(reason),
            Resource::Attendance => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_then_fail_keeps_items() {
        let mut holder = ResourceState::default();
        assert_eq!(holder.status(), &LoadStatus::Loading);

        holder.replace(vec![1, 2, 3]);
        assert_eq!(holder.items(), &[1, 2, 3]);
        assert_eq!(holder.status(), &LoadStatus::Loaded);

        holder.fail("timeout");
        assert!(holder.is_failed());
        assert_eq!(holder.items().len(), 3);

        holder.replace(vec![]);
        assert!(!holder.is_failed());
        assert!(holder.items().is_empty());
    }

    #[test]
    fn banner_expires_after_ttl() {
        let banner = Banner::new(BannerKind::Success, "Store added successfully!");
        assert!(banner.is_visible_at(banner.shown_at));
        assert!(banner.is_visible_at(banner.shown_at + Duration::from_millis(4999)));
        assert!(!banner.is_visible_at(banner.shown_at + BANNER_TTL));
    }

    #[test]
    fn newer_banner_replaces_older() {
        let mut state = DashboardState::default();
        state.show_banner(BannerKind::Error, "Failed to add store");
        state.show_banner(BannerKind::Success, "Store added successfully!");
        let banner = state.visible_banner(Instant::now()).unwrap();
        assert_eq!(banner.kind, BannerKind::Success);
        assert_eq!(banner.text, "Store added successfully!");
    }

    #[test]
    fn form_reset_collapses_panel() {
        let mut state = DashboardState::default();
        let form = state.form_mut(Resource::Stores);
        form.toggle();
        form.values.insert("storeName".into(), "Main".into());

        state.form_mut(Resource::Stores).reset();
        let form = state.form(Resource::Stores).unwrap();
        assert!(!form.open);
        assert!(form.values.is_empty());
    }
}
