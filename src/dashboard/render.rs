//! HTML fragments for the dashboard page.
//!
//! Cell text is formatted here and handed to the Tera templates under
//! `templates/`, which own the markup and escape every interpolated value.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Serialize;
use tera::{Context, Tera};

use super::{
    state::{Banner, DashboardState, LoadStatus, ResourceState},
    tabs::Tab,
};
use crate::{
    entities::{customer, position, store, supplier},
    resource::Resource,
    views::{DashboardStats, EmployeeView, OrderView, PaymentView, ProductView, SaleView},
};

const NOT_AVAILABLE: &str = "N/A";

const TABLE_BODY: &str = "table_body.html.tera";
const SELECT_OPTIONS: &str = "select_options.html.tera";
const STATS_CARDS: &str = "stats_cards.html.tera";
const BANNER: &str = "banner.html.tera";

/// `GHS 12.50`; a missing amount renders as zero
pub fn money(amount: Option<Decimal>) -> String {
    format!("GHS {:.2}", amount.unwrap_or_default().round_dp(2))
}

pub fn yes_no(flag: Option<bool>) -> &'static str {
    if flag.unwrap_or(false) {
        "Yes"
    } else {
        "No"
    }
}

/// The value, or `N/A` when missing or blank
pub fn or_na(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// First, middle and last name joined, skipping the missing parts
pub fn full_name(first: &Option<String>, middle: &Option<String>, last: &Option<String>) -> String {
    [first, middle, last]
        .into_iter()
        .filter_map(|part| part.as_deref().map(str::trim))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn date(value: Option<NaiveDate>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn time(value: Option<NaiveTime>) -> String {
    value
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[derive(Serialize)]
struct Notice {
    class: &'static str,
    message: String,
}

#[derive(Serialize)]
struct DeleteAction {
    resource: &'static str,
    id: i32,
}

#[derive(Serialize)]
struct Row {
    cells: Vec<String>,
    delete: Option<DeleteAction>,
}

impl Row {
    fn new(cells: Vec<String>) -> Self {
        Self { cells, delete: None }
    }

    fn deletable(cells: Vec<String>, resource: Resource, id: i32) -> Self {
        Self {
            cells,
            delete: Some(DeleteAction {
                resource: resource.path(),
                id,
            }),
        }
    }
}

#[derive(Serialize)]
struct SelectOption {
    id: i32,
    label: String,
}

#[derive(Serialize)]
struct StatCard {
    id: &'static str,
    label: &'static str,
    value: String,
}

#[derive(Serialize)]
struct BannerContext<'a> {
    class: &'static str,
    text: &'a str,
}

/// The `<select>` elements in the add forms that list sibling records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectField {
    ProductStore,
    ProductSupplier,
    EmployeeStore,
    EmployeePosition,
    OrderProduct,
}

impl SelectField {
    pub fn for_tab(tab: Tab) -> &'static [SelectField] {
        match tab {
            Tab::Products => &[SelectField::ProductStore, SelectField::ProductSupplier],
            Tab::Employees => &[SelectField::EmployeeStore, SelectField::EmployeePosition],
            Tab::Orders => &[SelectField::OrderProduct],
            _ => &[],
        }
    }

    pub fn element_id(self) -> &'static str {
        match self {
            SelectField::ProductStore => "productStoreSelect",
            SelectField::ProductSupplier => "productSupplierSelect",
            SelectField::EmployeeStore => "employeeStoreSelect",
            SelectField::EmployeePosition => "employeePositionSelect",
            SelectField::OrderProduct => "orderProductSelect",
        }
    }

    /// Form field the selected id is submitted under
    pub fn field_name(self) -> &'static str {
        match self {
            SelectField::ProductStore | SelectField::EmployeeStore => "storeID",
            SelectField::ProductSupplier => "supplierID",
            SelectField::EmployeePosition => "positionID",
            SelectField::OrderProduct => "productID",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            SelectField::ProductStore | SelectField::EmployeeStore => "Select Store",
            SelectField::ProductSupplier => "Select Supplier",
            SelectField::EmployeePosition => "Select Position",
            SelectField::OrderProduct => "Select Product",
        }
    }
}

/// Rendered content of one tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub tab: Tab,
    pub body: String,
    pub selects: Vec<(SelectField, String)>,
}

/// Compiled dashboard templates.
#[derive(Debug, Clone)]
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (TABLE_BODY, include_str!("../../templates/table_body.html.tera")),
            (SELECT_OPTIONS, include_str!("../../templates/select_options.html.tera")),
            (STATS_CARDS, include_str!("../../templates/stats_cards.html.tera")),
            (BANNER, include_str!("../../templates/banner.html.tera")),
        ])?;
        tera.autoescape_on(vec![".html.tera"]);
        Ok(Self { tera })
    }

    fn table_body<T>(
        &self,
        holder: &ResourceState<T>,
        tab: Tab,
        to_row: impl Fn(&T) -> Row,
    ) -> Result<String, tera::Error> {
        let noun = tab.resource().path();
        let notice = match holder.status() {
            LoadStatus::Failed(_) => Some(Notice {
                class: "error-message",
                message: format!("Failed to load {noun}"),
            }),
            LoadStatus::Loading => Some(Notice {
                class: "loading",
                message: format!("Loading {noun}..."),
            }),
            LoadStatus::Loaded if holder.items().is_empty() => Some(Notice {
                class: "empty-state",
                message: format!("No {noun} found"),
            }),
            LoadStatus::Loaded => None,
        };
        let rows: Vec<Row> = match notice {
            Some(_) => Vec::new(),
            None => holder.items().iter().map(to_row).collect(),
        };

        let mut ctx = Context::new();
        ctx.insert("columns", &tab.column_count());
        ctx.insert("notice", &notice);
        ctx.insert("rows", &rows);
        self.tera.render(TABLE_BODY, &ctx)
    }

    pub fn suppliers_table(&self, suppliers: &ResourceState<supplier::Model>) -> Result<String, tera::Error> {
        self.table_body(suppliers, Tab::Suppliers, |s| {
            Row::deletable(
                vec![
                    s.supplier_id.to_string(),
                    full_name(&s.first_name, &s.middle_name, &s.last_name),
                    text(&s.phone_number),
                    text(&s.email),
                    text(&s.address),
                ],
                Resource::Suppliers,
                s.supplier_id,
            )
        })
    }

    pub fn stores_table(&self, stores: &ResourceState<store::Model>) -> Result<String, tera::Error> {
        self.table_body(stores, Tab::Stores, |s| {
            Row::deletable(
                vec![
                    s.store_id.to_string(),
                    text(&s.store_name),
                    text(&s.store_number),
                    text(&s.location),
                ],
                Resource::Stores,
                s.store_id,
            )
        })
    }

    pub fn products_table(&self, products: &ResourceState<ProductView>) -> Result<String, tera::Error> {
        self.table_body(products, Tab::Products, |p| {
            let supplier = match (&p.supplier_first_name, &p.supplier_last_name) {
                (None, None) => NOT_AVAILABLE.to_string(),
                (first, last) => full_name(first, &None, last),
            };
            Row::deletable(
                vec![
                    p.product_id.to_string(),
                    text(&p.product_name),
                    money(p.cost),
                    text(&p.quality),
                    or_na(p.store_name.as_deref()),
                    supplier,
                ],
                Resource::Products,
                p.product_id,
            )
        })
    }

    pub fn employees_table(&self, employees: &ResourceState<EmployeeView>) -> Result<String, tera::Error> {
        self.table_body(employees, Tab::Employees, |e| {
            Row::deletable(
                vec![
                    e.employee_id.to_string(),
                    full_name(&e.first_name, &e.middle_name, &e.last_name),
                    text(&e.phonenumber),
                    text(&e.email),
                    or_na(e.position_name.as_deref()),
                    or_na(e.store_name.as_deref()),
                    money(e.salary),
                ],
                Resource::Employees,
                e.employee_id,
            )
        })
    }

    pub fn customers_table(&self, customers: &ResourceState<customer::Model>) -> Result<String, tera::Error> {
        self.table_body(customers, Tab::Customers, |c| {
            Row::deletable(
                vec![
                    c.customer_id.to_string(),
                    full_name(&c.first_name, &c.middle_name, &c.last_name),
                    text(&c.phonenumber),
                    text(&c.email),
                    text(&c.address),
                ],
                Resource::Customers,
                c.customer_id,
            )
        })
    }

    pub fn orders_table(&self, orders: &ResourceState<OrderView>) -> Result<String, tera::Error> {
        self.table_body(orders, Tab::Orders, |o| {
            Row::deletable(
                vec![
                    o.order_id.to_string(),
                    date(o.order_date),
                    or_na(o.product_name.as_deref()),
                    money(o.amount),
                ],
                Resource::Orders,
                o.order_id,
            )
        })
    }

    pub fn sales_table(&self, sales: &ResourceState<SaleView>) -> Result<String, tera::Error> {
        self.table_body(sales, Tab::Sales, |s| {
            Row::new(vec![
                s.sale_id.to_string(),
                date(s.date),
                time(s.time),
                s.invoice_number
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                money(s.total_amount),
                or_na(s.customer_name.as_deref()),
            ])
        })
    }

    pub fn payments_table(&self, payments: &ResourceState<PaymentView>) -> Result<String, tera::Error> {
        self.table_body(payments, Tab::Payments, |p| {
            Row::new(vec![
                p.payment_id.to_string(),
                date(p.payment_date),
                money(p.amount),
                time(p.time),
                or_na(p.method.as_deref()),
                yes_no(p.cash).to_string(),
                yes_no(p.momo).to_string(),
                yes_no(p.bank).to_string(),
            ])
        })
    }

    pub fn table_for(&self, state: &DashboardState, tab: Tab) -> Result<String, tera::Error> {
        match tab {
            Tab::Suppliers => self.suppliers_table(&state.suppliers),
            Tab::Stores => self.stores_table(&state.stores),
            Tab::Products => self.products_table(&state.products),
            Tab::Employees => self.employees_table(&state.employees),
            Tab::Customers => self.customers_table(&state.customers),
            Tab::Orders => self.orders_table(&state.orders),
            Tab::Sales => self.sales_table(&state.sales),
            Tab::Payments => self.payments_table(&state.payments),
        }
    }

    /// Placeholder option followed by one option per already-fetched sibling record
    pub fn select_options(&self, state: &DashboardState, field: SelectField) -> Result<String, tera::Error> {
        let options: Vec<SelectOption> = match field {
            SelectField::ProductStore | SelectField::EmployeeStore => state
                .stores
                .items()
                .iter()
                .map(|s| SelectOption {
                    id: s.store_id,
                    label: text(&s.store_name),
                })
                .collect(),
            SelectField::ProductSupplier => state
                .suppliers
                .items()
                .iter()
                .map(|s| SelectOption {
                    id: s.supplier_id,
                    label: full_name(&s.first_name, &None, &s.last_name),
                })
                .collect(),
            SelectField::EmployeePosition => state
                .positions
                .items()
                .iter()
                .map(|p: &position::Model| SelectOption {
                    id: p.position_id,
                    label: text(&p.name),
                })
                .collect(),
            SelectField::OrderProduct => state
                .products
                .items()
                .iter()
                .map(|p| SelectOption {
                    id: p.product_id,
                    label: text(&p.product_name),
                })
                .collect(),
        };

        let mut ctx = Context::new();
        ctx.insert("placeholder", field.placeholder());
        ctx.insert("options", &options);
        self.tera.render(SELECT_OPTIONS, &ctx)
    }

    pub fn tab_view(&self, state: &DashboardState, tab: Tab) -> Result<TabView, tera::Error> {
        let selects = SelectField::for_tab(tab)
            .iter()
            .map(|&field| Ok((field, self.select_options(state, field)?)))
            .collect::<Result<Vec<_>, tera::Error>>()?;
        Ok(TabView {
            tab,
            body: self.table_for(state, tab)?,
            selects,
        })
    }

    /// The eight headline cards; zeros until the first successful load
    pub fn stats_cards(&self, stats: Option<&DashboardStats>) -> Result<String, tera::Error> {
        let stats = stats.cloned().unwrap_or_default();
        let card = |id, label, value: String| StatCard { id, label, value };
        let cards = [
            card("totalSuppliers", "Suppliers", stats.suppliers.to_string()),
            card("totalStores", "Stores", stats.stores.to_string()),
            card("totalProducts", "Products", stats.products.to_string()),
            card("totalEmployees", "Employees", stats.employees.to_string()),
            card("totalCustomers", "Customers", stats.customers.to_string()),
            card("totalOrders", "Orders", stats.orders.to_string()),
            card("totalRevenue", "Revenue (GHS)", format!("{:.2}", stats.total_revenue)),
            card("recentSales", "Sales (7 days)", stats.recent_sales.to_string()),
        ];

        let mut ctx = Context::new();
        ctx.insert("cards", &cards);
        self.tera.render(STATS_CARDS, &ctx)
    }

    pub fn banner(&self, banner: Option<&Banner>) -> Result<String, tera::Error> {
        let banner = banner.map(|b| BannerContext {
            class: b.kind.css_class(),
            text: &b.text,
        });
        let mut ctx = Context::new();
        ctx.insert("banner", &banner);
        self.tera.render(BANNER, &ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::state::BannerKind;

    fn renderer() -> Renderer {
        Renderer::new().expect("templates compile")
    }

    fn store(id: i32, name: &str) -> store::Model {
        store::Model {
            store_id: id,
            store_name: Some(name.to_string()),
            store_number: Some("1".into()),
            location: Some("Accra".into()),
        }
    }

    #[test]
    fn money_has_two_decimals() {
        assert_eq!(money(Some(Decimal::new(255, 1))), "GHS 25.50");
        assert_eq!(money(Some(Decimal::new(1, 0))), "GHS 1.00");
        assert_eq!(money(None), "GHS 0.00");
    }

    #[test]
    fn empty_collection_renders_empty_state_row() {
        let mut holder = ResourceState::default();
        holder.replace(Vec::new());
        let html = renderer().stores_table(&holder).unwrap();
        assert_eq!(
            html,
            r#"<tr><td colspan="5" class="empty-state">No stores found</td></tr>"#
        );
    }

    #[test]
    fn failed_load_renders_error_row() {
        let mut holder: ResourceState<PaymentView> = ResourceState::default();
        holder.fail("connection refused");
        let html = renderer().payments_table(&holder).unwrap();
        assert_eq!(
            html,
            r#"<tr><td colspan="8" class="error-message">Failed to load payments</td></tr>"#
        );
    }

    #[test]
    fn store_rows_escape_values_and_carry_delete_button() {
        let mut holder = ResourceState::default();
        holder.replace(vec![store(3, "<Main> & Sons")]);
        let html = renderer().stores_table(&holder).unwrap();
        assert!(html.starts_with("<tr><td>3</td><td>&lt;Main&gt; &amp; Sons</td>"));
        assert!(html.contains(r#"data-resource="stores" data-id="3""#));
        assert!(html.ends_with("</td></tr>"));
        assert_eq!(html.matches("<tr>").count(), 1);
        assert_eq!(html.matches("<td>").count(), Tab::Stores.column_count());
    }

    #[test]
    fn rows_are_concatenated_without_whitespace() {
        let mut holder = ResourceState::default();
        holder.replace(vec![store(1, "Main"), store(2, "Osu")]);
        let html = renderer().stores_table(&holder).unwrap();
        assert!(html.contains("</tr><tr><td>2</td>"));
        assert!(!html.contains('\n'));
    }

    #[test]
    fn product_row_falls_back_to_na() {
        let mut holder = ResourceState::default();
        holder.replace(vec![ProductView {
            product_id: 1,
            product_name: Some("Milo".into()),
            cost: Some(Decimal::new(1000, 2)),
            description: None,
            quality: Some("A".into()),
            store_id: None,
            supplier_id: None,
            store_name: None,
            supplier_first_name: None,
            supplier_last_name: None,
        }]);
        let html = renderer().products_table(&holder).unwrap();
        assert!(html.contains("<td>GHS 10.00</td>"));
        assert_eq!(html.matches("<td>N/A</td>").count(), 2);
    }

    #[test]
    fn payment_flags_render_yes_no() {
        let mut holder = ResourceState::default();
        holder.replace(vec![PaymentView {
            payment_id: 9,
            payment_date: NaiveDate::from_ymd_opt(2024, 5, 1),
            amount: Some(Decimal::new(5000, 2)),
            time: None,
            method: Some("momo".into()),
            payment_method_id: Some(1),
            cash: Some(false),
            momo: Some(true),
            bank: None,
        }]);
        let html = renderer().payments_table(&holder).unwrap();
        assert_eq!(
            html,
            "<tr><td>9</td><td>2024-05-01</td><td>GHS 50.00</td><td>N/A</td><td>momo</td><td>No</td><td>Yes</td><td>No</td></tr>"
        );
        assert_eq!(html.matches("<td>").count(), Tab::Payments.column_count());
    }

    #[test]
    fn product_form_selects_lead_with_placeholder() {
        let mut state = DashboardState::default();
        state.stores.replace(vec![store(1, "Main"), store(2, "Osu")]);
        let view = renderer().tab_view(&state, Tab::Products).unwrap();
        assert_eq!(view.selects.len(), 2);

        let (field, html) = &view.selects[0];
        assert_eq!(*field, SelectField::ProductStore);
        assert!(html.starts_with(r#"<option value="">Select Store</option>"#));
        assert!(html.contains(r#"<option value="2">Osu</option>"#));

        let (_, suppliers) = &view.selects[1];
        assert_eq!(suppliers, r#"<option value="">Select Supplier</option>"#);
    }

    #[test]
    fn select_labels_are_escaped() {
        let mut state = DashboardState::default();
        state.stores.replace(vec![store(4, "A&B")]);
        let html = renderer()
            .select_options(&state, SelectField::EmployeeStore)
            .unwrap();
        assert!(html.ends_with(r#"<option value="4">A&amp;B</option>"#));
    }

    #[test]
    fn tabs_without_forms_have_no_selects() {
        let view = renderer().tab_view(&DashboardState::default(), Tab::Sales).unwrap();
        assert!(view.selects.is_empty());
        assert!(view.body.contains("Loading sales"));
    }

    #[test]
    fn stats_cards_format_revenue() {
        let stats = DashboardStats {
            total_revenue: 1234.5,
            orders: 4,
            ..Default::default()
        };
        let renderer = renderer();
        let html = renderer.stats_cards(Some(&stats)).unwrap();
        assert!(html.contains(r#"<h3 id="totalRevenue">1234.50</h3>"#));
        assert!(html.contains(r#"<h3 id="totalOrders">4</h3>"#));
        assert!(html.contains("<p>Revenue (GHS)</p>"));
        assert_eq!(html.matches(r#"class="stat-card""#).count(), 8);
        assert!(renderer
            .stats_cards(None)
            .unwrap()
            .contains(r#"<h3 id="totalRevenue">0.00</h3>"#));
    }

    #[test]
    fn banner_uses_kind_class() {
        let renderer = renderer();
        let banner = Banner::new(BannerKind::Error, "Failed to add store");
        assert_eq!(
            renderer.banner(Some(&banner)).unwrap(),
            r#"<div class="error-message">Failed to add store</div>"#
        );
        assert_eq!(renderer.banner(None).unwrap(), "");
    }
}
