use std::{
    io::{self, BufRead, Write},
    time::Duration,
};

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use supermarket_admin::{
    config,
    dashboard::{
        ApiClient, Dashboard, DeleteOutcome, FormData, Tab, DEFAULT_BASE_URL,
        STATS_REFRESH_PERIOD,
    },
    resource::Resource,
    views::DashboardStats,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    config::init_tracing(if cli.verbose { "debug" } else { "warn" }, false);

    let client = ApiClient::new(&cli.base_url).context("failed to build HTTP client")?;
    let dashboard = Dashboard::new(client).context("failed to compile dashboard templates")?;

    match cli.command {
        Commands::Stats => handle_stats(&dashboard, cli.json).await?,
        Commands::List(args) => handle_list(&dashboard, args, cli.json).await?,
        Commands::Render(args) => handle_render(&dashboard, args, cli.json).await?,
        Commands::Add(args) => handle_add(&dashboard, args, cli.json).await?,
        Commands::Delete(args) => handle_delete(&dashboard, args, cli.json).await?,
        Commands::Watch(args) => handle_watch(&dashboard, args, cli.json).await?,
    }

    Ok(())
}

#[derive(Parser)]
#[command(
    name = "supermarket-dashboard",
    about = "Command-line driver for the supermarket admin dashboard",
    version
)]
struct Cli {
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_BASE_URL,
        help = "Base URL of the running supermarket-admin server"
    )]
    base_url: String,
    #[arg(
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Render command output as pretty JSON when available"
    )]
    json: bool,
    #[arg(
        long,
        short,
        global = true,
        action = ArgAction::SetTrue,
        help = "Log requests and responses"
    )]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the headline dashboard figures
    Stats,
    /// List the records of one collection
    List(ListArgs),
    /// Render a dashboard tab as HTML
    Render(RenderArgs),
    /// Add a record from key=value fields
    Add(AddArgs),
    /// Delete a record by id
    Delete(DeleteArgs),
    /// Print the stats whenever the periodic refresh completes
    Watch(WatchArgs),
}

#[derive(Args)]
struct ListArgs {
    #[arg(help = "Collection name, e.g. suppliers or attendance")]
    resource: Resource,
}

#[derive(Args)]
struct RenderArgs {
    #[arg(help = "Tab name, e.g. products")]
    tab: Tab,
}

#[derive(Args)]
struct AddArgs {
    #[arg(help = "Collection to add to")]
    resource: Resource,
    #[arg(value_parser = parse_field, help = "Fields as key=value, e.g. storeName=Main")]
    fields: Vec<(String, String)>,
}

#[derive(Args)]
struct DeleteArgs {
    resource: Resource,
    id: i64,
    #[arg(long, action = ArgAction::SetTrue, help = "Skip the confirmation prompt")]
    yes: bool,
}

#[derive(Args)]
struct WatchArgs {
    #[arg(
        long,
        default_value_t = STATS_REFRESH_PERIOD.as_secs(),
        help = "Seconds between stats refreshes"
    )]
    interval_secs: u64,
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected key=value, got `{raw}`")),
    }
}

async fn handle_stats(dashboard: &Dashboard, json: bool) -> Result<()> {
    let stats = dashboard
        .load_stats()
        .await
        .context("failed to load dashboard statistics")?;
    if json {
        print_json(&stats)?;
    } else {
        print_stats(&stats);
    }
    Ok(())
}

async fn handle_list(dashboard: &Dashboard, args: ListArgs, json: bool) -> Result<()> {
    let rows: Vec<Value> = dashboard
        .client()
        .list(args.resource)
        .await
        .with_context(|| format!("failed to fetch {}", args.resource))?;

    if json {
        print_json(&rows)?;
    } else if rows.is_empty() {
        println!("No {} found", args.resource);
    } else {
        println!("{} ({} total):", args.resource, rows.len());
        for row in &rows {
            println!("- {}", serde_json::to_string(row)?);
        }
    }
    Ok(())
}

async fn handle_render(dashboard: &Dashboard, args: RenderArgs, json: bool) -> Result<()> {
    // sibling collections feed the form selects
    dashboard.load_all().await;
    let view = dashboard
        .show_tab(args.tab)
        .await
        .with_context(|| format!("failed to render the {} tab", args.tab))?;
    let stats = dashboard.render_stats().await?;
    let banner = dashboard.render_banner().await?;

    if json {
        let selects: serde_json::Map<String, Value> = view
            .selects
            .iter()
            .map(|(field, html)| (field.element_id().to_string(), Value::from(html.as_str())))
            .collect();
        print_json(&serde_json::json!({
            "tab": view.tab.to_string(),
            "stats": stats,
            "banner": banner,
            "body": view.body,
            "selects": selects,
        }))?;
    } else {
        if !banner.is_empty() {
            println!("{banner}");
        }
        println!("{stats}");
        println!("<tbody id=\"{}TableBody\">{}</tbody>", view.tab, view.body);
        for (field, html) in &view.selects {
            println!(
                "<select id=\"{}\" name=\"{}\">{}</select>",
                field.element_id(),
                field.field_name(),
                html
            );
        }
    }
    Ok(())
}

async fn handle_add(dashboard: &Dashboard, args: AddArgs, json: bool) -> Result<()> {
    let form: FormData = args.fields.into_iter().collect();
    let submitted = dashboard.submit_form(args.resource, form).await;
    let banner = current_banner(dashboard).await;
    let receipt = submitted.with_context(|| banner.clone().unwrap_or_default())?;

    if json {
        print_json(&serde_json::json!({
            "id": receipt.id,
            "message": receipt.message,
        }))?;
    } else {
        println!("{}", banner.unwrap_or_default());
        if let Some(id) = receipt.id {
            println!("{} = {}", args.resource.id_field(), id);
        }
    }
    Ok(())
}

async fn handle_delete(dashboard: &Dashboard, args: DeleteArgs, json: bool) -> Result<()> {
    let confirm = |prompt: &str| args.yes || prompt_yes_no(prompt);
    let outcome = dashboard.delete(args.resource, args.id, &confirm).await;
    let banner = current_banner(dashboard).await;
    let outcome = outcome.with_context(|| banner.clone().unwrap_or_default())?;

    match (outcome, json) {
        (DeleteOutcome::Declined, true) => print_json(&serde_json::json!({"deleted": false}))?,
        (DeleteOutcome::Declined, false) => println!("Cancelled"),
        (DeleteOutcome::Deleted, true) => print_json(&serde_json::json!({
            "deleted": true,
            "message": banner,
        }))?,
        (DeleteOutcome::Deleted, false) => println!("{}", banner.unwrap_or_default()),
    }
    Ok(())
}

async fn handle_watch(dashboard: &Dashboard, args: WatchArgs, json: bool) -> Result<()> {
    if args.interval_secs == 0 {
        return Err(anyhow!("--interval-secs must be at least 1"));
    }
    let mut updates = dashboard.subscribe_stats();

    // show something straight away; the refresh task waits a full period
    if let Ok(stats) = dashboard.load_stats().await {
        print_update(&stats, json)?;
    } else if let Some(banner) = current_banner(dashboard).await {
        eprintln!("{banner}");
    }
    let _ = updates.borrow_and_update();

    let refresh = dashboard.spawn_stats_refresh(Duration::from_secs(args.interval_secs));
    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let latest = updates.borrow_and_update().clone();
                if let Some(stats) = latest {
                    print_update(&stats, json)?;
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }
    refresh.abort();
    Ok(())
}

async fn current_banner(dashboard: &Dashboard) -> Option<String> {
    dashboard
        .snapshot(|state| state.banner.as_ref().map(|banner| banner.text.clone()))
        .await
}

fn prompt_yes_no(prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}

fn print_update(stats: &DashboardStats, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(stats)?);
    } else {
        println!("[{}]", chrono::Local::now().format("%H:%M:%S"));
        print_stats(stats);
    }
    Ok(())
}

fn print_stats(stats: &DashboardStats) {
    println!("Suppliers:      {}", stats.suppliers);
    println!("Stores:         {}", stats.stores);
    println!("Products:       {}", stats.products);
    println!("Employees:      {}", stats.employees);
    println!("Customers:      {}", stats.customers);
    println!("Orders:         {}", stats.orders);
    println!("Revenue:        GHS {:.2}", stats.total_revenue);
    println!("Sales (7 days): {}", stats.recent_sales);
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_field_splits_on_first_equals() {
        assert_eq!(
            parse_field("storeName=Main"),
            Ok(("storeName".to_string(), "Main".to_string()))
        );
        assert_eq!(
            parse_field(" location =Accra=North"),
            Ok(("location".to_string(), "Accra=North".to_string()))
        );
    }

    #[test]
    fn parse_field_keeps_empty_values() {
        assert_eq!(
            parse_field("middleName="),
            Ok(("middleName".to_string(), String::new()))
        );
    }

    #[test]
    fn parse_field_rejects_missing_key() {
        assert!(parse_field("=Main").is_err());
        assert!(parse_field("storeName").is_err());
    }

    #[test]
    fn cli_parses_add_fields() {
        let cli = Cli::try_parse_from([
            "supermarket-dashboard",
            "add",
            "stores",
            "storeName=Main",
            "storeNumber=1",
        ])
        .unwrap();
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.resource, Resource::Stores);
                assert_eq!(args.fields.len(), 2);
            }
            _ => panic!("expected the add command"),
        }
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
    }
}
