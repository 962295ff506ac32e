//! Dispatch from parsed arguments to the API, and from `CmdResult` to the
//! terminal.

use super::render::{print_result, render_text_list};
use super::setup::{Cli, Commands};
use chrono::{Local, NaiveDate};
use clap::Parser;
use pill::api::{self, ConfigAction, PillApi};
use pill::config::PillConfig;
use pill::error::Result;
use pill::init::{initialize, PillContext};
use pill::logging;
use pill::store::fs::FileStore;
use std::path::PathBuf;
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = init_context(&cli)?;

    // config and init work without restoring the inventory
    match cli.command {
        Some(Commands::Config { key, value }) => return handle_config(&ctx, key, value),
        Some(Commands::Init) => return handle_init(&ctx),
        _ => {}
    }

    let mut api = ctx.open_api()?;
    let today = Local::now().date_naive();

    match cli.command {
        Some(Commands::Add {
            name,
            quantity,
            expiry,
        }) => handle_add(&mut api, &name, quantity, expiry),
        Some(Commands::Delete { name, expiry }) => handle_delete(&mut api, &name, expiry),
        Some(Commands::Edit {
            name,
            quantity,
            expiry,
        }) => handle_edit(&mut api, &name, quantity, expiry),
        Some(Commands::Use { name, quantity }) => handle_use(&mut api, &name, quantity),
        Some(Commands::Find { term }) => handle_find(&api, &term),
        Some(Commands::Expired) => handle_expired(&api, today),
        Some(Commands::Expiring { date }) => handle_expiring(&api, date, today),
        Some(Commands::Restock { threshold }) => {
            handle_restock(&api, threshold.unwrap_or(ctx.config.restock_threshold))
        }
        Some(Commands::Transactions) => handle_transactions(&api),
        Some(Commands::List) | Some(Commands::Config { .. }) | Some(Commands::Init) | None => {
            handle_list(&api)
        }
    }
}

fn init_context(cli: &Cli) -> Result<PillContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let ctx = initialize(&cwd, cli.global)?;
    debug!(scope = ?ctx.scope, cwd = %cwd.display(), "context ready");
    Ok(ctx)
}

fn handle_add(
    api: &mut PillApi<FileStore>,
    name: &str,
    quantity: i64,
    expiry: Option<NaiveDate>,
) -> Result<()> {
    let result = api.add_item(name, quantity, expiry)?;
    print_result(&result);
    Ok(())
}

fn handle_delete(
    api: &mut PillApi<FileStore>,
    name: &str,
    expiry: Option<NaiveDate>,
) -> Result<()> {
    let result = api.delete_item(name, expiry)?;
    print_result(&result);
    Ok(())
}

fn handle_edit(
    api: &mut PillApi<FileStore>,
    name: &str,
    quantity: i64,
    expiry: Option<NaiveDate>,
) -> Result<()> {
    let result = api.edit_item(name, quantity, expiry)?;
    print_result(&result);
    Ok(())
}

fn handle_use(api: &mut PillApi<FileStore>, name: &str, quantity: i64) -> Result<()> {
    let result = api.use_item(name, quantity)?;
    print_result(&result);
    Ok(())
}

fn handle_list(api: &PillApi<FileStore>) -> Result<()> {
    let result = api.list_items()?;
    print_result(&result);
    Ok(())
}

fn handle_find(api: &PillApi<FileStore>, term: &str) -> Result<()> {
    let result = api.find_items(term)?;
    print_result(&result);
    Ok(())
}

fn handle_expired(api: &PillApi<FileStore>, today: NaiveDate) -> Result<()> {
    let result = api.expired_items(today)?;
    print_result(&result);
    Ok(())
}

fn handle_expiring(api: &PillApi<FileStore>, cutoff: NaiveDate, today: NaiveDate) -> Result<()> {
    let result = api.expiring_items(cutoff, today)?;
    print_result(&result);
    Ok(())
}

fn handle_restock(api: &PillApi<FileStore>, threshold: i64) -> Result<()> {
    let result = api.restock_items(threshold)?;
    print_result(&result);
    Ok(())
}

fn handle_transactions(api: &PillApi<FileStore>) -> Result<()> {
    let result = api.transactions()?;
    print_result(&result);
    Ok(())
}

fn handle_config(ctx: &PillContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = api::config(&ctx.paths, ctx.scope, action)?;
    if show_all {
        if let Some(config) = &result.config {
            let lines: Vec<String> = PillConfig::keys()
                .iter()
                .filter_map(|k| config.get(k).map(|v| format!("{} = {}", k, v)))
                .collect();
            print!("{}", render_text_list(&lines, "No configuration values."));
        }
    }
    print_result(&result);
    Ok(())
}

fn handle_init(ctx: &PillContext) -> Result<()> {
    let result = api::init(&ctx.paths, ctx.scope)?;
    print_result(&result);
    Ok(())
}
