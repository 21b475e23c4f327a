use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use clientele::api::{
    AddressDraft, AddressFilter, AddressPatch, CustomerApi, CustomerDraft, CustomerPatch,
};
use clientele::config::AppConfig;
use clientele::envelope::Envelope;
use clientele::error::{Result, StoreError};
use clientele::query::{PageRequest, SortDir, SortField};
use clientele::store::fs::FileStore;

mod args;
mod print;

use args::{AddressCommands, Cli, Commands, PageArgs, SortArgs};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

struct AppContext {
    api: CustomerApi<FileStore>,
    config: AppConfig,
    data_dir: PathBuf,
    json: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    let ok = match cli.command.unwrap_or(Commands::List {
        page: PageArgs {
            page: 0,
            size: None,
        },
        sort: SortArgs {
            sort: "lastName".into(),
            dir: "asc".into(),
        },
    }) {
        Commands::List { page, sort } => handle_list(&mut ctx, page, sort)?,
        Commands::Get { id } => handle_get(&mut ctx, id)?,
        Commands::Create {
            first_name,
            last_name,
            email,
            phone,
        } => handle_create(&mut ctx, first_name, last_name, email, phone)?,
        Commands::Update {
            id,
            first_name,
            last_name,
            email,
            phone,
        } => handle_update(&mut ctx, id, first_name, last_name, email, phone)?,
        Commands::Delete { id } => handle_delete(&mut ctx, id)?,
        Commands::Search { term, page, sort } => handle_search(&mut ctx, term, page, sort)?,
        Commands::Find {
            city,
            state,
            pincode,
            page,
            sort,
        } => handle_find(&mut ctx, city, state, pincode, page, sort)?,
        Commands::Addresses { customer_id } => handle_addresses(&mut ctx, customer_id)?,
        Commands::Address(command) => handle_address(&mut ctx, command)?,
        Commands::Config { key, value } => handle_config(&mut ctx, key, value)?,
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = AppConfig::load(&data_dir)?;

    let mut api = CustomerApi::new(FileStore::new(data_dir.clone()));
    if config.latency_ms > 0 {
        api = api.with_latency(Duration::from_millis(config.latency_ms));
    }

    Ok(AppContext {
        api,
        config,
        data_dir,
        json: cli.json,
    })
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Ok(home) = std::env::var("CLIENTELE_HOME") {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("", "", "clientele")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| StoreError::Store("Could not determine a data directory".to_string()))
}

fn parse_sort(sort: &SortArgs) -> Result<(SortField, SortDir)> {
    Ok((sort.sort.parse()?, sort.dir.parse()?))
}

fn page_request(ctx: &AppContext, page: PageArgs) -> PageRequest {
    PageRequest::new(page.page, page.size.unwrap_or(ctx.config.page_size))
}

/// Emit an envelope and report whether it was a success. Failures print to
/// stderr (or as JSON) and flip the exit code, never a panic.
fn emit<T: Serialize>(
    ctx: &AppContext,
    envelope: &Envelope<T>,
    render: impl FnOnce(&T),
) -> bool {
    if ctx.json {
        print::print_json(envelope);
        return envelope.success;
    }
    match &envelope.data {
        Some(data) if envelope.success => render(data),
        _ => print::print_failure(envelope),
    }
    envelope.success
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<bool> {
    match (key, value) {
        (None, _) => {
            println!("page_size = {}", ctx.config.page_size);
            println!("latency_ms = {}", ctx.config.latency_ms);
        }
        (Some(key), None) => match key.as_str() {
            "page_size" | "pageSize" => println!("{}", ctx.config.page_size),
            "latency_ms" | "latencyMs" => println!("{}", ctx.config.latency_ms),
            other => return Err(StoreError::Store(format!("Unknown config key: {}", other))),
        },
        (Some(key), Some(value)) => {
            match key.as_str() {
                "page_size" | "pageSize" => {
                    ctx.config.page_size = value
                        .parse()
                        .map_err(|_| StoreError::Store(format!("Invalid page_size: {}", value)))?;
                }
                "latency_ms" | "latencyMs" => {
                    ctx.config.latency_ms = value
                        .parse()
                        .map_err(|_| StoreError::Store(format!("Invalid latency_ms: {}", value)))?;
                }
                other => return Err(StoreError::Store(format!("Unknown config key: {}", other))),
            }
            ctx.config.save(&ctx.data_dir)?;
            print::print_success(&format!("Config updated: {}", key));
        }
    }
    Ok(true)
}

fn handle_list(ctx: &mut AppContext, page: PageArgs, sort: SortArgs) -> Result<bool> {
    let (field, dir) = parse_sort(&sort)?;
    let req = page_request(ctx, page);
    let envelope = ctx.api.list(req, field, dir);
    Ok(emit(ctx, &envelope, print::print_customer_page))
}

fn handle_get(ctx: &mut AppContext, id: u64) -> Result<bool> {
    let envelope = ctx.api.get(id);
    Ok(emit(ctx, &envelope, print::print_customer))
}

fn handle_create(
    ctx: &mut AppContext,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
) -> Result<bool> {
    let envelope = ctx.api.create(CustomerDraft {
        first_name,
        last_name,
        email,
        phone,
        addresses: Vec::new(),
    });
    Ok(emit(ctx, &envelope, |customer| {
        print::print_success(&format!(
            "Customer created ({}): {}",
            customer.id,
            customer.full_name()
        ));
    }))
}

fn handle_update(
    ctx: &mut AppContext,
    id: u64,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
) -> Result<bool> {
    let envelope = ctx.api.update(CustomerPatch {
        id,
        first_name,
        last_name,
        email,
        phone,
        addresses: None,
    });
    Ok(emit(ctx, &envelope, |customer| {
        print::print_success(&format!(
            "Customer updated ({}): {}",
            customer.id,
            customer.full_name()
        ));
    }))
}

fn handle_delete(ctx: &mut AppContext, id: u64) -> Result<bool> {
    let envelope = ctx.api.delete(id);
    Ok(emit(ctx, &envelope, |customer| {
        print::print_success(&format!(
            "Customer deleted ({}): {}",
            customer.id,
            customer.full_name()
        ));
    }))
}

fn handle_search(
    ctx: &mut AppContext,
    term: Option<String>,
    page: PageArgs,
    sort: SortArgs,
) -> Result<bool> {
    let (field, dir) = parse_sort(&sort)?;
    let req = page_request(ctx, page);
    let envelope = ctx.api.search(term.as_deref().unwrap_or(""), req, field, dir);
    Ok(emit(ctx, &envelope, print::print_customer_page))
}

fn handle_find(
    ctx: &mut AppContext,
    city: Option<String>,
    state: Option<String>,
    pincode: Option<String>,
    page: PageArgs,
    sort: SortArgs,
) -> Result<bool> {
    let (field, dir) = parse_sort(&sort)?;
    let req = page_request(ctx, page);
    let filter = AddressFilter {
        city,
        state,
        pincode,
    };
    let envelope = ctx.api.search_by_address(&filter, req, field, dir);
    Ok(emit(ctx, &envelope, print::print_customer_page))
}

fn handle_addresses(ctx: &mut AppContext, customer_id: u64) -> Result<bool> {
    let envelope = ctx.api.addresses(customer_id);
    Ok(emit(ctx, &envelope, |addresses| {
        print::print_addresses(addresses);
    }))
}

fn handle_address(ctx: &mut AppContext, command: AddressCommands) -> Result<bool> {
    match command {
        AddressCommands::Get { id } => {
            let envelope = ctx.api.address(id);
            Ok(emit(ctx, &envelope, print::print_address))
        }
        AddressCommands::Add {
            customer_id,
            street,
            street2,
            city,
            state,
            pincode,
            country,
        } => {
            let envelope = ctx.api.add_address(
                customer_id,
                AddressDraft {
                    street,
                    street2,
                    city,
                    state,
                    pincode,
                    country,
                },
            );
            Ok(emit(ctx, &envelope, |address| {
                print::print_success(&format!("Address added ({})", address.id));
            }))
        }
        AddressCommands::Update {
            id,
            street,
            street2,
            city,
            state,
            pincode,
            country,
        } => {
            let envelope = ctx.api.update_address(
                id,
                AddressPatch {
                    street,
                    street2,
                    city,
                    state,
                    pincode,
                    country,
                },
            );
            Ok(emit(ctx, &envelope, |address| {
                print::print_success(&format!("Address updated ({})", address.id));
            }))
        }
        AddressCommands::Delete { id } => {
            let envelope = ctx.api.delete_address(id);
            if ctx.json {
                print::print_json(&envelope);
            } else if envelope.success {
                print::print_success(&format!("Address deleted ({})", id));
            } else {
                print::print_failure(&envelope);
            }
            Ok(envelope.success)
        }
    }
}
