use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use lunchvote::auth::SharedSecret;
use lunchvote::catalog::Catalog;
use lunchvote::config::LunchConfig;
use lunchvote::controllers::admin::{self, AdminGate};
use lunchvote::controllers::voting::{self, DEFAULT_BOARD_SIZE};
use lunchvote::error::{LunchError, Result};
use lunchvote::store::fs::{read_table, CsvStore};
use std::path::PathBuf;

mod args;
mod cli;

use args::{AdminAction, Cli, Commands};
use cli::print;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    catalog: Catalog<CsvStore>,
    auth: SharedSecret,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Recommend) => handle_recommend(&ctx),
        Some(Commands::Board { count }) => handle_board(&ctx, count),
        Some(Commands::Vote { position }) => handle_vote(&mut ctx, position),
        Some(Commands::Results) => handle_results(&ctx),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Admin { password, action }) => handle_admin(&mut ctx, password, action),
        None => handle_page(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = match ProjectDirs::from("com", "lunchvote", "lunchvote") {
        Some(dirs) => LunchConfig::load(dirs.config_dir()).unwrap_or_default(),
        None => LunchConfig::default(),
    };

    let db_path = cli
        .db
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.db_file));
    let catalog = Catalog::open(CsvStore::new(db_path))?;
    let auth = SharedSecret::new(config.admin_password);

    Ok(AppContext { catalog, auth })
}

fn handle_recommend(ctx: &AppContext) -> Result<()> {
    let rec = voting::recommend(&ctx.catalog);
    print::print_recommendation(&rec);
    Ok(())
}

fn handle_board(ctx: &AppContext, count: usize) -> Result<()> {
    let board = voting::leaderboard(&ctx.catalog, count);
    print::print_board(&board);
    Ok(())
}

fn handle_results(ctx: &AppContext) -> Result<()> {
    let results = voting::results(&ctx.catalog);
    print::print_results(&results);
    Ok(())
}

fn handle_page(ctx: &AppContext) -> Result<()> {
    let page = voting::page(&ctx.catalog, DEFAULT_BOARD_SIZE);
    print::print_page(&page);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    print::print_list(ctx.catalog.list());
    Ok(())
}

fn handle_vote(ctx: &mut AppContext, position: usize) -> Result<()> {
    let id = position
        .checked_sub(1)
        .and_then(|i| ctx.catalog.list().get(i))
        .map(|r| r.id)
        .ok_or_else(|| LunchError::Api(format!("No restaurant at position {}", position)))?;

    let outcome = voting::cast_vote(&mut ctx.catalog, id)?;
    print::print_messages(&outcome.messages);
    println!();

    // A vote re-renders the whole page.
    handle_page(ctx)
}

fn handle_admin(
    ctx: &mut AppContext,
    password: Option<String>,
    action: AdminAction,
) -> Result<()> {
    match admin::authenticate(&ctx.catalog, &ctx.auth, password.as_deref()) {
        AdminGate::Unauthenticated => {
            println!(
                "{}",
                "Admin password required. Pass it with --password.".dimmed()
            );
            Ok(())
        }
        AdminGate::Rejected { messages } => {
            print::print_messages(&messages);
            Ok(())
        }
        AdminGate::Authenticated { grid, messages } => {
            print::print_messages(&messages);
            match action {
                AdminAction::Show => {
                    print::print_editor_grid(&grid);
                    Ok(())
                }
                AdminAction::Save { file } => {
                    let rows = read_table(&file)?;
                    let outcome = admin::save_table(&mut ctx.catalog, rows)?;
                    print::print_messages(&outcome.messages);
                    println!();

                    // Saving refreshes the editor against the stored table.
                    ctx.catalog.reload()?;
                    print::print_editor_grid(&admin::EditorGrid {
                        columns: admin::editor_columns(),
                        rows: ctx.catalog.list().to_vec(),
                    });
                    Ok(())
                }
            }
        }
    }
}
