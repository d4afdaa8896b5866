mod args;

use app_lib::app::{DrugNameCreateReq, DrugNameUpdateReq};
use app_lib::commands::{
    cmd_drug_name_create, cmd_drug_name_delete, cmd_drug_name_get_one,
    cmd_drug_name_list_paged, cmd_drug_name_update, dispatch_line, DrugNameIdReq,
    DrugNameListReq,
};
use app_lib::config::AppConfig;
use app_lib::error::AppError;
use app_lib::infra::DbPool;
use app_lib::ui::input::{parse_line, Parsed, HELP};
use app_lib::ui::render::render;
use app_lib::ui::Session;
use args::{Cli, Commands};
use clap::Parser;
use serde::Serialize;
use std::io::{self, BufRead, Write};

pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let cfg = AppConfig::resolve(cli.db, cli.page_size, cli.log_level.as_deref())?;
    app_lib::init_logging(&cfg);
    let pool = app_lib::open(&cfg)?;

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Create { drug_name } => {
            print_json(&cmd_drug_name_create(&pool, DrugNameCreateReq { drug_name }))
        }
        Commands::Update { id, drug_name } => print_json(&cmd_drug_name_update(
            &pool,
            DrugNameUpdateReq { id, drug_name },
        )),
        Commands::Delete { id } => print_json(&cmd_drug_name_delete(&pool, DrugNameIdReq { id })),
        Commands::Get { id } => print_json(&cmd_drug_name_get_one(&pool, DrugNameIdReq { id })),
        Commands::List { page } => {
            let req = DrugNameListReq {
                page: Some(page),
                page_size: Some(cfg.page_size),
            };
            print_json(&cmd_drug_name_list_paged(&pool, Some(req), cfg.page_size))
        }
        Commands::Rpc => serve_rpc(&pool, cfg.page_size),
        Commands::Browse => browse(&pool, cfg.page_size),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let out = serde_json::to_string_pretty(value).map_err(|e| AppError::Db(e.to_string()))?;
    println!("{}", out);
    Ok(())
}

fn serve_rpc(pool: &DbPool, page_size: i64) -> Result<(), AppError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        writeln!(stdout, "{}", dispatch_line(pool, &line, page_size))?;
        stdout.flush()?;
    }
    Ok(())
}

fn browse(pool: &DbPool, page_size: i64) -> Result<(), AppError> {
    let mut session = Session::open(pool, page_size);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}\n(? for help)", render(session.state()))?;

    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        match parse_line(&line?, session.state()) {
            Parsed::Quit => break,
            Parsed::Help => writeln!(stdout, "{}", HELP)?,
            Parsed::Invalid(msg) => {
                if !msg.is_empty() {
                    writeln!(stdout, "{}", msg)?;
                }
            }
            Parsed::Event(event) => {
                session.dispatch(event);
                writeln!(stdout, "{}", render(session.state()))?;
            }
        }
    }
    Ok(())
}
