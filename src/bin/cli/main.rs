use std::{env, process::exit};

use anyhow::Result;

use dotenvy::dotenv;
use reedline::Signal;

mod command_parser;
mod prompt;
mod repl;
mod views;

use openshelf::{
    catalog::CatalogClient,
    config::Config,
    search::{context::SearchContext, coordinator::SearchCoordinator},
};

pub struct App {
    pub config:      Config,
    pub client:      CatalogClient,
    pub coordinator: SearchCoordinator<CatalogClient>,
}

async fn handle_command(command: String, app: &App) -> Result<()> {
    let args = command_parser::arg_parser_repl();
    let command = shlex::split(&command);
    if let None = command {
        anyhow::bail!("Invalid command");
    }
    let command = command.unwrap();
    let matches = args.try_get_matches_from(command);
    if let Err(e) = matches {
        anyhow::bail!(e);
    }
    let matches = matches.unwrap();
    match matches.subcommand() {
        Some(("search", _matches)) => {
            views::search_view(app, _matches).await?;
        }
        Some(("results", _matches)) => {
            views::results_view(app).await?;
        }
        Some(("page", _matches)) => {
            views::page_view(app, _matches).await?;
        }
        Some(("next", _matches)) => {
            views::next_page_view(app).await?;
        }
        Some(("prev", _matches)) => {
            views::prev_page_view(app).await?;
        }
        Some(("show", _matches)) => {
            views::detail_view(app, _matches).await?;
        }
        Some(("editions", _matches)) => {
            views::editions_view(app, _matches).await?;
        }
        Some(("config", _matches)) => {
            println!("{}", Config::default_as_string()?);
        }
        Some(("exit", _matches)) => {
            exit(0);
        }
        Some((name, _matches)) => unimplemented!("{}", name),
        None => unreachable!("subcommand required"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let args_parsed = command_parser::arg_parser_cli().get_matches_from(env::args_os().skip(1));

    let config = Config::read_config()?;
    let client = CatalogClient::new(&config)?;
    let coordinator = SearchCoordinator::new(SearchContext::new(), client.clone());
    let app = App {
        config,
        client,
        coordinator,
    };

    if let Some(("repl", _)) = args_parsed.subcommand() {
        let mut repl = repl::Repl::new(command_parser::generate_completions());
        loop {
            match repl.read_line() {
                Ok(Signal::Success(buffer)) => {
                    match handle_command(buffer.clone(), &app).await {
                        Ok(_) => (),
                        Err(e) => println!("{}", app.config.output_error.format_str(format!("{e:#}"))),
                    };
                }
                Ok(Signal::CtrlD) | Ok(Signal::CtrlC) => {
                    println!("\nAborted!");
                    break;
                }
                x => {
                    println!("Event: {:?}", x);
                }
            }
        }
    } else {
        let args = env::args_os()
            .skip(1)
            .map(|x| x.into_string().expect("Invalid unicode in arguments"))
            .collect::<Vec<String>>()
            .join(" ");
        handle_command(args, &app).await?;
    }

    Ok(())
}
