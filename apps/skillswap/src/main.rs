mod config;
mod render;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    controller::{
        chat::ChatAction, events::Notice, explore::ExploreAction, login::LoginAction,
        requests::RequestsAction, signup::SignupAction,
    },
    lifecycle::SwapAction,
    App, AppAction,
};
use serde::Serialize;
use shared::{
    criteria::{RequestSortKey, StatusFilter, UserSortKey},
    domain::{ChatId, Direction, RequestId, UserId},
    error::{AppError, ErrorCode, RouteError, SwapError},
    route::Route,
};
use storage::Storage;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{load_settings, Settings};

#[derive(Parser, Debug)]
#[command(name = "skillswap", about = "Find people to trade skills with")]
struct Cli {
    /// Print view models as JSON instead of text.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Dashboard,
    Explore {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        teach: Option<String>,
        #[arg(long)]
        learn: Option<String>,
        #[arg(long)]
        sort: Option<UserSortKey>,
    },
    Requests {
        #[arg(long, default_value = "incoming")]
        tab: Direction,
        #[arg(long, default_value = "all")]
        status: StatusFilter,
        #[arg(long)]
        sort: Option<RequestSortKey>,
    },
    Accept {
        id: i64,
    },
    Decline {
        id: i64,
    },
    Propose {
        user_id: i64,
    },
    Chat {
        #[arg(long)]
        open: Option<i64>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long, requires = "open")]
        send: Option<String>,
    },
    Profile,
    /// List the skill catalog.
    Skills,
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm: String,
        #[arg(long, default_value = "")]
        bio: String,
        #[arg(long, value_delimiter = ',')]
        teach: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        learn: Vec<String>,
    },
    /// List routes; with a path, open it and show the navigation bar.
    Routes {
        path: Option<String>,
    },
}

#[derive(Serialize)]
struct Outcome<'a> {
    route: Route,
    notices: &'a [Notice],
}

#[tokio::main]
async fn main() -> Result<()> {
    // Config problems are reported before the configured filter exists.
    let bootstrap = tracing_subscriber::fmt().with_writer(std::io::stderr).finish();
    let settings = tracing::subscriber::with_default(bootstrap, load_settings);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    let json = cli.json;

    let result = run(cli, &settings).await;
    if let (true, Err(error)) = (json, &result) {
        println!("{}", serde_json::to_string_pretty(&error_body(error))?);
    }
    result
}

/// JSON error surface: typed failures keep their code, the rest are internal.
fn error_body(error: &anyhow::Error) -> AppError {
    if let Some(swap) = error.downcast_ref::<SwapError>() {
        return AppError::from(swap.clone());
    }
    if let Some(route) = error.downcast_ref::<RouteError>() {
        return AppError::from(route.clone());
    }
    AppError::new(ErrorCode::Internal, format!("{error:#}"))
}

async fn run(cli: Cli, settings: &Settings) -> Result<()> {
    let storage = Storage::seeded().context("failed to load the seed fixture")?;
    let mut app = App::new(storage, Arc::new(settings.auth_backend()))
        .with_sorts(settings.user_sort, settings.request_sort);
    info!(command = ?cli.command, "starting");

    match cli.command {
        Command::Dashboard => emit(cli.json, &app.dashboard_view(), render::dashboard)?,
        Command::Explore {
            search,
            teach,
            learn,
            sort,
        } => {
            app.dispatch(AppAction::Navigate(Route::Explore))?;
            let mut actions = Vec::new();
            actions.extend(search.map(ExploreAction::SetSearch));
            actions.extend(teach.map(ExploreAction::SetTeachSkill));
            actions.extend(learn.map(ExploreAction::SetLearnSkill));
            actions.extend(sort.map(ExploreAction::SetSort));
            for action in actions {
                app.dispatch(AppAction::Explore(action))?;
            }
            emit(cli.json, &app.explore_view(), render::explore)?;
        }
        Command::Requests { tab, status, sort } => {
            app.dispatch(AppAction::Navigate(Route::Requests))?;
            let mut actions = vec![
                RequestsAction::SelectTab(tab),
                RequestsAction::SetStatusFilter(status),
            ];
            actions.extend(sort.map(RequestsAction::SetSort));
            for action in actions {
                app.dispatch(AppAction::Requests(action))?;
            }
            emit(cli.json, &app.requests_view(), render::requests)?;
        }
        Command::Accept { id } => {
            respond(cli.json, &mut app, id, SwapAction::Accept)?;
            emit(cli.json, &app.requests_view(), render::requests)?;
        }
        Command::Decline { id } => {
            respond(cli.json, &mut app, id, SwapAction::Decline)?;
            emit(cli.json, &app.requests_view(), render::requests)?;
        }
        Command::Propose { user_id } => {
            let dispatched = app.dispatch(AppAction::RequestSwap(UserId(user_id)));
            report_notices(cli.json, &mut app)?;
            dispatched.with_context(|| format!("failed to request a swap with user {user_id}"))?;
            app.dispatch(AppAction::Requests(RequestsAction::SelectTab(
                Direction::Outgoing,
            )))?;
            emit(cli.json, &app.requests_view(), render::requests)?;
        }
        Command::Chat { open, search, send } => {
            app.dispatch(AppAction::Navigate(Route::Chat))?;
            let mut actions = Vec::new();
            actions.extend(search.map(ChatAction::SetSearch));
            actions.extend(open.map(|id| ChatAction::Select(ChatId(id))));
            if let Some(text) = send {
                actions.push(ChatAction::SetDraft(text));
                actions.push(ChatAction::Send);
            }
            for action in actions {
                app.dispatch(AppAction::Chat(action))?;
            }
            emit(cli.json, &app.chat_view(), render::chat)?;
        }
        Command::Profile => emit(cli.json, &app.profile_view(), render::profile)?,
        Command::Skills => emit(cli.json, &app.storage().skill_vocabulary(), |skills| {
            skills.join("\n")
        })?,
        Command::Login { email, password } => {
            app.dispatch(AppAction::Navigate(Route::Login))?;
            for action in [
                LoginAction::SetEmail(email),
                LoginAction::SetPassword(password),
                LoginAction::Submit,
            ] {
                app.dispatch(AppAction::Login(action))?;
            }
            finish_auth(cli.json, &mut app).await?;
        }
        Command::Signup {
            name,
            email,
            password,
            confirm,
            bio,
            teach,
            learn,
        } => {
            app.dispatch(AppAction::Navigate(Route::Signup))?;
            let mut actions = vec![
                SignupAction::SetName(name),
                SignupAction::SetEmail(email),
                SignupAction::SetPassword(password),
                SignupAction::SetConfirmPassword(confirm),
                SignupAction::SetBio(bio),
            ];
            for skill in teach {
                actions.push(SignupAction::SelectTeachSkill(skill));
                actions.push(SignupAction::AddTeachSkill);
            }
            for skill in learn {
                actions.push(SignupAction::SelectLearnSkill(skill));
                actions.push(SignupAction::AddLearnSkill);
            }
            actions.push(SignupAction::Submit);
            for action in actions {
                app.dispatch(AppAction::Signup(action))?;
            }
            finish_auth(cli.json, &mut app).await?;
        }
        Command::Routes { path: None } => emit(cli.json, &Route::ALL, |_| render::routes())?,
        Command::Routes { path: Some(path) } => {
            let route: Route = path.parse()?;
            app.dispatch(AppAction::Navigate(route))?;
            emit(cli.json, &app.route().nav_items(), |items| render::nav(items))?;
        }
    }

    Ok(())
}

fn respond(json: bool, app: &mut App, id: i64, action: SwapAction) -> Result<()> {
    let dispatched = app.dispatch(AppAction::Respond {
        id: RequestId(id),
        action,
    });
    report_notices(json, app)?;
    dispatched.with_context(|| format!("failed to update request {id}"))
}

async fn finish_auth(json: bool, app: &mut App) -> Result<()> {
    if app.auth_pending() {
        app.settle_auth().await;
    }
    let notices = app.take_notices();
    emit(
        json,
        &Outcome {
            route: app.route(),
            notices: &notices,
        },
        |outcome| format!("{}now at {}", render::notices(outcome.notices), outcome.route.path()),
    )
}

/// Notices go to stderr so stdout carries only the view.
fn report_notices(json: bool, app: &mut App) -> Result<()> {
    let notices = app.take_notices();
    if json {
        eprintln!("{}", serde_json::to_string(&notices)?);
    } else {
        eprint!("{}", render::notices(&notices));
    }
    Ok(())
}

fn emit<T: Serialize + ?Sized>(json: bool, value: &T, text: impl FnOnce(&T) -> String) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(value).context("failed to encode view as JSON")?
        );
    } else {
        let rendered = text(value);
        if rendered.ends_with('\n') {
            print!("{rendered}");
        } else {
            println!("{rendered}");
        }
    }
    Ok(())
}
