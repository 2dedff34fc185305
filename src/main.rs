//! OctoFit CLI
//!
//! Command-line client for the OctoFit Tracker backend:
//! - List users, teams, workouts, activities and the leaderboard
//! - Edit a user profile
//! - Show the resolved API endpoints
//! - Generate a default config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use octofit::config::generate_default_config;
use octofit::{
    fetch_collection, render_view, ActivityRow, Config, Endpoints, FormField, HttpTransport,
    LeaderboardRow, LoggingConfig, Present, ResourceKind, ResourceView, TeamRow, UserRow,
    UsersPanel, ViewState, WorkoutRow,
};

#[derive(Parser)]
#[command(name = "octofit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal client for the OctoFit Tracker fitness dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides codespace detection)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table, global = true)]
    pub format: Format,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List registered users
    Users,

    /// List teams
    Teams,

    /// List workout programs
    Workouts,

    /// List logged activities
    Activities,

    /// Show the leaderboard
    Leaderboard,

    /// Edit a user profile
    EditUser {
        /// User id, or email when the record has no id
        identity: String,
        /// Hero name
        #[arg(long)]
        name: Option<String>,
        /// Real name
        #[arg(long)]
        alias: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Team name, one of the backend's teams
        #[arg(long)]
        team: Option<String>,
        /// beginner, intermediate or advanced
        #[arg(long)]
        fitness_level: Option<String>,
    },

    /// Show the resolved API endpoints
    Endpoints,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = Some(url.clone());
    }

    init_logging(&config.logging);

    let transport = HttpTransport::new();

    match cli.command {
        Commands::Users => show::<UserRow>(&transport, &config.api.endpoints(), cli.format).await,
        Commands::Teams => show::<TeamRow>(&transport, &config.api.endpoints(), cli.format).await,
        Commands::Workouts => {
            show::<WorkoutRow>(&transport, &config.api.endpoints(), cli.format).await
        }
        Commands::Activities => {
            show::<ActivityRow>(&transport, &config.api.endpoints(), cli.format).await
        }
        Commands::Leaderboard => {
            show::<LeaderboardRow>(&transport, &config.api.endpoints(), cli.format).await
        }

        Commands::EditUser {
            identity,
            name,
            alias,
            email,
            team,
            fitness_level,
        } => {
            let changes = [
                (FormField::Name, name),
                (FormField::Alias, alias),
                (FormField::Email, email),
                (FormField::Team, team),
                (FormField::FitnessLevel, fitness_level),
            ];
            edit_user(&transport, &config.api.endpoints(), &identity, changes).await
        }

        Commands::Endpoints => {
            print_endpoints(&config.api.endpoints(), cli.format)?;
            Ok(())
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
            Ok(())
        }
    }
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Mount one view, load it and print it
async fn show<R: Present>(
    transport: &HttpTransport,
    endpoints: &Endpoints,
    format: Format,
) -> anyhow::Result<()> {
    let mut view = ResourceView::<R>::mount(endpoints);
    let ticket = view.begin();
    let result = fetch_collection(transport, view.url()).await;

    let raw = match (&result, format) {
        (Ok(records), Format::Json) => Some(serde_json::to_string_pretty(records)?),
        _ => None,
    };
    view.settle(ticket, result);

    if let ViewState::Failed(_) = view.state() {
        eprintln!("{}", render_view(view.state()));
        std::process::exit(1);
    }

    match raw {
        Some(json) => println!("{}", json),
        None => println!("{}", render_view(view.state())),
    }
    Ok(())
}

async fn edit_user(
    transport: &HttpTransport,
    endpoints: &Endpoints,
    identity: &str,
    changes: [(FormField, Option<String>); 5],
) -> anyhow::Result<()> {
    let mut panel = UsersPanel::mount(endpoints);
    panel.load(transport).await;

    if let Some(message) = panel.view.state().error() {
        eprintln!("Error! {}", message);
        std::process::exit(1);
    }
    if !panel.open_editor(identity) {
        bail!("No user with id or email '{}'", identity);
    }

    for (field, value) in changes {
        if let Some(value) = value {
            panel.editor.set_field(field, value);
        }
    }

    if let Err(issues) = panel.editor.form().validate(&panel.team_options) {
        for issue in &issues {
            eprintln!("{}", issue);
        }
        if !panel.team_options.is_empty() {
            eprintln!("Teams: {}", panel.team_options.join(", "));
        }
        std::process::exit(1);
    }

    let updated = panel.submit(transport).await;
    if let Some(notice) = panel.editor.notice() {
        if updated {
            println!("{}", notice.message());
        } else {
            eprintln!("{}", notice.message());
        }
    }
    if !updated {
        std::process::exit(1);
    }

    println!();
    println!("{}", render_view(panel.view.state()));
    Ok(())
}

fn print_endpoints(endpoints: &Endpoints, format: Format) -> anyhow::Result<()> {
    match format {
        Format::Json => {
            let mut map = serde_json::Map::new();
            map.insert("base_url".into(), endpoints.base_url.clone().into());
            for kind in ResourceKind::ALL {
                map.insert(kind.name().into(), endpoints.url(kind).into());
            }
            println!("{}", serde_json::to_string_pretty(&map)?);
        }
        Format::Table => {
            println!("{:<14} {}", "API base", endpoints.base_url);
            println!("{}", "-".repeat(60));
            for kind in ResourceKind::ALL {
                println!("{:<14} {}", kind.title(), endpoints.url(kind));
            }
        }
    }
    Ok(())
}
