// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `planif`: the weekly planning grid and session tools on the command line.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod commands;
mod form;

use std::time::Duration;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use planif::{RoomFilter, StatusFilter};
use planif_api::{ApiClient, ClientConfig, DEFAULT_API_BASE, DEFAULT_FORCE_PATH, Resource};
use time::{Date, OffsetDateTime};
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

use crate::form::SessionFormArgs;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // The local offset can only be read reliably before other threads exist.
    let today: Date = OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string())),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let runtime: tokio::runtime::Runtime = tokio::runtime::Runtime::new()?;
    match runtime.block_on(args.run(today)) {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the planning backend.
    #[arg(long, env = "PLANIF_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Bearer token sent with every request.
    #[arg(long, env = "PLANIF_AUTH_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Per-request timeout in seconds. Requests wait indefinitely by default.
    #[arg(long, env = "PLANIF_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Path used to create a session despite reported conflicts.
    #[arg(long, env = "PLANIF_FORCE_PATH", default_value = DEFAULT_FORCE_PATH)]
    force_path: String,

    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.api_base)
            .with_token(self.token.clone())
            .with_timeout(self.timeout_secs.map(Duration::from_secs))
            .with_force_path(&self.force_path)
    }

    async fn run(self, today: Date) -> Result<()> {
        let client: ApiClient = ApiClient::new(self.client_config())?;
        tracing::debug!(base_url = %client.config().base_url, %today, "Starting");
        let context: commands::Context = commands::Context { client, today };
        self.command.run(&context).await
    }
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Show the weekly planning grid
    #[command(visible_alias = "g")]
    Grid {
        /// Only show this room (`all` or a room id)
        #[arg(long, default_value = "all")]
        salle: RoomFilter,

        /// Only show sessions with this status (`all`, `planifie`, or a status)
        #[arg(long, default_value = "all")]
        statut: StatusFilter,

        /// Weeks relative to the current one
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        week_offset: i64,
    },

    /// Show, create, edit or delete sessions
    #[command(subcommand, visible_alias = "s")]
    Session(SessionCommand),

    /// Find or create the current planning
    #[command(subcommand, visible_alias = "p")]
    Planning(PlanningCommand),

    /// Inspect and resolve conflicts
    #[command(subcommand, visible_alias = "c")]
    Conflicts(ConflictCommand),

    /// List a backend collection as JSON
    #[command(visible_alias = "ls")]
    List {
        /// One of etudiants, formateurs, salles, materiels, groupes,
        /// sessions, creneaux, plannings, disponibilites, conflits
        resource: Resource,
    },

    /// Check that the backend is reachable
    Ping,
}

impl Command {
    async fn run(self, context: &commands::Context) -> Result<()> {
        match self {
            Self::Grid {
                salle,
                statut,
                week_offset,
            } => commands::grid(context, salle, statut, week_offset).await,
            Self::Session(command) => command.run(context).await,
            Self::Planning(command) => command.run(context).await,
            Self::Conflicts(command) => command.run(context).await,
            Self::List { resource } => commands::list(context, resource).await,
            Self::Ping => commands::ping(context).await,
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
enum SessionCommand {
    /// Show every field of a session
    Show { id: i64 },

    /// Create a session in the current planning
    Create {
        #[command(flatten)]
        form: SessionFormArgs,

        /// Create it even if the backend reports conflicts
        #[arg(long)]
        force: bool,
    },

    /// Change a session; fields not given keep their value
    Edit {
        id: i64,

        #[command(flatten)]
        form: SessionFormArgs,

        /// Re-submit through the conflict-overriding path if conflicts are reported
        #[arg(long)]
        force: bool,
    },

    /// Delete a session
    Delete { id: i64 },
}

impl SessionCommand {
    async fn run(self, context: &commands::Context) -> Result<()> {
        match self {
            Self::Show { id } => commands::show_session(context, id).await,
            Self::Create { form, force } => commands::create_session(context, form, force).await,
            Self::Edit { id, form, force } => {
                commands::edit_session(context, id, form, force).await
            }
            Self::Delete { id } => commands::delete_session(context, id).await,
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
enum PlanningCommand {
    /// Print this week's or next week's planning, creating one if needed
    Ensure,

    /// List every planning
    List,
}

impl PlanningCommand {
    async fn run(self, context: &commands::Context) -> Result<()> {
        match self {
            Self::Ensure => commands::ensure_planning(context).await,
            Self::List => commands::list_plannings(context).await,
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
enum ConflictCommand {
    /// List the conflicts the backend has recorded
    List,

    /// Analyse a planning's conflicts and their solutions
    Analyse { planning: i64 },

    /// List the solutions proposed for a planning
    Solutions { planning: i64 },

    /// Summarize a planning's conflicts
    Summary { planning: i64 },

    /// Apply a solution, given as the JSON object the analysis returned
    Apply { solution: String },

    /// Let the backend resolve every conflict it can in a planning
    ResolveAll { planning: i64 },

    /// Dismiss a recorded conflict
    Dismiss { id: i64 },

    /// Show the usual remedies for a kind of conflict (e.g. `CONFLIT_SALLE`)
    Remedies { kind: String },
}

impl ConflictCommand {
    async fn run(self, context: &commands::Context) -> Result<()> {
        match self {
            Self::List => commands::list_conflicts(context).await,
            Self::Analyse { planning } => {
                commands::print_json(&context.client.analyse_planning(planning).await?)
            }
            Self::Solutions { planning } => {
                commands::print_json(&context.client.planning_solutions(planning).await?)
            }
            Self::Summary { planning } => {
                commands::print_json(&context.client.resolution_summary(planning).await?)
            }
            Self::Apply { solution } => commands::apply_solution(context, &solution).await,
            Self::ResolveAll { planning } => commands::resolve_all(context, planning).await,
            Self::Dismiss { id } => {
                context.client.dismiss_conflict(id).await?;
                println!("Conflit {id} supprimé");
                Ok(())
            }
            Self::Remedies { kind } => {
                commands::remedies(&kind);
                Ok(())
            }
        }
    }
}
