// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Medtriage - symptom triage from the command line.
//!
//! This is the binary entry point. Each subcommand maps to one screen of the
//! mobile client: sign-in, symptom analysis, history, reports, and the
//! doctor views.

mod account;
mod otp;
mod output;
mod profile;
mod prompt;
mod reports;
mod triage;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use medtriage_client::TriageClient;
use medtriage_config::model::MedtriageConfig;
use medtriage_core::{AccountKind, TriageError};
use medtriage_display::TimestampFormatter;
use medtriage_prefs::{CredentialStore, FileStore};
use tracing::debug;

/// Medtriage - symptom triage from the command line.
#[derive(Parser, Debug)]
#[command(name = "medtriage", version, about, long_about = None)]
struct Cli {
    /// Backend base URL, overriding configuration.
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Disable colored output.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Sign in, optionally remembering the credentials.
    Login {
        #[arg(long, default_value = "patient")]
        kind: AccountKind,
        /// Patient or doctor ID. Defaults to the remembered one.
        #[arg(long)]
        id: Option<String>,
        /// Remember ID and password on this machine.
        #[arg(long)]
        remember: bool,
        /// Prompt for the password even if one is remembered.
        #[arg(long)]
        ask_password: bool,
    },
    /// Forget remembered credentials for both account kinds.
    Logout,
    /// Create an account and confirm it with the mailed OTP.
    Register {
        #[arg(long, default_value = "patient")]
        kind: AccountKind,
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        /// Required for doctors.
        #[arg(long)]
        specialization: Option<String>,
    },
    /// Reset a forgotten password via an emailed OTP.
    ResetPassword {
        #[arg(long, default_value = "patient")]
        kind: AccountKind,
        #[arg(long)]
        email: Option<String>,
    },
    /// Change the password of a signed-in account.
    ChangePassword {
        #[arg(long, default_value = "patient")]
        kind: AccountKind,
        #[arg(long)]
        id: Option<String>,
    },
    /// Permanently delete an account.
    DeleteAccount {
        #[arg(long, default_value = "patient")]
        kind: AccountKind,
        #[arg(long)]
        id: Option<String>,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Show the account record.
    Whoami {
        #[arg(long, default_value = "patient")]
        kind: AccountKind,
        #[arg(long)]
        id: Option<String>,
    },
    /// List the symptoms the backend recognises.
    Symptoms,
    /// Run a triage analysis for a set of symptoms or files.
    Analyze {
        #[arg(long)]
        patient_id: Option<String>,
        /// Comma-separated symptom list.
        #[arg(long, value_delimiter = ',')]
        symptoms: Vec<String>,
        /// Files (images, PDFs) to analyze instead of symptoms.
        #[arg(long = "file")]
        files: Vec<PathBuf>,
        /// Skip the follow-up questions.
        #[arg(long)]
        no_questions: bool,
    },
    /// Show past triage sessions.
    History {
        #[arg(long)]
        patient_id: Option<String>,
    },
    /// Medical report management.
    #[command(subcommand)]
    Report(reports::ReportCommand),
    /// Patient health profile.
    #[command(subcommand)]
    Health(profile::HealthCommand),
    /// Doctor profile and patient views.
    #[command(subcommand)]
    Doctor(profile::DoctorCommand),
    /// Check a password against the sign-up rules without sending it.
    CheckPassword,
}

/// Shared state for one command invocation.
pub struct Context {
    pub client: TriageClient,
    pub credentials: CredentialStore<FileStore>,
    pub formatter: TimestampFormatter,
}

impl Context {
    fn new(config: &MedtriageConfig) -> Result<Self, TriageError> {
        let client = TriageClient::new(&config.api)?;
        let credentials = CredentialStore::new(FileStore::open(&config.storage.prefs_path));
        let formatter = TimestampFormatter::new(
            config.display.utc_offset_minutes,
            config.display.timestamp_pattern.clone(),
        )?;
        debug!(base_url = %client.base_url(), "context ready");
        Ok(Self {
            client,
            credentials,
            formatter,
        })
    }

    /// `given`, else the remembered identifier for `kind`, else a prompt.
    pub fn identifier(&self, kind: AccountKind, given: Option<String>) -> Result<String, TriageError> {
        let remembered = Some(self.credentials.load(kind).identifier).filter(|id| !id.is_empty());
        let label = match kind {
            AccountKind::Patient => "Patient ID",
            AccountKind::Doctor => "Doctor ID",
        };
        prompt::or_prompt(given.or(remembered), label)
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut config = match medtriage_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            medtriage_config::render_errors(&errors);
            std::process::exit(1);
        }
    };
    if let Some(base_url) = cli.base_url.clone() {
        config.api.base_url = base_url;
    }

    init_tracing(&config.logging.level);
    if cli.plain || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let result = match Context::new(&config) {
        Ok(mut ctx) => run(cli.command, &mut ctx).await,
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        output::print_error(&e);
        std::process::exit(1);
    }
}

async fn run(command: Commands, ctx: &mut Context) -> Result<(), TriageError> {
    match command {
        Commands::Login {
            kind,
            id,
            remember,
            ask_password,
        } => account::login(ctx, kind, id, remember, ask_password).await,
        Commands::Logout => account::logout(ctx),
        Commands::Register {
            kind,
            full_name,
            email,
            phone,
            specialization,
        } => {
            let details = account::RegisterDetails {
                full_name,
                email,
                phone,
                specialization,
            };
            account::register(ctx, kind, details).await
        }
        Commands::ResetPassword { kind, email } => account::reset_password(ctx, kind, email).await,
        Commands::ChangePassword { kind, id } => account::change_password(ctx, kind, id).await,
        Commands::DeleteAccount { kind, id, yes } => {
            account::delete_account(ctx, kind, id, yes).await
        }
        Commands::Whoami { kind, id } => account::whoami(ctx, kind, id).await,
        Commands::Symptoms => triage::symptoms(ctx).await,
        Commands::Analyze {
            patient_id,
            symptoms,
            files,
            no_questions,
        } => {
            if files.is_empty() {
                triage::analyze(ctx, patient_id, symptoms, !no_questions).await
            } else {
                triage::analyze_files(ctx, patient_id, files).await
            }
        }
        Commands::History { patient_id } => triage::history(ctx, patient_id).await,
        Commands::Report(cmd) => reports::run(ctx, cmd).await,
        Commands::Health(cmd) => profile::run_health(ctx, cmd).await,
        Commands::Doctor(cmd) => profile::run_doctor(ctx, cmd).await,
        Commands::CheckPassword => account::check_password(),
    }
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("medtriage={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn login_defaults_to_patient() {
        let cli = Cli::try_parse_from(["medtriage", "login", "--id", "P1"]).unwrap();
        match cli.command {
            Commands::Login {
                kind,
                id,
                remember,
                ask_password,
            } => {
                assert_eq!(kind, AccountKind::Patient);
                assert_eq!(id.as_deref(), Some("P1"));
                assert!(!remember);
                assert!(!ask_password);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn doctor_kind_parses() {
        let cli =
            Cli::try_parse_from(["medtriage", "login", "--kind", "doctor", "--remember"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Login {
                kind: AccountKind::Doctor,
                remember: true,
                ..
            }
        ));
        assert!(Cli::try_parse_from(["medtriage", "login", "--kind", "nurse"]).is_err());
    }

    #[test]
    fn ask_password_flag_parses() {
        let cli = Cli::try_parse_from(["medtriage", "login", "--ask-password"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Login {
                ask_password: true,
                ..
            }
        ));
    }

    #[test]
    fn symptoms_split_on_commas() {
        let cli = Cli::try_parse_from([
            "medtriage",
            "analyze",
            "--symptoms",
            "fever,cough",
            "--no-questions",
        ])
        .unwrap();
        match cli.command {
            Commands::Analyze {
                symptoms,
                files,
                no_questions,
                ..
            } => {
                assert_eq!(symptoms, vec!["fever", "cough"]);
                assert!(files.is_empty());
                assert!(no_questions);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_base_url_after_subcommand() {
        let cli = Cli::try_parse_from([
            "medtriage",
            "symptoms",
            "--base-url",
            "http://localhost:9000/api/",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:9000/api/"));
    }

    #[test]
    fn context_uses_configured_prefs_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = MedtriageConfig::default();
        config.storage.prefs_path = dir
            .path()
            .join("login_prefs.json")
            .to_string_lossy()
            .into_owned();

        let mut ctx = Context::new(&config).unwrap();
        ctx.credentials
            .save(AccountKind::Doctor, "D7", "Secret1!", true)
            .unwrap();
        assert_eq!(
            ctx.identifier(AccountKind::Doctor, None).unwrap(),
            "D7"
        );
        assert_eq!(
            ctx.identifier(AccountKind::Doctor, Some("D9".into())).unwrap(),
            "D9"
        );
    }
}
