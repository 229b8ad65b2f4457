use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use groot::areas::repository::Repository;
use groot::artifacts::core::pager::PagerWriter;
use groot::config::{COMMIT_DATE_ENV, LOG_FILTER_ENV, REPOSITORY_DIR_ENV, RepositoryConfig};
use groot::errors::{EXIT_FAILURE, EXIT_SUCCESS, RepositoryError};
use is_terminal::IsTerminal;
use minus::Pager;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "groot",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal content-addressed version control system",
    long_about = "groot stores file contents by their SHA-1 digest, stages them in an index \
    and records linear history as chained commit records. \
    It has no branches, merges or remotes.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long = "repo",
        global = true,
        env = REPOSITORY_DIR_ENV,
        help = "The repository root (defaults to the current directory)"
    )]
    repo: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path. \
        Running it on an existing repository changes nothing."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "add",
        about = "Stage file contents for the next commit",
        long_about = "This command stores the current content of each file and appends it to the index. \
        Directories are expanded to every file beneath them."
    )]
    Add {
        #[arg(index = 1, required = true, num_args = 1.., help = "The files or directories to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command records every staged entry in a new commit on top of HEAD and clears the index."
    )]
    Commit {
        #[arg(index = 1, required_unless_present = "message_flag", help = "The commit message")]
        message: Option<String>,
        #[arg(short = 'm', long = "message", conflicts_with = "message", help = "The commit message")]
        message_flag: Option<String>,
    },
    #[command(
        name = "log",
        about = "Show the commit history",
        long_about = "This command prints every commit from HEAD back to the root commit, newest first."
    )]
    Log,
    #[command(
        name = "show",
        about = "Show a commit's files compared with its parent",
        long_about = "This command prints each file staged in the commit, diffed against the same path \
        in the parent commit when the parent staged it too."
    )]
    Show {
        #[arg(index = 1, help = "The commit digest")]
        digest: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file and optionally write it to the object database",
        long_about = "This command hashes a file and can write it to the object database. \
        It requires the path to the file to be specified."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the stored bytes of an object. \
        It requires the digest of the object to be specified."
    )]
    CatFile {
        #[arg(short = 'p', long, help = "Pretty-print the object instead of its raw bytes")]
        pretty: bool,
        #[arg(index = 1, help = "The object digest to print")]
        digest: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("error: {e:#}");

            let code = e
                .downcast_ref::<RepositoryError>()
                .map(RepositoryError::exit_code)
                .unwrap_or(EXIT_FAILURE);
            ExitCode::from(code)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let root = match cli.repo {
        Some(root) => root,
        None => std::env::current_dir().context("Failed to read the current directory")?,
    };

    match cli.command {
        Commands::Init { path } => {
            let root = match path {
                Some(path) if path.is_absolute() => path,
                Some(path) => root.join(path),
                None => root,
            };
            let mut repository = open(root, Box::new(std::io::stdout()))?;

            repository.init().await?
        }
        Commands::Add { paths } => {
            let mut repository = open(root, Box::new(std::io::stdout()))?;

            repository.add(&paths).await?
        }
        Commands::Commit {
            message,
            message_flag,
        } => {
            let message = message.or(message_flag).unwrap_or_default();
            let mut repository = open(root, Box::new(std::io::stdout()))?;

            match commit_date()? {
                Some(timestamp) => repository.commit_at(&message, timestamp).await?,
                None => repository.commit(&message).await?,
            }
        }
        Commands::Log => {
            with_pager(root, |repository| repository.log())?;
        }
        Commands::Show { digest } => {
            with_pager(root, |repository| repository.show(&digest))?;
        }
        Commands::HashObject { write, file } => {
            let mut repository = open(root, Box::new(std::io::stdout()))?;

            repository.hash_object(&file, write)?
        }
        Commands::CatFile { pretty, digest } => {
            let mut repository = open(root, Box::new(std::io::stdout()))?;

            repository.cat_file(&digest, pretty)?
        }
    }

    Ok(())
}

fn open(root: PathBuf, writer: Box<dyn std::io::Write>) -> Result<Repository> {
    Ok(Repository::new(RepositoryConfig::new(root), writer)?)
}

/// Timestamp pinned through the environment, if any
fn commit_date() -> Result<Option<DateTime<Utc>>> {
    let Ok(value) = std::env::var(COMMIT_DATE_ENV) else {
        return Ok(None);
    };

    let timestamp = DateTime::parse_from_rfc3339(&value)
        .with_context(|| format!("{COMMIT_DATE_ENV} is not an RFC 3339 timestamp: {value}"))?;

    Ok(Some(timestamp.with_timezone(&Utc)))
}

/// Run a read-only command, paging its output when stdout is a terminal
fn with_pager(root: PathBuf, command: impl FnOnce(&Repository) -> Result<()>) -> Result<()> {
    let interactive = std::io::stdout().is_terminal();
    colored::control::set_override(interactive);

    if !interactive || std::env::var_os("NO_PAGER").is_some() {
        let repository = open(root, Box::new(std::io::stdout()))?;
        return command(&repository);
    }

    let pager = Pager::new();
    let repository = open(root, Box::new(PagerWriter::new(pager.clone())))?;
    command(&repository)?;
    drop(repository);

    minus::page_all(pager).context("Failed to display the pager")?;

    Ok(())
}
