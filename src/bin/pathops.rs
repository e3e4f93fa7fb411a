// pathops: command-line front end for the pathops filesystem helpers.
// Usage: pathops [--config FILE] [-v] <find|load|save|mkdir|symlink|flush|remove|wipe> ...

use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use pathops::fs_op::wipe::WipeStop;
use pathops::logging::init_tracing;
use pathops::{PathOps, PathOpsConfig};

#[derive(Parser, Debug)]
#[command(name = "pathops", version, about = "Find, save, link and prune files")]
struct Cli {
    /// TOML config file (defaults to the per-user config location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log every created and removed entry to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List files below FOLDER, recursively
    Find {
        folder: PathBuf,
        /// Only files with this extension (case-insensitive)
        #[arg(long)]
        ext: Option<String>,
        /// Print a JSON array instead of one path per line
        #[arg(long)]
        json: bool,
    },
    /// Print the content of FILE; exit code 1 if it is not a file
    Load { file: PathBuf },
    /// Write --content (or stdin) to FILE, creating parent directories
    Save {
        file: PathBuf,
        #[arg(long)]
        content: Option<String>,
    },
    /// Create DIR and missing parents if needed
    Mkdir { dir: PathBuf },
    /// Link LINK to the regular file TARGET unless LINK already exists
    Symlink { target: PathBuf, link: PathBuf },
    /// Empty FOLDER but keep it
    Flush { folder: PathBuf },
    /// Remove FOLDER and everything in it
    Remove { folder: PathBuf },
    /// Remove ROOT/RELATIVE and prune the directories it leaves empty
    Wipe { root: PathBuf, relative: PathBuf },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = PathOpsConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    let ops = PathOps::new(config);
    run(&ops, cli.command)
}

fn run(ops: &PathOps, command: Command) -> anyhow::Result<ExitCode> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Find { folder, ext, json } => {
            let found = ops.find(&folder, ext.as_deref());
            if json {
                let paths: Vec<String> = found.map(|p| p.to_string_lossy().into_owned()).collect();
                serde_json::to_writer_pretty(&mut out, &paths)?;
                writeln!(out)?;
            } else {
                for p in found {
                    writeln!(out, "{}", p.display())?;
                }
            }
        }
        Command::Load { file } => match ops.load(&file).with_context(|| format!("reading {}", file.display()))? {
            Some(bytes) => out.write_all(&bytes)?,
            None => {
                eprintln!("not a file: {}", file.display());
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Save { file, content } => {
            let data = match content {
                Some(c) => c.into_bytes(),
                None => {
                    let mut buf = Vec::new();
                    std::io::stdin().read_to_end(&mut buf).context("reading stdin")?;
                    buf
                }
            };
            ops.save(&file, &data).with_context(|| format!("saving {}", file.display()))?;
        }
        Command::Mkdir { dir } => ops.mkdir(&dir)?,
        Command::Symlink { target, link } => ops.symlink(&target, &link)?,
        Command::Flush { folder } => ops.flush_folder(&folder).with_context(|| format!("flushing {}", folder.display()))?,
        Command::Remove { folder } => ops.remove_folder(&folder).with_context(|| format!("removing {}", folder.display()))?,
        Command::Wipe { root, relative } => {
            let Some(report) = ops.wipe_with_report(&root, &relative)? else {
                eprintln!("root does not exist: {}", root.display());
                return Ok(ExitCode::FAILURE);
            };
            for p in &report.removed {
                writeln!(out, "{}", p.display())?;
            }
            if let WipeStop::OutsideRoot(p) = &report.stop {
                eprintln!("refusing to touch {} outside {}", p.display(), root.display());
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
