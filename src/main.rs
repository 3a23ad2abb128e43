use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use pkg_bump::cli::{self, PublishWorkflowArgs, VersionWorkflowArgs, WorkflowContext};
use pkg_bump::config;
use pkg_bump::git::Git2Repository;
use pkg_bump::publish::CommandPublisher;
use pkg_bump::ui::{self, TerminalPrompter};

#[derive(Parser)]
#[command(
    name = "pkg-bump",
    version,
    about = "Bump the version in a package manifest, then commit, tag and publish it"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Package manifest to update")]
    manifest: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct BumpArgs {
    #[arg(
        value_name = "KIND|VERSION",
        help = "patch, minor, major, prepatch, preminor, premajor, prerelease, custom, or an explicit version"
    )]
    kind: Option<String>,

    #[arg(
        value_name = "TAG|VERSION",
        help = "Prerelease tag for `prerelease`, or the version for `custom`"
    )]
    extra: Option<String>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(long, help = "Commit the updated manifest")]
    commit: bool,

    #[arg(long, help = "Tag the release commit (requires --commit)")]
    tag: bool,
}

impl From<BumpArgs> for VersionWorkflowArgs {
    fn from(args: BumpArgs) -> Self {
        VersionWorkflowArgs {
            kind: args.kind,
            extra: args.extra,
            dry_run: args.dry_run,
            commit: args.commit,
            tag: args.tag,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Update the manifest version
    Version(BumpArgs),

    /// Update the manifest version, then publish the package
    Publish {
        #[command(flatten)]
        bump: BumpArgs,

        #[arg(short, long, help = "Skip the confirmation prompt")]
        yes: bool,

        #[arg(last = true, help = "Extra arguments for the publish command")]
        publish_args: Vec<String>,
    },
}

fn main() {
    if let Err(e) = run(Args::parse()) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let working_dir = std::env::current_dir().context("Cannot determine working directory")?;

    let config = config::load_config(args.config.as_deref(), &working_dir)?;
    let manifest_path = match args.manifest {
        Some(path) => working_dir.join(path),
        None => config.manifest_path(&working_dir),
    };
    let package_dir = manifest_path
        .parent()
        .map(|dir| dir.to_path_buf())
        .unwrap_or_else(|| working_dir.clone());

    let repository = Git2Repository::discover_from(&package_dir);
    let mut prompter = TerminalPrompter::stdio();
    let ctx = WorkflowContext {
        manifest_path,
        config: &config,
        source_control: &repository,
    };

    match args.command {
        Command::Version(bump) => {
            cli::run_version_workflow(&bump.into(), &ctx, &mut prompter)?;
        }
        Command::Publish {
            bump,
            yes,
            publish_args,
        } => {
            let publisher = CommandPublisher::new(
                config.publish.command.clone(),
                config.publish.args.clone(),
                &package_dir,
            );
            let publish = PublishWorkflowArgs {
                version: bump.into(),
                yes,
                publish_args,
            };
            cli::run_publish_workflow(&publish, &ctx, &mut prompter, &publisher)?;
        }
    }

    Ok(())
}
