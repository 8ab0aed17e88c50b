use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use version_advisor::config::{self, AdvisorConfig};
use version_advisor::discovery::{LocalFs, discover_modules};
use version_advisor::logging;
use version_advisor::version::checker::{check_for_update, get_latest_advisable_version};
use version_advisor::version::registries::NpmRegistry;
use version_advisor::version::semver::parse_version;

#[derive(Parser)]
#[command(name = "version-advisor")]
#[command(version, about = "Update advisories and add-on module discovery for npm packages")]
struct Cli {
    /// Config file (defaults to the data directory)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Registry base URL
    #[arg(long, global = true, value_name = "URL")]
    registry: Option<String>,

    /// Package whose updates are checked
    #[arg(long, global = true, value_name = "NAME")]
    package: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check the version published under a dist-tag
    Check {
        /// Currently running version
        #[arg(long)]
        current: String,

        /// Dist-tag to query
        #[arg(long)]
        tag: Option<String>,
    },
    /// Pick between the "latest" and "beta" dist-tags
    Latest {
        /// Currently running version
        #[arg(long)]
        current: String,
    },
    /// List installed modules declaring a keyword
    Modules {
        /// Keyword the module manifest must declare
        #[arg(long)]
        keyword: String,

        /// Search root, in precedence order (later wins); repeatable
        #[arg(long = "root", value_name = "DIR")]
        roots: Vec<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(config::config_path);
    let mut config = AdvisorConfig::load(&config_path)?;
    if let Some(url) = cli.registry {
        config.registry.url = url;
    }
    if let Some(package) = cli.package {
        config.registry.package = Some(package);
    }

    let _guard = logging::init(&config::log_path(), &config.logging)?;

    match cli.command {
        Command::Check { current, tag } => {
            if let Some(tag) = tag {
                config.registry.tag = tag;
            }
            let current = parse_version(&current)?;
            let registry = npm_registry(&config)?;

            let update = runtime()?.block_on(check_for_update(&current, &registry))?;
            if let Some(version) = update {
                println!("{version}");
            }
        }
        Command::Latest { current } => {
            let current = parse_version(&current)?;
            let registry = npm_registry(&config)?;

            let advisable = runtime()?.block_on(get_latest_advisable_version(&current, &registry))?;
            if let Some(version) = advisable {
                println!("{version}");
            }
        }
        Command::Modules { keyword, roots } => {
            let roots = if roots.is_empty() {
                config.modules.search_roots()
            } else {
                roots
            };
            if roots.is_empty() {
                anyhow::bail!("No search roots: pass --root or set modules.appPath / modules.configPath");
            }

            for module in discover_modules(&LocalFs, &keyword, &roots)? {
                println!(
                    "{}\t{}\t{}",
                    module.name,
                    module.location.display(),
                    module.manifest.version
                );
            }
        }
    }

    Ok(())
}

fn npm_registry(config: &AdvisorConfig) -> anyhow::Result<NpmRegistry> {
    let package = config
        .registry
        .package
        .as_deref()
        .context("No package configured: pass --package or set registry.package")?;
    Ok(NpmRegistry::from_config(&config.registry, package))
}

fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
