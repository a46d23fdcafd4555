use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use console::{Term, style};
use std::path::PathBuf;
use javapack_core::{
    BuildPaths, DownloadCache, Jre, JreDetails, Properties, memory_opts,
};
use javapack_platform::expand_path;
use tracing_subscriber::EnvFilter;

mod output;

use output::format_duration;

/// javapack - JRE provisioning build step
#[derive(Parser)]
#[command(name = "javapack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Flags shared by every lifecycle command
#[derive(Args, Clone)]
struct JreArgs {
    /// Application directory being prepared
    #[arg(long, default_value = ".")]
    app_dir: PathBuf,

    /// Runtime vendor (overrides java.runtime.vendor)
    #[arg(long)]
    vendor: Option<String>,

    /// Runtime version (overrides java.runtime.version)
    #[arg(long)]
    version: Option<String>,

    /// Distribution download location (overrides java.runtime.uri)
    #[arg(long)]
    uri: Option<String>,

    /// Download cache root (default: platform cache directory)
    #[arg(long)]
    cache_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the identity of the selected JRE
    Detect {
        #[command(flatten)]
        args: JreArgs,

        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Download the JRE and unpack it into the application directory
    Install {
        #[command(flatten)]
        args: JreArgs,
    },

    /// Print the resolved memory options
    Configure {
        #[command(flatten)]
        args: JreArgs,

        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the full build step: detect, install, configure
    Build {
        #[command(flatten)]
        args: JreArgs,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Detect { args, json } => cmd_detect(&args, json),
        Commands::Install { args } => cmd_install(&args),
        Commands::Configure { args, json } => cmd_configure(&args, json),
        Commands::Build { args } => cmd_build(&args),
    }
}

/// Assemble one provisioning run from the command line and the
/// application's system properties
fn load_jre(args: &JreArgs) -> Result<Jre> {
    let paths = BuildPaths::new(&args.app_dir);
    let properties = Properties::load(&paths.properties_file)?;
    let details = JreDetails::resolve(
        &properties,
        args.vendor.clone(),
        args.version.clone(),
        args.uri.clone(),
    )?;

    let cache = match &args.cache_dir {
        Some(dir) => DownloadCache::new(expand_path(dir)?),
        None => DownloadCache::open()?,
    };

    Ok(Jre::new(paths, details, properties, cache))
}

fn cmd_detect(args: &JreArgs, json: bool) -> Result<()> {
    let jre = load_jre(args)?;

    if json {
        let details = jre.details();
        println!(
            "{}",
            serde_json::json!({
                "id": jre.detect(),
                "vendor": details.vendor,
                "version": details.version,
                "uri": details.uri,
            })
        );
    } else {
        println!("{}", jre.detect());
    }

    Ok(())
}

fn cmd_install(args: &JreArgs) -> Result<()> {
    let term = Term::stderr();
    let jre = load_jre(args)?;
    install_with_progress(&term, &jre)
}

fn install_with_progress(term: &Term, jre: &Jre) -> Result<()> {
    let details = jre.details();

    term.write_line(&format!(
        "{} Downloading {} {} JRE from {}",
        style("::").cyan().bold(),
        details.vendor,
        details.version,
        details.uri
    ))?;

    let report = jre.install()?;

    term.write_line(&format!(
        "{} Downloaded in {}",
        style("::").green().bold(),
        format_duration(report.download)
    ))?;
    term.write_line(&format!(
        "{} Expanded JRE to {} in {}",
        style("::").green().bold(),
        jre.runtime_dir().display(),
        format_duration(report.expand)
    ))?;

    Ok(())
}

fn cmd_configure(args: &JreArgs, json: bool) -> Result<()> {
    // Configuration only needs the properties file, not the metadata triple
    let paths = BuildPaths::new(&args.app_dir);
    let properties = Properties::load(&paths.properties_file)?;
    let java_opts = memory_opts(&properties)?;

    if json {
        println!("{}", serde_json::to_string(&java_opts)?);
    } else {
        for opt in &java_opts {
            println!("{}", opt);
        }
    }

    Ok(())
}

fn cmd_build(args: &JreArgs) -> Result<()> {
    let term = Term::stderr();
    let jre = load_jre(args)?;

    term.write_line(&format!(
        "{} Detected {}",
        style("::").cyan().bold(),
        jre.detect()
    ))?;

    install_with_progress(&term, &jre)?;

    let mut java_opts = Vec::new();
    jre.configure(&mut java_opts)?;

    if java_opts.is_empty() {
        term.write_line(&format!(
            "{} No memory options configured",
            style("::").cyan().bold()
        ))?;
    } else {
        term.write_line(&format!(
            "{} Java options: {}",
            style("::").green().bold(),
            java_opts.join(" ")
        ))?;
        for opt in &java_opts {
            println!("{}", opt);
        }
    }

    Ok(())
}
