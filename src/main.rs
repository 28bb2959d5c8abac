use anyhow::Result;
use clap::Parser;

use tag_resolve::config;
use tag_resolve::environment;
use tag_resolve::resolver::{self, ResolveRequest};
use tag_resolve::store::ShuttleStore;
use tag_resolve::ui;

#[derive(clap::Parser)]
#[command(
    name = "tag-resolve",
    about = "Resolve the Docker image tag for the current CI branch"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Branch to resolve for, overriding the environment")]
    branch: Option<String>,

    #[arg(
        short,
        long,
        help = "Fallback tag for non-release branches, overriding the environment"
    )]
    tag: Option<String>,

    #[arg(long, help = "Report resolution steps on stderr")]
    verbose: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("tag-resolve {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    // Determine the branch and the fallback tag
    let branch = environment::resolve_branch(
        args.branch,
        &config.env.branch_var,
        &config.release.branches,
    );
    let fallback_tag = environment::resolve_fallback_tag(args.tag, &config.env.tag_var);

    if args.verbose {
        ui::display_status(&format!("Resolving tag for branch '{}'", branch.name));
    }

    let store = ShuttleStore::from_config(&config.lookup);
    let request = ResolveRequest {
        branch,
        fallback_tag,
        key: config.lookup.key.clone(),
    };

    match resolver::resolve(&request, &store) {
        Ok(resolved) => {
            if args.verbose {
                ui::display_resolution(&resolved);
            }
            println!("{}", resolved.value);
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            // A failed lookup command's exit code passes through unchanged
            std::process::exit(e.exit_code());
        }
    }
}
