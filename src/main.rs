use anyhow::Result;
use clap::Parser;
use keep_ours::areas::ignore::IgnoreSet;
use keep_ours::areas::project::Project;

#[derive(Parser)]
#[command(
    name = "keep-ours",
    version = "0.1.0",
    about = "Resolve leftover merge-conflict markers by keeping the local side",
    long_about = "This tool scans a project tree for unresolved merge-conflict markers \
    left behind by a merge or rebase, and rewrites every well-formed conflict block \
    in place, keeping the local (ours/HEAD) side and discarding the incoming side. \
    Malformed or partial blocks are never touched.",
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
        index = 1,
        help = "The root directory to scan (defaults to the current directory)"
    )]
    path: Option<String>,
    #[arg(
        long = "ignore",
        value_name = "NAME",
        help = "Additional directory name to skip during traversal (repeatable)"
    )]
    ignore: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let ignore = IgnoreSet::with_extra(cli.ignore);
    let project = match &cli.path {
        Some(path) => Project::new(path, ignore, Box::new(std::io::stdout()))?,
        None => {
            let pwd = std::env::current_dir()?;
            Project::new(&pwd.to_string_lossy(), ignore, Box::new(std::io::stdout()))?
        }
    };

    project.resolve_conflicts()?;

    Ok(())
}
