use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use configure_win64::ConfigureInvoker;

/// Configure the win-X86_64 Release build (CMake + Ninja).
///
/// Activate the MSVC toolchain first, e.g. `vcvarsall.bat x64`.
#[derive(Parser, Debug)]
#[command(name = "configure-win64", version, about)]
struct Cli {
    /// Print debug output
    #[arg(short, long)]
    verbose: bool,

    /// Print the cmake invocation as JSON and exit without running it
    #[arg(long)]
    dry_run: bool,

    /// Build directory to configure from (defaults to the current directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    directory: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("configure_win64=debug")
    } else {
        EnvFilter::new("configure_win64=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let mut invoker = ConfigureInvoker::default();
    if let Some(dir) = cli.directory {
        invoker = invoker.set_current_dir(dir);
    }

    if cli.dry_run {
        match invoker.invocation().to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if let Err(e) = invoker.run() {
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }
}
