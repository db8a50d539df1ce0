use bundlegen::engine::{DEFAULT_MODULE_NAME, DEFAULT_OUTPUT_DIR};
use bundlegen_cli::{
    check::run_check_command, generate::run_gen_command, logging::init_logging,
    options::BundleArgs,
};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate the bundle and generate a Rust module from it.
    Gen {
        #[command(flatten)]
        bundle: BundleArgs,

        /// Name of the generated module (and of its file)
        #[arg(long, env = "BUNDLEGEN_MODULE", default_value = DEFAULT_MODULE_NAME)]
        module: String,

        /// Directory the generated module is written to
        #[arg(long, env = "BUNDLEGEN_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: String,
    },

    /// Validate the bundle without generating anything.
    Check {
        #[command(flatten)]
        bundle: BundleArgs,

        /// Print the validated bundle as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = match args.commands {
        Commands::Gen {
            bundle,
            module,
            output_dir,
        } => run_gen_command(&bundle, &module, &output_dir),
        Commands::Check { bundle, json } => run_check_command(&bundle, json),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}
