use clap::Parser;
use retemplate::logger::initialize_logger;
use retemplate::{run_refactor, RefactorConfig};
use std::path::PathBuf;
use tracing::error;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Output project directory. Should not be nested inside the input directory.
    #[arg(short = 'o', long)]
    output_directory: PathBuf,

    /// The project name to rename **to**
    #[arg(short = 'n', long)]
    new_name: String,

    /// Input project source directory
    #[arg(short = 'i', long, default_value = "../")]
    input_directory: PathBuf,

    /// The project name to rename **from**
    #[arg(short = 'p', long, default_value = "evey")]
    project_name: String,

    /// Content to add to the README file
    #[arg(long, default_value = "")]
    readme_content: String,
}

fn main() {
    let args = CliArgs::parse();
    initialize_logger();

    let config = RefactorConfig {
        input_directory: args.input_directory,
        output_directory: args.output_directory,
        project_name: args.project_name,
        new_name: args.new_name,
        readme_content: args.readme_content,
    };

    if let Err(e) = run_refactor(config) {
        error!("Refactor run failed: {}", e);
        std::process::exit(1);
    }
}
