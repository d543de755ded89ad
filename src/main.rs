use clap::{Parser, Subcommand};

mod commands;
mod output;
mod tty;

use commands::rewrite;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "inspect-rewrite")]
#[command(version = VERSION)]
#[command(about = "Add @json.inspect(@pug.parse(...)) alongside render snapshot tests")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite test files in place (default when no command is given)
    Rewrite(rewrite::RewriteArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Rewrite(rewrite::RewriteArgs::default()));

    let (json_result, exit_code) = commands::run_json(command);

    if output::print_json_result(json_result).is_err() {
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
