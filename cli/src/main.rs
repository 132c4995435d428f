use clap::Parser;
use unbind_cli::Cli;
use unbind_cli::command::Commands;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match &cli.commands {
        Commands::Authorize(command) => command.run(&cli),
        Commands::Status(command) => command.run(&cli),
        Commands::Reset(command) => command.run(&cli),
        Commands::Fulfill(command) => command.run(&cli),
        Commands::Strip(command) => command.run(&cli),
        Commands::Kobo(command) => command.run(),
    };

    if let Err(error) = result {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}
