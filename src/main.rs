use clap::Parser;
use cwv::cli::{Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }

    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Check(args) => cwv::cli::commands::check::run(args, &global),
        Commands::Grid(args) => cwv::cli::commands::grid::run(args, &global),
        Commands::Crossings(args) => cwv::cli::commands::crossings::run(args, &global),
        Commands::Words(args) => cwv::cli::commands::words::run(args, &global),
        Commands::Export(args) => cwv::cli::commands::export::run(args, &global),
        Commands::Completions(args) => cwv::cli::commands::completions::run(args),
    }
}
