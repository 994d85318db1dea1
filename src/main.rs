use anyhow::Result;
use readiness::cli::{self, Commands};
use readiness::commands::{self, AppContext, RunArgs, ScoreArgs};
use readiness::config::{load_config, load_config_from};
use readiness::formatting::FormattingConfig;
use readiness::observability::{init_tracing, install_panic_hook};

fn main() -> Result<()> {
    let cli = cli::parse_args();
    install_panic_hook();
    init_tracing(cli.verbose)?;

    let config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config(),
    };
    let formatting = FormattingConfig::resolve(cli.plain, cli.color);
    formatting.apply();
    let app = AppContext { config, formatting };

    match cli.command {
        Commands::Run {
            link,
            offline,
            fresh_session,
            session_file,
        } => commands::handle_run(
            RunArgs {
                link,
                offline,
                fresh_session,
                session_file,
            },
            &app,
        ),
        Commands::Score {
            link,
            answers,
            format,
            output,
        } => commands::handle_score(
            ScoreArgs {
                link,
                answers,
                format,
                output,
            },
            &app,
        ),
        Commands::Encode { answers, token_only } => {
            commands::handle_encode(&answers, token_only, &app)
        }
        Commands::Decode { input } => commands::handle_decode(&input),
        Commands::Questions { format } => commands::handle_questions(format, &app),
        Commands::CheckEmail { email } => commands::handle_check_email(&email, &app),
        Commands::Init { force } => commands::init_config(&std::env::current_dir()?, force),
    }
}
