use clap::Parser;
use hamed_advanced::domain::ports::SystemClock;
use hamed_advanced::utils::{logger, validation::Validate};
use hamed_advanced::{CliConfig, Session};

fn main() {
    let cli = CliConfig::parse();

    // 載入配置並套用命令列覆蓋
    let settings = match cli.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(e.exit_code());
        }
    };

    logger::init_cli_logger(settings.logging.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), SystemClock, &settings);

    if let Err(e) = session.run(cli.initial_action()) {
        tracing::error!("❌ Session aborted: {}", e);
        println!("{}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
