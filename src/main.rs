use clap::Parser;
use tab_stream::config::cli::{ask_song, Command, ResolvedConfig};
use tab_stream::core::format::format_response;
use tab_stream::core::links::{all_search_urls, search_url};
use tab_stream::core::title_parser;
use tab_stream::utils::{logger, validation::Validate};
use tab_stream::{CliConfig, GeminiClient, SongAssistant, SongInfo, TabStreamError};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();
    let resolved = config.resolve();

    // a broken config file is reported through the logger set up from flags
    let (verbose, json_logs) = match &resolved {
        Ok(r) => (r.verbose, r.json_logs),
        Err(_) => (config.verbose, config.json_logs),
    };
    if json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::debug!("CLI config: {:?}", config.command);

    let outcome = match resolved {
        Ok(resolved) => run(config, resolved).await,
        Err(e) => Err(e.into()),
    };

    if let Err(e) = outcome {
        tracing::error!("❌ {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e {
            TabStreamError::Config(_) => 2,
            _ => 1,
        };
        std::process::exit(exit_code);
    }
}

async fn run(config: CliConfig, resolved: ResolvedConfig) -> Result<(), TabStreamError> {
    if config.needs_remote() {
        resolved.assistant.validate()?;
    }
    let assistant = SongAssistant::new(GeminiClient::new(resolved.assistant));

    match config.command {
        Command::Parse { title } => {
            print_song(&title_parser::parse(&title));
        }
        Command::Identify { title, json } => {
            let song = assistant.identify(&title).await;
            if json {
                println!("{}", serde_json::to_string(&song)?);
            } else {
                print_song(&song);
            }
        }
        Command::Ask {
            question,
            artist,
            title,
            html,
        } => {
            let song = ask_song(&artist, &title)?;
            let answer = assistant.answer(&question, &song).await?;
            if html {
                println!("{}", format_response(&answer));
            } else {
                println!("{}", answer);
            }
        }
        Command::Links { title, site } => {
            let song = title_parser::parse(&title);
            print_song(&song);
            let urls = match site {
                Some(site) => vec![(site, search_url(site, &song))],
                None => all_search_urls(&song),
            };
            for (site, url) in urls {
                println!("{:<16} {}", site.label(), url);
            }
        }
    }

    Ok(())
}

fn print_song(song: &SongInfo) {
    if song.has_artist() {
        println!("🎤 {}", song.artist);
    }
    println!("🎵 {}", song.title);
}
