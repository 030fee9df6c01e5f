use clap::Parser;
use folio::config::Command;
use folio::core::joke::JokeState;
use folio::core::merge::merge_ranges;
use folio::core::tenure::elapsed_months;
use folio::domain::ports::ProfileProvider;
use folio::utils::{logger, validation::Validate};
use folio::{
    calculate_overall_experience, CliConfig, ContactDesk, ContactForm, JokeApiClient, JokeWidget,
    PortfolioPage, ProfileConfig, Result, ScrollSpy,
};

fn load_profile(cli: &CliConfig) -> Result<ProfileConfig> {
    let mut config = match &cli.config {
        Some(path) => ProfileConfig::from_file(path)?,
        None => ProfileConfig::embedded()?,
    };

    if let Some(as_of) = cli.as_of {
        config.profile.as_of = Some(as_of);
    }

    config.validate()?;
    Ok(config)
}

async fn run(cli: CliConfig, config: ProfileConfig) -> Result<()> {
    match cli.command {
        Command::Experience => {
            let tenure = calculate_overall_experience(&config)?;
            println!("{}", tenure);
        }

        Command::Timeline => {
            let as_of = config.as_of();
            let mut ranges = Vec::with_capacity(config.engagements.len());
            for engagement in &config.engagements {
                ranges.push(engagement.date_range(as_of)?);
                println!(
                    "{:<32} {:<30} {}",
                    engagement.role,
                    engagement.company,
                    engagement.duration_label()
                );
            }

            println!();
            for interval in merge_ranges(&ranges) {
                println!(
                    "{} .. {}  ({} months)",
                    interval.start,
                    interval.end,
                    elapsed_months(&interval)
                );
            }
            println!("Total: {}", calculate_overall_experience(&config)?);
        }

        Command::Page => {
            print!("{}", PortfolioPage::build(&config)?);
        }

        Command::Sections => {
            for item in &config.navigation.items {
                println!("{:<12} {}", item.id, item.label);
            }
        }

        Command::Spy { scroll, tops } => {
            let mut spy = ScrollSpy::new(
                config.navigation.items.clone(),
                config.navigation.header_offset,
            );
            let ids: Vec<String> = spy.items().iter().map(|item| item.id.clone()).collect();
            if tops.len() > ids.len() {
                tracing::warn!(
                    "Ignoring {} extra offsets; only {} sections are configured",
                    tops.len() - ids.len(),
                    ids.len()
                );
            }
            for (id, top) in ids.iter().zip(tops) {
                spy.place(id, top)?;
            }
            match spy.active(scroll) {
                Some(item) => println!("{}", item.id),
                None => println!("(no sections configured)"),
            }
        }

        Command::Joke => {
            let widget = if config.joke.enabled {
                JokeWidget::new(JokeApiClient::new(
                    config.joke.endpoint.clone(),
                    config.joke_timeout(),
                )?)
            } else {
                JokeWidget::disabled()
            };

            match widget.refresh().await {
                JokeState::Loaded(joke) => println!("\"{}\"", joke.text),
                JokeState::Failed => println!("Oops! Couldn't fetch a joke right now."),
                JokeState::Disabled => println!("The joke widget is disabled."),
            }
        }

        Command::Contact {
            name,
            email,
            message,
        } => {
            let mut form = ContactForm::new(&name, &email, &message);
            let ack = ContactDesk::new(config.contact_delay())
                .submit(&mut form)
                .await?;
            println!("{}", ack.message);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // The profile may carry its own log level, so it is read first.
    let loaded = load_profile(&cli);

    if cli.log_json {
        logger::init_json_logger();
    } else {
        let level = loaded.as_ref().ok().and_then(|config| config.log_level());
        logger::init_cli_logger(cli.verbose, level);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let result = match loaded {
        Ok(config) => {
            tracing::info!(
                source = cli.config.as_deref().unwrap_or("<bundled>"),
                engagements = config.engagements.len(),
                as_of = %config.as_of(),
                "Loaded profile"
            );
            run(cli, config).await
        }
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::error!(
            "{} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("Error: {}", e.user_friendly_message());
        eprintln!("Hint: {}", e.recovery_suggestion());

        std::process::exit(e.exit_code());
    }
}
