use clap::Parser;
use small_notify::utils::logger;
use small_notify::utils::validation::{is_valid_email, EmailAddress, PhoneNumber, Validate};
use small_notify::{CliConfig, Command, NotificationService, TomlConfig, TracingLogger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match TomlConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    if cli.json_logs || config.is_json_logging() {
        logger::init_json_logger(cli.verbose, config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = cli.validate().and_then(|_| config.validate()) {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let service = NotificationService::new(config.email_sender(), config.sms_sender(), TracingLogger);

    let delivered = match cli.command {
        Command::Welcome { email, name } => service.send_welcome_email(&email, &name).await,
        Command::Notify {
            email,
            phone,
            message,
        } => match service.send_notification(&email, &phone, &message).await {
            Ok(sent) => sent,
            Err(e) => {
                tracing::error!("Notification aborted: {}", e);
                eprintln!("{}", e.user_friendly_message());
                std::process::exit(e.exit_code());
            }
        },
        Command::Validate { email, phone } => {
            let mut all_valid = true;
            if let Some(email) = email {
                match EmailAddress::parse(&email) {
                    Ok(address) if is_valid_email(&email) => println!(
                        "email {}: valid (local part '{}', domain '{}')",
                        email,
                        address.local_part(),
                        address.domain()
                    ),
                    _ => {
                        println!("email {}: invalid", email);
                        all_valid = false;
                    }
                }
            }
            if let Some(phone) = phone {
                match PhoneNumber::parse(&phone) {
                    Ok(number) => println!("phone {}: valid", number.as_str()),
                    Err(e) => {
                        println!("phone {}: invalid ({})", phone, e);
                        all_valid = false;
                    }
                }
            }
            all_valid
        }
    };

    if !delivered {
        std::process::exit(1);
    }

    Ok(())
}
