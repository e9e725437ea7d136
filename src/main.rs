use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rendezvous::config::AppConfig;
use rendezvous::models::{AppointmentForm, ContactForm};
use rendezvous::services::backend::http::HttpBackend;
use rendezvous::services::booking::BookingController;

#[derive(Parser)]
#[command(name = "rendezvous", about = "Submit appointment requests to the clinic backend")]
struct Cli {
    /// Raw Cookie header copied from a browser session on the clinic site,
    /// used to read the CSRF token.
    #[arg(long, env = "CLINIC_COOKIES", default_value = "", global = true)]
    cookie: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Request an appointment
    Book(BookArgs),
    /// Send a contact message to the clinic
    Contact(ContactArgs),
    /// List bookable services and their identifiers
    Services,
}

#[derive(Args)]
struct BookArgs {
    #[arg(long)]
    nom: String,
    #[arg(long)]
    prenom: String,
    #[arg(long)]
    telephone: String,
    #[arg(long)]
    email: String,
    /// Desired date, passed through to the backend as-is
    #[arg(long)]
    date_souhaitee: String,
    /// Service identifier (see the `services` subcommand)
    #[arg(long)]
    service: String,
    #[arg(long, default_value = "")]
    message: String,
    /// Consent to the processing of the submitted data
    #[arg(long)]
    consentement: bool,
}

#[derive(Args)]
struct ContactArgs {
    #[arg(long)]
    nom: String,
    #[arg(long)]
    email: String,
    #[arg(long, default_value = "")]
    telephone: String,
    #[arg(long)]
    sujet: String,
    #[arg(long)]
    message: String,
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();
    tracing::debug!("targeting clinic backend at {}", config.base_url);

    let backend = HttpBackend::new(config.base_url.clone());
    let controller = BookingController::new(config, Box::new(backend));

    let outcome = match cli.command {
        Command::Book(args) => {
            let mut form = AppointmentForm {
                nom: args.nom,
                prenom: args.prenom,
                telephone: args.telephone,
                email: args.email,
                date_souhaitee: args.date_souhaitee,
                service: args.service,
                message: args.message,
                consentement: args.consentement,
            };
            controller.submit_appointment(&mut form, &cli.cookie).await
        }
        Command::Contact(args) => {
            let mut form = ContactForm {
                nom: args.nom,
                email: args.email,
                telephone: args.telephone,
                sujet: args.sujet,
                message: args.message,
            };
            controller.submit_contact(&mut form, &cli.cookie).await
        }
        Command::Services => controller.list_services().await.map(|services| {
            services
                .iter()
                .map(|service| match service.duree_minutes {
                    Some(minutes) => format!("{:>4}  {} ({minutes} min)", service.id, service.nom),
                    None => format!("{:>4}  {}", service.id, service.nom),
                })
                .collect::<Vec<_>>()
                .join("\n")
        }),
    };

    match outcome {
        Ok(message) => println!("{message}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
