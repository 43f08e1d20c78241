use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use clima_core::{Config, ConfigError};
use clima_ui::{ElementId, MemoryPage, ViewController};
use clima_weather::{ApiClient, Coordinate, FixedLocation, LocationProvider, NoDeviceLocation};

const ABOUT: &str = "Current weather for your location or a city";

const LONG_ABOUT: &str = "
Runs the Clima widget flow against a weather backend and prints what the page would show.

Without --lat/--lon there is no device location, so the configured fallback city is used.
Passing a CITY searches for it after the initial load, like typing it into the search box.
";

#[derive(Parser, Debug)]
#[command(version, about = ABOUT, long_about = LONG_ABOUT)]
struct Args {
    /// Path to the config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Backend base URL, overriding the config file
    #[arg(long)]
    api_url: Option<String>,

    /// Device latitude
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Device longitude
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,

    /// City to search for after the initial load
    city: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let (mut config, _) = Config::load_validated(args.config.as_deref()).inspect_err(|e| {
        if let Some(config_err) = e.downcast_ref::<ConfigError>() {
            eprintln!("{}", config_err.user_message());
        }
    })?;
    if let Some(url) = args.api_url {
        config.api.base_url = url;
    }
    clima_core::init(&config.logging.filter)?;

    let api = ApiClient::new(&config.api.base_url)?;
    let fallback = Coordinate::new(
        config.location.fallback_latitude,
        config.location.fallback_longitude,
    );
    tracing::info!("Using weather backend at {}", api.base_url());

    match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => {
            let device = FixedLocation(Coordinate::new(lat, lon));
            run(ViewController::new(MemoryPage::new(), device, api, fallback), args.city).await
        }
        _ => {
            run(ViewController::new(MemoryPage::new(), NoDeviceLocation, api, fallback), args.city)
                .await
        }
    }

    Ok(())
}

async fn run<L: LocationProvider>(controller: ViewController<MemoryPage, L>, city: Option<String>) {
    controller.initialize().await;

    if let Some(city) = city {
        controller.page_mut().type_city_query(&city);
        controller.search_city().await;
    }

    print_page(&controller.page());
    if let Some(message) = controller.last_error() {
        println!("{:>20}  {}", "error", message);
    }
}

fn print_page(page: &MemoryPage) {
    for id in ElementId::ALL {
        if let Some(text) = page.text(id) {
            println!("{:>20}  {}", id.dom_id(), text);
        }
    }
    for alert in page.alerts() {
        println!("{:>20}  {}", "alert", alert);
    }
}
