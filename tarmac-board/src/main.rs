mod config;

use anyhow::Context;
use tarmac_booking::{FareClass, PassengerForm, PaymentMethod, TicketDesk};
use tarmac_catalog::{Flight, FlightCatalog, FlightQuery};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tarmac_board=info,tarmac_catalog=info,tarmac_booking=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::load().context("failed to load config")?;
    tracing::info!(
        airport = %config.airport.name,
        city = %config.airport.city,
        "starting departures board"
    );

    let catalog = if config.board.seed_sample_schedule {
        FlightCatalog::with_sample_schedule().context("failed to seed the sample schedule")?
    } else {
        FlightCatalog::new(config.airport.name.clone(), config.airport.city.clone())
    };

    println!(
        "\nDepartures board — {} ({})\n",
        catalog.name(),
        catalog.city()
    );
    render(catalog.flights().iter());

    if let Some(company) = &config.board.company_filter {
        let query = FlightQuery {
            company_contains: Some(company.clone()),
            ..Default::default()
        };
        println!("\nFiltered by company '{company}':\n");
        render(catalog.search(&query).into_iter());
    }

    // Walk one ticket through the purchase flow, if there is anything to buy.
    let Some(flight) = catalog.flights().first() else {
        tracing::info!("board is empty, skipping the purchase demo");
        return Ok(());
    };
    let desk = TicketDesk::new(&catalog);
    let quote = desk.quote(flight.code.as_str(), FareClass::Business)?;
    let passenger = PassengerForm {
        dni: "12345678Z".to_string(),
        full_name: "Ana García".to_string(),
        email: "ana@example.com".to_string(),
        payment_method: Some(PaymentMethod::Card),
        comment: None,
    }
    .validate()?;

    println!("\n{}\n", quote.summary(&passenger));
    let reservation = desk.reserve(&quote, passenger);
    println!(
        "Reservation confirmed: {} for flight {} — {}",
        reservation.reference, reservation.flight_code, reservation.total
    );

    Ok(())
}

fn render<'a>(flights: impl Iterator<Item = &'a Flight>) {
    println!(
        "{:<9} {:<18} {:<17} {:<17} {:>8} {:>12}",
        "CODE", "COMPANY", "DEPARTURE", "ARRIVAL", "DURATION", "PRICE"
    );
    let mut any = false;
    for flight in flights {
        any = true;
        println!(
            "{:<9} {:<18} {:<17} {:<17} {:>8} {:>12}",
            flight.code,
            flight.company,
            flight.schedule.departure().format("%Y-%m-%d %H:%M"),
            flight.schedule.arrival().format("%Y-%m-%d %H:%M"),
            flight.duration().to_string(),
            flight.base_price.to_string(),
        );
    }
    if !any {
        println!("(no flights match)");
    }
}
