use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use roomledger::desk::FrontDesk;
use roomledger::ids::UlidGenerator;
use roomledger::model::{Money, StayRange};

fn date(y: i32, m: u32, d: u32) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| format!("invalid date {y}-{m}-{d}").into())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    roomledger::observability::init_logging();
    let dump_json = std::env::args().skip(1).any(|a| a == "--json");

    let desk = FrontDesk::new(Arc::new(UlidGenerator));
    desk.add_room("101", Some("Deluxe King".into()), Money::from_dollars(150))?;
    desk.add_room("102", Some("Twin".into()), Money::from_dollars(110))?;
    info!("rooms: {}", desk.engine().resource_count());

    let mut guest = desk.register_guest("Ada Lovelace", "ada@example.com", "555-0100");
    println!("{guest}");
    guest.update_contact("ada@analytical.example", "555-0199");
    println!("{guest}");

    let stay = StayRange::new(date(2024, 1, 10)?, date(2024, 1, 13)?)?;
    let booking = desk.book(&guest, "101", stay)?;
    println!("{booking}");

    let overlapping = StayRange::new(date(2024, 1, 12)?, date(2024, 1, 14)?)?;
    println!(
        "Room 101 free for {overlapping}: {}",
        desk.engine().is_available("101", &overlapping)?
    );

    // A clash is reported and the run continues.
    let rival = desk.register_guest("Charles Babbage", "charles@example.com", "555-0101");
    match desk.book(&rival, "101", overlapping) {
        Ok(b) => println!("{b}"),
        Err(e) => {
            warn!("booking refused: {e}");
            println!("Could not book room 101 for {}: {e}", rival.name());
        }
    }
    let fallback = desk.engine().available_resources(&overlapping);
    if let Some(room) = fallback.first() {
        let b = desk.book(&rival, room, overlapping)?;
        println!("{b}");
    }

    let invoice = desk.invoice(&booking)?;
    println!("{invoice}");

    let mut payment = desk.take_payment(&invoice);
    println!("{payment}");
    payment.complete();
    println!("{payment}");

    let mut request = desk.request_service("101", "extra towels")?;
    println!("{request}");
    request.complete();
    println!("{request}");

    if dump_json {
        let snapshot = serde_json::json!({
            "resources": desk.engine().list_resources(),
            "reservations": desk.engine().all_reservations(),
        });
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }

    desk.cancel(booking)?;
    println!(
        "Room 101 free for {stay} after cancellation: {}",
        desk.engine().is_available("101", &stay)?
    );
    Ok(())
}
