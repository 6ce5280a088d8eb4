// Booking Glance demo host
// Stand-in for the presentation runtime: attaches the scheduler to a sample
// booking and prints each surface once per tick.

use std::sync::mpsc;

use anyhow::Result;
use chrono::{Duration, Local};

use booking_glance::models::booking::{extend_requested, BookingPayload, RoomInfo};
use booking_glance::services::scheduler::RefreshScheduler;
use booking_glance::surfaces::render_all;
use booking_glance::utils::date::start_of_hour;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Booking Glance demo host");

    // The payload a real host would push when a booking becomes active:
    // a booking that started at the top of this hour and ends at the next.
    let now = Local::now();
    let start = start_of_hour(now);
    let payload = BookingPayload {
        room: RoomInfo::new("Pankhurst", "Ground Floor"),
        start,
        end: start + Duration::hours(1),
    };
    let (room, window) = payload.into_parts()?;

    let mut scheduler = RefreshScheduler::new(window);
    let (tx, rx) = mpsc::channel();
    scheduler.subscribe(Box::new(move |snapshot| {
        let _ = tx.send(*snapshot);
    }));
    scheduler.start();

    for snapshot in rx.iter().take(10) {
        println!(
            "tick {} pointer={:.3}",
            snapshot.now.format("%H:%M:%S"),
            snapshot.pointer_position
        );
        for content in render_all(&room, &snapshot) {
            println!("  [{:?}] {}", content.kind, content.body.replace('\n', " | "));
        }
    }

    // A press of the EXTEND button would land here; the core only acknowledges it.
    extend_requested(&room);

    scheduler.stop();
    Ok(())
}
