//! Headless frame loop driving a flip card.
//!
//! A worker thread flips the card through its controller while the main
//! thread plays the host: it produces frames while the card animates, sleeps
//! until the next deadline or wakeup otherwise, and logs what it would paint.
//!
//! Run with `RUST_LOG=debug cargo run --example flip_card` to see the card's
//! own logging.

use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use flippable::prelude::*;

const FRAME: Duration = Duration::from_millis(16);
const RUN_FOR: Duration = Duration::from_secs(6);

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let config = FlipConfig::new()
        .flip_duration_ms(400)
        .auto_flip(true)
        .auto_flip_delay_ms(1500)
        .animation_type(FlipAnimationType::VerticalClockwise);

    let controller = FlipController::new();
    let mut card = match FlipCard::new(
        || String::from("What is the capital of Norway?"),
        || String::from("Oslo"),
        controller.clone(),
        config,
    ) {
        Ok(card) => card.on_flipped(|side| log::info!("Card now shows its {:?} side", side)),
        Err(err) => {
            log::error!("Invalid card configuration: {}", err);
            return;
        }
    };
    card.set_bounds(Rect::new(0.0, 0.0, 320.0, 200.0));

    let (wake_tx, wake_rx) = mpsc::channel();
    controller.set_wakeup(move || {
        let _ = wake_tx.send(());
    });

    let remote = controller.clone();
    let worker = thread::spawn(move || {
        thread::sleep(Duration::from_millis(300));
        log::info!("Worker: flip to back");
        remote.flip_to_back();

        thread::sleep(Duration::from_millis(100));
        log::info!("Worker: flip while animating (dropped)");
        remote.flip();

        thread::sleep(Duration::from_millis(3600));
        log::info!("Worker: toggle");
        remote.flip();
    });

    let start = Instant::now();
    let mut frames = 0u32;
    loop {
        let now = Instant::now();
        if now.duration_since(start) >= RUN_FOR {
            break;
        }

        let flags = card.advance(now);
        frames += 1;
        if flags.contains(ChangeFlags::FLIP_STARTED) {
            log::info!("Flip started towards {:?}", card.side());
        }
        if flags.contains(ChangeFlags::NEEDS_PAINT) {
            if let Some(transition) = card.transition() {
                log::debug!(
                    "{:?} -> {:?} at {:.0}%",
                    transition.from(),
                    transition.to(),
                    transition.fraction(now) * 100.0
                );
            }
            paint(&mut card, now.duration_since(start));
        }

        if card.needs_frame() {
            thread::sleep(FRAME);
            continue;
        }

        // Idle: sleep until the next timer or an external request.
        let wait = card
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(RUN_FOR)
            .min(RUN_FOR.saturating_sub(start.elapsed()));
        let _ = wake_rx.recv_timeout(wait);
    }

    let _ = worker.join();
    log::info!("Done after {} frames, resting on {:?}", frames, card.side());
}

fn paint(card: &mut FlipCard<String>, at: Duration) {
    let bounds = card.bounds().unwrap_or_default();
    for layer in card.render().iter().filter(|layer| layer.is_visible()) {
        let (x, y) = layer.transform(bounds).transform_point(bounds.width, 0.0);
        log::debug!(
            "{:>5}ms {:?} rx={:.1} ry={:.1} opacity={:.0} corner=({:.1}, {:.1}) {:?}",
            at.as_millis(),
            layer.side,
            layer.rotation_x,
            layer.rotation_y,
            layer.opacity,
            x,
            y,
            layer.content,
        );
    }
}
