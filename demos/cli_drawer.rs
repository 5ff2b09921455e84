//! CLI deck drawer example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use drawrs::view::{self, RollButtonSize, Screen};
use drawrs::{DrawOptions, DrawOutcome, DrawUpdate, Drawer};

fn main() {
    env_logger::init();

    println!("{} CLI example (type 'q' to quit)", Screen::DeckDrawer.title());

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let drawer = match Drawer::new(DrawOptions::default(), seed) {
        Ok(drawer) => drawer,
        Err(err) => {
            println!("Options error: {err}");
            return;
        }
    };

    loop {
        print_screen(&drawer);

        match prompt_line("[enter] roll  [a] toggle auto-draw  [q] quit: ").as_str() {
            "q" | "quit" => break,
            "a" | "auto" => {
                let enabled = drawer.toggle_auto_continue();
                println!("Auto-draw second card: {}", if enabled { "on" } else { "off" });
            }
            "" | "r" | "roll" => {
                let updates = drawer.request_draw();
                if updates.contains(&DrawUpdate::TurnReset) {
                    println!("New turn.");
                    continue;
                }
                play_out(&drawer);
            }
            _ => println!("Unknown command."),
        }
    }

    drawer.teardown();
}

/// Sleeps until each timer is due so the flicker runs at table speed.
fn play_out(drawer: &Drawer) {
    while let Some(deadline) = drawer.next_deadline() {
        let wait = deadline.saturating_sub(drawer.now());
        thread::sleep(Duration::from_millis(wait));

        for update in drawer.advance(wait) {
            match update {
                DrawUpdate::RollStarted {
                    automatic: true, ..
                } => println!(),
                DrawUpdate::Flicker { preview, .. } => {
                    print!("\r{}   ", colorize(preview.label(), "31"));
                    let _ = io::stdout().flush();
                }
                DrawUpdate::Resolved {
                    draw_number,
                    outcome,
                } => {
                    println!("\rDraw {draw_number}: {}", format_outcome(outcome));
                }
                _ => {}
            }
        }
    }
}

fn print_screen(drawer: &Drawer) {
    let state = drawer.snapshot();
    let options = &drawer.options;

    println!();
    println!("{}", view::draw_counter(&state, options));
    if let Some(outcome) = state.current_outcome {
        println!("{}", format_outcome(outcome));
        println!("{}", outcome.deck_hint());
    }
    for (caption, label) in view::results_list(&state) {
        println!("  {caption} {label}");
    }

    let size = RollButtonSize::for_state(&state);
    println!("[{}]", view::roll_button_label(&state, options, size));
}

fn format_outcome(outcome: DrawOutcome) -> String {
    let code = match outcome {
        DrawOutcome::ActionCard => "33",
        DrawOutcome::BodyPart => "35",
    };
    colorize(outcome.label(), code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return "q".to_string(),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}
