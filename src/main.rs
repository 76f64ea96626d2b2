// What you SEE:
// • shade: the image darkens around the mouse and fades to gray with distance.
// • drag:  a green box you can pick up with the left mouse; the dark halo follows it.
// • link:  two boxes joined by a white line; drag either one and the line follows.
// • S saves a PNG snapshot, H toggles the coordinate/FPS overlay, R resets the boxes.
// • ESC quits.

mod cli;
mod demo;
mod draw;
mod error;
mod shade;
mod snapshot;
mod types;

use clap::Parser;
use cli::Cli;
use draw::{draw_crosshair, draw_text_5x7, Drawer};
use error::Error;
use std::time::{Duration, Instant};
use types::FrameBuffer;

fn main() -> Result<(), Error> {
    env_logger::init();
    let cli = Cli::parse();
    run(&cli).inspect_err(|e| log::error!("{e}"))
}

fn run(cli: &Cli) -> Result<(), Error> {
    let (w, h) = (cli.width as usize, cli.height as usize);

    /* --- Screen buffer + demo ---
       Visual: this is the image you actually see each frame. */
    let mut screen = FrameBuffer::new(w, h)?;
    let mut demo = cli.demo.build(w, h);

    /* --- Window setup ---
       Visual: a fixed-size window opens, titled after the demo. */
    let title = format!("imageViewer — {}", demo.name());
    let mut drawer = Drawer::new(&title, w, h, cli.fps as usize)?;
    log::info!("running {} at {}x{} ({} fps target)", demo.name(), w, h, cli.fps);

    /* --- HUD / FPS / snapshots --- */
    let mut show_hud = cli.hud;
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS: 0.0");
    let mut snapshots_taken: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();

        /* 1) Inputs (polled once per frame) */
        let input = drawer.poll_input();
        if drawer.h_pressed_once() { show_hud = !show_hud; }
        let take_snapshot = drawer.s_pressed_once();

        /* 2) Let the demo react, then repaint the whole buffer. */
        demo.update(&input);
        demo.render(&mut screen);

        /* 3) Overlays: crosshair at the cursor, optional HUD text */
        if let Some(m) = input.mouse {
            draw_crosshair(&mut screen, m.x as i32, m.y as i32, 8, 0x00_FF_CC_33);
        }
        if show_hud {
            let pos = match input.mouse {
                Some(m) => format!("X:{} Y:{}", m.x as i32, m.y as i32),
                None => String::from("X:- Y:-"),
            };
            draw_text_5x7(&mut screen, 8, 8, &format!("{pos} | {hud_fps_text}"), 0x00_FF_FF_FF);
        }

        /* 4) Present to the window (this is when the on-screen image updates). */
        drawer.present(&screen)?;

        /* 5) Snapshot of exactly what was just shown; failures don't stop the demo. */
        if take_snapshot {
            let path = snapshot::next_snapshot_path(&cli.snapshot_dir, demo.name(), snapshots_taken);
            match snapshot::save_png(&screen, &path) {
                Ok(()) => {
                    snapshots_taken += 1;
                    log::info!("saved {}", path.display());
                }
                Err(e) => log::warn!("{e}"),
            }
        }

        /* 6) FPS counter (logged + HUD once per second) */
        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            log::debug!("FPS: {:.1}", fps);
            hud_fps_text = format!("FPS: {:.1}", fps);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    log::info!("window closed, {} snapshot(s) saved", snapshots_taken);
    Ok(())
}
