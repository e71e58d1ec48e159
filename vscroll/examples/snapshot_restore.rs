// Example: capture frame state and restore it in a fresh window.
use vscroll::{ConfigError, ListWindow, WindowOptions};

fn main() -> Result<(), ConfigError> {
    let options = WindowOptions::new(50_000, 18)?;

    let mut w = ListWindow::new(options.clone());
    w.set_viewport_and_scroll_clamped(360, 90_000);
    let frame = w.frame_state();
    println!("captured {frame:?}");

    // e.g. after a session reload
    let mut restored = ListWindow::new(options);
    restored.restore_frame_state(frame, 0);
    println!("restored range {:?}", restored.window_range());
    assert_eq!(restored.window_range(), w.window_range());
    Ok(())
}
