// Example: minimal usage, range, spacers, and scroll-to helper.
use vscroll::{Align, ConfigError, ListWindow, WindowOptions};

fn main() -> Result<(), ConfigError> {
    let options = WindowOptions::new(1_000_000, 24)?.with_overscan(4);
    let mut w = ListWindow::new(options);
    w.set_viewport_and_scroll(480, 123_456);

    println!("total_size={}", w.total_size());
    println!("window_range={:?}", w.window_range());
    println!("spacers={:?}", w.spacers());

    let mut first = None;
    w.for_each_window_item(|it| {
        if first.is_none() {
            first = Some(it);
        }
    });
    println!("first_window_item={first:?}");

    let off = w.scroll_to_index_offset(999_999, Align::End);
    w.set_scroll_offset_clamped(off);
    println!("after scroll_to_index: offset={}", w.scroll_offset());
    Ok(())
}
