// Example: the throttled policy can lag the final burst position; frame
// coalescing always catches it.
use std::cell::Cell;
use std::error::Error;
use std::rc::Rc;

use vscroll::WindowOptions;
use vscroll_shell::{ContainerProbe, ListShell, ProbeError, ScrollCoalescing};

#[derive(Clone, Default)]
struct Container {
    offset: Rc<Cell<u64>>,
    height: Rc<Cell<u32>>,
}

struct Probe(Container);

impl ContainerProbe for Probe {
    fn scroll_offset(&mut self) -> Result<u64, ProbeError> {
        Ok(self.0.offset.get())
    }

    fn viewport_height(&mut self) -> Result<u32, ProbeError> {
        Ok(self.0.height.get())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let container = Container::default();
    container.height.set(400);

    let mut throttled = ListShell::mount(
        WindowOptions::new(10_000, 60)?.with_overscan(5),
        Probe(container.clone()),
        ScrollCoalescing::throttled(),
    )?;
    let mut coalesced = ListShell::mount(
        WindowOptions::new(10_000, 60)?.with_overscan(5),
        Probe(container.clone()),
        ScrollCoalescing::frame_coalesced(),
    )?;

    // A short burst that goes quiet before the throttle window reopens.
    for now_ms in 0..10u64 {
        container.offset.set(600 * now_ms);
        throttled.on_scroll_event(now_ms)?;
        coalesced.on_scroll_event(now_ms)?;
    }
    throttled.on_frame(16)?;
    coalesced.on_frame(16)?;

    println!("container offset:       {}", container.offset.get());
    println!("throttled shell offset: {}", throttled.window().scroll_offset());
    println!("coalesced shell offset: {}", coalesced.window().scroll_offset());
    Ok(())
}
