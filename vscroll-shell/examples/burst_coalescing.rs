// Example: 100 scroll events inside one frame collapse into one recompute.
use std::cell::Cell;
use std::error::Error;
use std::rc::Rc;

use vscroll::WindowOptions;
use vscroll_shell::{ContainerProbe, FrameOutcome, ListShell, ProbeError, ScrollCoalescing};

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

    let options = WindowOptions::new(10_000, 60)?.with_overscan(5);
    let mut shell = ListShell::mount(
        options,
        Probe(container.clone()),
        ScrollCoalescing::frame_coalesced(),
    )?;

    for i in 0..100u64 {
        container.offset.set(i * 60);
        shell.on_scroll_event(i % 16)?;
    }

    match shell.on_frame(16)? {
        FrameOutcome::Recomputed(offset) => println!("one recompute, offset {offset}"),
        FrameOutcome::Idle => println!("nothing pending"),
    }
    println!("window_range={:?}", shell.window().window_range());
    Ok(())
}
