use crate::*;

use std::cell::Cell;
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

use vscroll::WindowOptions;

/// Shared handles into a fake scroll container, so tests can move it while
/// the shell owns the probe.
#[derive(Clone, Default)]
struct Container {
    offset: Rc<Cell<u64>>,
    height: Rc<Cell<u32>>,
    fail_scroll_reads: Rc<Cell<bool>>,
    scroll_reads: Rc<Cell<usize>>,
    observers: Rc<Cell<i64>>,
    observes_total: Rc<Cell<usize>>,
}

impl Container {
    fn with_height(height: u32) -> Self {
        let c = Self::default();
        c.height.set(height);
        c
    }

    fn probe(&self) -> Probe {
        Probe(self.clone())
    }
}

struct Probe(Container);

impl ContainerProbe for Probe {
    fn scroll_offset(&mut self) -> Result<u64, ProbeError> {
        self.0.scroll_reads.set(self.0.scroll_reads.get() + 1);
        if self.0.fail_scroll_reads.get() {
            return Err(ProbeError::new("container detached"));
        }
        Ok(self.0.offset.get())
    }

    fn viewport_height(&mut self) -> Result<u32, ProbeError> {
        Ok(self.0.height.get())
    }

    fn observe_resize(&mut self) {
        self.0.observers.set(self.0.observers.get() + 1);
        self.0.observes_total.set(self.0.observes_total.get() + 1);
    }

    fn unobserve_resize(&mut self) {
        self.0.observers.set(self.0.observers.get() - 1);
    }
}

fn options(count: usize, item_height: u32) -> WindowOptions {
    WindowOptions::new(count, item_height).unwrap()
}

#[test]
fn mount_measures_synchronously_before_any_notification() {
    let c = Container::with_height(400);
    let shell = ListShell::mount(
        options(10_000, 60).with_overscan(5),
        c.probe(),
        ScrollCoalescing::frame_coalesced(),
    )
    .unwrap();

    // First paint is already windowed against the measured height.
    assert_eq!(shell.window().viewport_height(), 400);
    let r = shell.window().window_range();
    assert_eq!((r.start_index, r.end_index), (0, 12));
    assert_eq!(c.observers.get(), 1);
}

#[test]
fn burst_coalesces_to_a_single_recompute_at_the_last_position() {
    let c = Container::with_height(400);
    let mut shell = ListShell::mount(
        options(10_000, 60).with_overscan(5),
        c.probe(),
        ScrollCoalescing::frame_coalesced(),
    )
    .unwrap();

    // 100 synthetic events inside one simulated frame.
    for i in 0..100u64 {
        c.offset.set(i * 60);
        let out = shell.on_scroll_event(i % 16).unwrap();
        assert!(matches!(out, ScrollOutcome::Scheduled(_)));
    }
    // Nothing has been read yet: the position is sampled at fire time.
    assert_eq!(c.scroll_reads.get(), 0);

    assert_eq!(shell.on_frame(16).unwrap(), FrameOutcome::Recomputed(5_940));
    assert_eq!(c.scroll_reads.get(), 1);
    assert_eq!(shell.window().scroll_offset(), 5_940);

    // The frame consumed the schedule; the next frame is idle.
    assert_eq!(shell.on_frame(17).unwrap(), FrameOutcome::Idle);
    assert_eq!(c.scroll_reads.get(), 1);
}

#[test]
fn rescheduling_replaces_the_pending_recompute() {
    let c = Container::with_height(100);
    let mut shell = ListShell::mount(
        options(1_000, 10),
        c.probe(),
        ScrollCoalescing::frame_coalesced(),
    )
    .unwrap();

    let first = match shell.on_scroll_event(0).unwrap() {
        ScrollOutcome::Scheduled(p) => p,
        other => panic!("expected Scheduled, got {other:?}"),
    };
    let second = match shell.on_scroll_event(3).unwrap() {
        ScrollOutcome::Scheduled(p) => p,
        other => panic!("expected Scheduled, got {other:?}"),
    };
    assert!(second.generation > first.generation);

    // Only the replacement is still pending.
    match shell.coalescing() {
        ScrollCoalescing::FrameCoalesced(co) => {
            assert_eq!(co.pending(), Some(second));
        }
        other => panic!("unexpected policy {other:?}"),
    }
}

#[test]
fn frame_recompute_reads_the_position_at_fire_time() {
    let c = Container::with_height(100);
    let mut shell = ListShell::mount(
        options(1_000, 10),
        c.probe(),
        ScrollCoalescing::frame_coalesced(),
    )
    .unwrap();

    c.offset.set(100);
    shell.on_scroll_event(0).unwrap();
    // The container keeps moving after the schedule.
    c.offset.set(777);

    assert_eq!(shell.on_frame(16).unwrap(), FrameOutcome::Recomputed(777));
    assert_eq!(shell.window().scroll_offset(), 777);
}

#[test]
fn throttle_drops_the_final_burst_position_until_the_next_event() {
    let c = Container::with_height(100);
    let mut shell = ListShell::mount(
        options(1_000, 10),
        c.probe(),
        ScrollCoalescing::throttled(),
    )
    .unwrap();

    c.offset.set(50);
    assert_eq!(
        shell.on_scroll_event(0).unwrap(),
        ScrollOutcome::Applied(50)
    );

    // The burst continues inside the 16 ms window and then goes quiet: the
    // final position is never read. Historical behavior, kept on purpose.
    c.offset.set(120);
    assert_eq!(shell.on_scroll_event(5).unwrap(), ScrollOutcome::Throttled);
    assert_eq!(shell.on_scroll_event(10).unwrap(), ScrollOutcome::Throttled);
    assert_eq!(shell.window().scroll_offset(), 50);
    assert_eq!(c.scroll_reads.get(), 1);

    // The next event outside the window catches up.
    c.offset.set(130);
    assert_eq!(
        shell.on_scroll_event(40).unwrap(),
        ScrollOutcome::Applied(130)
    );
    assert_eq!(shell.window().scroll_offset(), 130);
}

#[test]
fn throttle_window_advances_even_when_the_read_fails() {
    let c = Container::with_height(100);
    let mut shell = ListShell::mount(
        options(1_000, 10),
        c.probe(),
        ScrollCoalescing::throttled(),
    )
    .unwrap();

    c.fail_scroll_reads.set(true);
    assert!(matches!(
        shell.on_scroll_event(0),
        Err(ShellError::Probe(_))
    ));

    c.fail_scroll_reads.set(false);
    c.offset.set(30);
    // Inside the window the event is dropped, as for any fired event.
    assert_eq!(shell.on_scroll_event(5).unwrap(), ScrollOutcome::Throttled);
    assert_eq!(
        shell.on_scroll_event(20).unwrap(),
        ScrollOutcome::Applied(30)
    );
}

#[test]
fn probe_failure_never_wedges_frame_coalescing() {
    let c = Container::with_height(100);
    let mut shell = ListShell::mount(
        options(1_000, 10),
        c.probe(),
        ScrollCoalescing::frame_coalesced(),
    )
    .unwrap();

    shell.on_scroll_event(0).unwrap();
    c.fail_scroll_reads.set(true);

    let err = shell.on_frame(16).unwrap_err();
    assert!(matches!(err, ShellError::Probe(_)));

    // The pending slot was cleared despite the failure.
    assert_eq!(shell.on_frame(17).unwrap(), FrameOutcome::Idle);

    // Later events schedule and execute normally again.
    c.fail_scroll_reads.set(false);
    c.offset.set(60);
    shell.on_scroll_event(20).unwrap();
    assert_eq!(shell.on_frame(32).unwrap(), FrameOutcome::Recomputed(60));
}

#[test]
fn probe_errors_carry_the_reason() {
    let err = ProbeError::new("container detached");
    assert_eq!(err.reason(), "container detached");
    assert_eq!(
        std::format!("{err}"),
        "container probe failed: container detached"
    );
}

#[test]
fn unmount_detaches_the_observer_symmetrically_across_remounts() {
    let c = Container::with_height(100);

    for _ in 0..3 {
        let mut shell = ListShell::mount(
            options(1_000, 10),
            c.probe(),
            ScrollCoalescing::frame_coalesced(),
        )
        .unwrap();
        assert_eq!(c.observers.get(), 1);

        // Leave a pending recompute behind; unmount must cancel it.
        shell.on_scroll_event(0).unwrap();
        shell.unmount();
        assert_eq!(c.observers.get(), 0);
    }

    assert_eq!(c.observes_total.get(), 3);
}

#[test]
fn dropping_the_shell_also_detaches() {
    let c = Container::with_height(100);
    {
        let _shell = ListShell::mount(
            options(1_000, 10),
            c.probe(),
            ScrollCoalescing::throttled(),
        )
        .unwrap();
        assert_eq!(c.observers.get(), 1);
    }
    assert_eq!(c.observers.get(), 0);
}

#[test]
fn resize_notifications_rewindow() {
    let c = Container::with_height(50);
    let mut shell = ListShell::mount(
        options(100, 10),
        c.probe(),
        ScrollCoalescing::frame_coalesced(),
    )
    .unwrap();
    assert_eq!(shell.window().window_range().end_index, 6); // ceil(50/10) + 1

    shell.on_resize(100);
    assert_eq!(shell.window().viewport_height(), 100);
    assert_eq!(shell.window().window_range().end_index, 11);
}

#[test]
fn remeasure_reads_the_container_on_demand() {
    let c = Container::with_height(50);
    let mut shell = ListShell::mount(
        options(100, 10),
        c.probe(),
        ScrollCoalescing::frame_coalesced(),
    )
    .unwrap();

    c.height.set(80);
    assert_eq!(shell.remeasure().unwrap(), 80);
    assert_eq!(shell.window().viewport_height(), 80);
}

#[test]
fn on_frame_debounces_is_scrolling() {
    let c = Container::with_height(100);
    let mut shell = ListShell::mount(
        options(1_000, 10),
        c.probe(),
        ScrollCoalescing::frame_coalesced(),
    )
    .unwrap();

    c.offset.set(40);
    shell.on_scroll_event(0).unwrap();
    shell.on_frame(16).unwrap();
    assert!(shell.window().is_scrolling());

    // Still inside the reset delay (default 150 ms after the last event).
    shell.on_frame(100).unwrap();
    assert!(shell.window().is_scrolling());

    shell.on_frame(200).unwrap();
    assert!(!shell.window().is_scrolling());
}

#[test]
fn placements_agree_on_every_slot_position() {
    let c = Container::with_height(200);
    let mut shell = ListShell::mount(
        options(1_000, 20).with_overscan(3),
        c.probe(),
        ScrollCoalescing::frame_coalesced(),
    )
    .unwrap();
    shell.window_mut().set_scroll_offset(4_000);

    let absolute = compute_layout(shell.window(), Placement::Absolute);
    let padded = compute_layout(shell.window(), Placement::Padded);

    assert_eq!(absolute.total_size, padded.total_size);
    assert_eq!(absolute.spacers, padded.spacers);
    assert_eq!(absolute.slots, padded.slots);
    assert!(!absolute.slots.is_empty());

    for i in 0..absolute.slots.len() {
        assert_eq!(absolute.slot_offset(i), padded.slot_offset(i));
    }
    assert_eq!(absolute.slot_offset(absolute.slots.len()), None);

    // The flow layout starts exactly where the leading spacer ends.
    assert_eq!(padded.spacers.leading, padded.slots[0].top);
}

#[test]
fn layout_preserves_the_total_extent() {
    let c = Container::with_height(200);
    let mut shell = ListShell::mount(
        options(1_000, 20).with_overscan(3),
        c.probe(),
        ScrollCoalescing::frame_coalesced(),
    )
    .unwrap();
    shell.window_mut().set_scroll_offset(4_000);

    let layout = compute_layout(shell.window(), Placement::Padded);
    let rendered: u64 = layout.slots.iter().map(|s| s.height as u64).sum();
    assert_eq!(
        layout.spacers.leading + rendered + layout.spacers.trailing,
        layout.total_size
    );
}

#[test]
fn render_window_skips_indexes_beyond_the_item_slice() {
    let c = Container::with_height(100);
    let mut shell = ListShell::mount(
        options(10, 10).with_overscan(0),
        c.probe(),
        ScrollCoalescing::frame_coalesced(),
    )
    .unwrap();

    // The window thinks there are 10 items, the host slice has 5.
    let items: Vec<String> = (0..5).map(|i| std::format!("item {i}")).collect();
    let rendered = render_window(shell.window(), &items, |item, index| {
        std::format!("{index}:{item}")
    });
    assert_eq!(rendered.len(), 5);
    assert_eq!(rendered[0], "0:item 0");
    assert_eq!(rendered[4], "4:item 4");

    // Shrinking the count below the slice length windows the prefix only.
    shell.window_mut().set_count(3);
    let rendered = render_window(shell.window(), &items, |item, _| item.clone());
    assert_eq!(rendered.len(), 3);
}
