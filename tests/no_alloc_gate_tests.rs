//! Allocation gate: the per-frame hot paths (stepping and snapshotting) must
//! not allocate once the engine is warmed up.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_bounce::core::{Bounds, Engine, EngineSnapshot};
use tui_bounce::mask::{shapes, ShapeMask};
use tui_bounce::types::{EngineConfig, MaskConfig, Region};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn walls_step_and_snapshot_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut engine = Engine::new(1, EngineConfig::default(), Bounds::Walls);
    engine.set_region(Region::new(512.0, 618.0));
    engine.set_quantity(u64::MAX / 2);
    engine.start();
    let mut snap = EngineSnapshot::default();

    // Warm-up.
    engine.step();
    engine.snapshot_into(&mut snap);

    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            engine.step();
            engine.snapshot_into(&mut snap);
        }
    });
    assert_eq!(allocs, 0, "hot path allocated {} times", allocs);
}

#[test]
fn shaped_step_does_not_allocate() {
    let mask = ShapeMask::with_source(MaskConfig::default(), shapes::vessel(256, 310));
    let mut engine = Engine::new(1, EngineConfig::default(), Bounds::Shaped(Box::new(mask)));
    engine.set_region(Region::new(512.0, 618.0));
    engine.set_quantity(u64::MAX / 2);
    engine.start();

    engine.step();

    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            engine.step();
        }
    });
    assert_eq!(allocs, 0, "shaped step allocated {} times", allocs);
}
