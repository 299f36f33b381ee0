// Dweve HEDL - Hierarchical Entity Data Language
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Heap-delta measurement.
//!
//! A [`HeapProbe`] reports the current heap size and can be asked to release
//! whatever memory the allocator is holding back. Two probes are provided:
//!
//! - [`AllocatorProbe`] reads the live byte count kept by [`TrackingAllocator`].
//!   The allocator only counts once a binary installs it with
//!   `#[global_allocator]`; otherwise the probe reports zero.
//! - [`ResidentSetProbe`] reads the resident set size (`VmRSS`) from
//!   `/proc/self/status` on Linux and reports zero elsewhere.
//!
//! [`default_heap_probe`] picks the allocator probe when the tracking
//! allocator is installed and the resident-set probe otherwise.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

static LIVE_BYTES: AtomicUsize = AtomicUsize::new(0);
static PEAK_BYTES: AtomicUsize = AtomicUsize::new(0);

/// Source of heap-size samples for the memory benchmark.
pub trait HeapProbe {
    /// Asks the runtime to return unused memory before a sample is taken.
    fn force_collect(&self);

    /// Current heap size in bytes.
    fn heap_size(&self) -> usize;
}

/// Global allocator wrapper that counts live heap bytes.
///
/// ```no_run
/// use lexbench::harness::memory::TrackingAllocator;
///
/// #[global_allocator]
/// static GLOBAL: TrackingAllocator = TrackingAllocator;
/// ```
pub struct TrackingAllocator;

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        LIVE_BYTES.fetch_sub(layout.size(), Ordering::SeqCst);
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc_zeroed(layout);
        if !ptr.is_null() {
            record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = System.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            LIVE_BYTES.fetch_sub(layout.size(), Ordering::SeqCst);
            record_alloc(new_size);
        }
        new_ptr
    }
}

fn record_alloc(size: usize) {
    let live = LIVE_BYTES
        .fetch_add(size, Ordering::SeqCst)
        .saturating_add(size);
    PEAK_BYTES.fetch_max(live, Ordering::SeqCst);
}

/// Live bytes counted by [`TrackingAllocator`].
pub fn live_bytes() -> usize {
    LIVE_BYTES.load(Ordering::SeqCst)
}

/// Highest live byte count seen by [`TrackingAllocator`].
pub fn peak_bytes() -> usize {
    PEAK_BYTES.load(Ordering::SeqCst)
}

/// Probe backed by the [`TrackingAllocator`] counters.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllocatorProbe;

impl HeapProbe for AllocatorProbe {
    // Rust frees eagerly; there is nothing to collect.
    fn force_collect(&self) {}

    fn heap_size(&self) -> usize {
        live_bytes()
    }
}

/// Probe reading the process resident set size.
///
/// Page-granular and includes memory the allocator has not returned to the
/// kernel, so small workloads may show no change.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResidentSetProbe;

impl HeapProbe for ResidentSetProbe {
    fn force_collect(&self) {}

    fn heap_size(&self) -> usize {
        resident_bytes()
    }
}

fn resident_bytes() -> usize {
    #[cfg(target_os = "linux")]
    {
        if let Ok(contents) = std::fs::read_to_string("/proc/self/status") {
            if let Some(kb) = parse_vm_rss_kb(&contents) {
                return kb * 1024;
            }
        }
    }

    0
}

// `VmRSS` is reported in kB whatever the page size.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_vm_rss_kb(status: &str) -> Option<usize> {
    status
        .lines()
        .find(|line| line.starts_with("VmRSS:"))
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|kb| kb.parse().ok())
}

/// Returns whether [`TrackingAllocator`] is the global allocator.
///
/// Any program has allocated by the time this can be called, so a zero peak
/// means the counters were never fed.
pub fn tracking_allocator_installed() -> bool {
    peak_bytes() > 0
}

/// The probe a [`Runner`](crate::harness::Runner) uses unless told otherwise.
pub fn default_heap_probe() -> Box<dyn HeapProbe> {
    if tracking_allocator_installed() {
        tracing::debug!("heap probe: tracking allocator");
        Box::new(AllocatorProbe)
    } else {
        tracing::debug!("heap probe: resident set size");
        Box::new(ResidentSetProbe)
    }
}

/// Outcome of one single-shot memory benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryReport {
    /// Wall-clock time of the single workload execution.
    pub elapsed: Duration,
    /// Heap size after minus heap size before; negative when the workload freed memory.
    pub memory_used: i64,
    /// Heap size after the workload and the second collection.
    pub final_heap_size: usize,
}

impl MemoryReport {
    /// Heap delta in megabytes.
    pub fn memory_mb(&self) -> f64 {
        self.memory_used as f64 / 1_000_000.0
    }
}

/// Measures one execution of `workload`: collect, sample, run, collect, sample.
pub fn measure_heap_delta<P, F>(probe: &P, workload: F) -> MemoryReport
where
    P: HeapProbe + ?Sized,
    F: FnOnce(),
{
    probe.force_collect();
    let before = probe.heap_size();

    let elapsed = crate::core::time_once(workload);

    probe.force_collect();
    let after = probe.heap_size();

    MemoryReport {
        elapsed,
        memory_used: after as i64 - before as i64,
        final_heap_size: after,
    }
}
