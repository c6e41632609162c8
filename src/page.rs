/*!
page.rs - 256-entry page-handler memory map.

Overview
========
The core never owns RAM or ROM directly; it routes every byte access
through a table of 256 page handlers, one slot per possible high byte
of a 16-bit address. A handler may be installed across a contiguous
range of pages; every page in that range ends up pointing at the same
handler. Overlap policy is last-registration-wins per page, matching
the order a host actually calls `Cpu::add_page_handler`.

Unmapped pages read as zero and discard writes via `BlankPage`, the
default occupant of every slot before any handler is installed.

Reset registry
===============
Handlers are free to also care about `reset()` (e.g. a mapper that
needs to reinitialize bank state). `MemoryMap` keeps an ordered,
dedup-by-identity list of every distinct handler ever installed and
calls `reset()` on each of them, in registration order, when the CPU
resets. `PageHandler::reset` defaults to a no-op, so handlers that
don't care pay nothing.
*/

use std::cell::RefCell;
use std::rc::Rc;

/// A single owner of some range of the CPU's 64KiB address space.
///
/// Implementors are addressed by `(page, offset)` rather than a flat
/// 16-bit address: `page` is the high byte (0-255), `offset` is the low
/// byte (0-255). Reads must be pure with respect to the core's cycle
/// counter; the core calls `read`/`write` exactly once per bus access.
pub trait PageHandler {
    /// First page (inclusive) this handler owns.
    fn start(&self) -> u8;
    /// Last page (inclusive) this handler owns.
    fn end(&self) -> u8;

    fn read(&mut self, page: u8, offset: u8) -> u8;
    fn write(&mut self, page: u8, offset: u8, value: u8);

    /// Reinitialize handler-owned state on CPU reset. Most handlers
    /// (plain RAM, ROM) have nothing to do here.
    fn reset(&mut self) {}
}

/// A handler occupying every page it is asked about, always reading
/// zero and discarding writes. Installed in every slot before the host
/// registers anything.
pub struct BlankPage;

impl PageHandler for BlankPage {
    fn start(&self) -> u8 {
        0
    }
    fn end(&self) -> u8 {
        0xFF
    }
    fn read(&mut self, _page: u8, _offset: u8) -> u8 {
        0
    }
    fn write(&mut self, _page: u8, _offset: u8, _value: u8) {}
}

type HandlerRef = Rc<RefCell<dyn PageHandler>>;

/// Range displaced by a call to [`MemoryMap::add_page_handler`], one
/// entry per previously-distinct handler that lost at least one page.
/// Returned so a host can log an overlap if it cares to; the core
/// itself never logs (see SPEC_FULL.md section 10.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplacedRange {
    pub start: u8,
    pub end: u8,
}

pub struct MemoryMap {
    pages: Vec<HandlerRef>,
    reset_registry: Vec<HandlerRef>,
}

impl MemoryMap {
    pub fn new() -> Self {
        let blank: HandlerRef = Rc::new(RefCell::new(BlankPage));
        Self {
            pages: vec![blank; 256],
            reset_registry: Vec::new(),
        }
    }

    /// Install `handler` across `[start, end]` inclusive, overwriting
    /// whatever previously occupied those pages. Returns the inclusive
    /// ranges of every previously-distinct handler that was displaced,
    /// coalescing adjacent displaced pages that shared the same handler.
    pub fn add_page_handler(
        &mut self,
        handler: Rc<RefCell<dyn PageHandler>>,
        start: u8,
        end: u8,
    ) -> Vec<DisplacedRange> {
        let mut displaced: Vec<DisplacedRange> = Vec::new();
        let mut run: Option<(u8, u8)> = None; // (start, end) of current same-handler run
        let mut run_handler: Option<HandlerRef> = None;

        for page in start..=end {
            let previous = self.pages[page as usize].clone();
            let is_new_run = match &run_handler {
                Some(h) => !Rc::ptr_eq(h, &previous),
                None => true,
            };
            if is_new_run {
                if let (Some((s, e)), Some(h)) = (run, &run_handler) {
                    if !Rc::ptr_eq(h, &handler) {
                        displaced.push(DisplacedRange { start: s, end: e });
                    }
                }
                run = Some((page, page));
                run_handler = Some(previous);
            } else if let Some((s, _)) = run {
                run = Some((s, page));
            }
            self.pages[page as usize] = handler.clone();
        }
        if let (Some((s, e)), Some(h)) = (run, &run_handler) {
            if !Rc::ptr_eq(h, &handler) {
                displaced.push(DisplacedRange { start: s, end: e });
            }
        }

        if !self.reset_registry.iter().any(|h| Rc::ptr_eq(h, &handler)) {
            self.reset_registry.push(handler);
        }
        displaced
    }

    pub fn read(&self, page: u8, offset: u8) -> u8 {
        self.pages[page as usize].borrow_mut().read(page, offset)
    }

    pub fn write(&self, page: u8, offset: u8, value: u8) {
        self.pages[page as usize]
            .borrow_mut()
            .write(page, offset, value);
    }

    /// Run every registered handler's `reset()`, in registration order.
    pub fn reset_handlers(&self) {
        for handler in &self.reset_registry {
            handler.borrow_mut().reset();
        }
    }
}

impl Default for MemoryMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FlatRam {
        data: [u8; 256],
        resets: std::cell::Cell<u32>,
    }

    impl PageHandler for FlatRam {
        fn start(&self) -> u8 {
            0
        }
        fn end(&self) -> u8 {
            0
        }
        fn read(&mut self, _page: u8, offset: u8) -> u8 {
            self.data[offset as usize]
        }
        fn write(&mut self, _page: u8, offset: u8, value: u8) {
            self.data[offset as usize] = value;
        }
        fn reset(&mut self) {
            self.resets.set(self.resets.get() + 1);
        }
    }

    #[test]
    fn unmapped_pages_read_zero_and_discard_writes() {
        let map = MemoryMap::new();
        assert_eq!(map.read(0x12, 0x34), 0);
        map.write(0x12, 0x34, 0xFF);
        assert_eq!(map.read(0x12, 0x34), 0);
    }

    #[test]
    fn most_recent_registration_wins_on_overlap() {
        let mut map = MemoryMap::new();
        let a: HandlerRef = Rc::new(RefCell::new(FlatRam {
            data: [1; 256],
            resets: std::cell::Cell::new(0),
        }));
        let b: HandlerRef = Rc::new(RefCell::new(FlatRam {
            data: [2; 256],
            resets: std::cell::Cell::new(0),
        }));
        map.add_page_handler(a, 0x00, 0x00);
        map.add_page_handler(b, 0x00, 0x00);
        assert_eq!(map.read(0x00, 0x10), 2);
    }

    #[test]
    fn reset_registry_runs_each_handler_once_in_order() {
        let mut map = MemoryMap::new();
        let h = Rc::new(RefCell::new(FlatRam {
            data: [0; 256],
            resets: std::cell::Cell::new(0),
        }));
        let handler: HandlerRef = h.clone();
        map.add_page_handler(handler.clone(), 0x00, 0x01);
        map.add_page_handler(handler, 0x02, 0x03);
        map.reset_handlers();
        assert_eq!(h.borrow().resets.get(), 1);
    }

    #[test]
    fn overlap_reports_displaced_range() {
        let mut map = MemoryMap::new();
        let a: HandlerRef = Rc::new(RefCell::new(FlatRam {
            data: [1; 256],
            resets: std::cell::Cell::new(0),
        }));
        let b: HandlerRef = Rc::new(RefCell::new(FlatRam {
            data: [2; 256],
            resets: std::cell::Cell::new(0),
        }));
        map.add_page_handler(a, 0x40, 0x4F);
        let displaced = map.add_page_handler(b, 0x40, 0x4F);
        assert_eq!(displaced, vec![DisplacedRange { start: 0x40, end: 0x4F }]);
    }
}
