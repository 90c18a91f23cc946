//! Hardware resource values carried by platform data: register windows, interrupt lines and
//! GPIO pins.
//!
//! Everything here is `const`-constructible so boards can describe their layout as static data
//! and check it with `const` assertions.
use core::{fmt::Debug, ops::Range};
use utils::impl_basic;

/// GPIO lines per bank on the controller.
pub const GPIO_PER_BANK: u16 = 16;

/// A memory-mapped register window `[base, base + size)`.
#[derive(Clone, PartialEq, Eq)]
pub struct IoWindow {
    inner: Range<usize>,
}

impl_basic!(IoWindow, Range<usize>);

impl IoWindow {
    pub const fn new(base: usize, size: usize) -> IoWindow {
        IoWindow {
            inner: base..base + size,
        }
    }

    pub const fn base(&self) -> usize {
        self.inner.start
    }

    pub const fn size(&self) -> usize {
        self.inner.end - self.inner.start
    }

    pub const fn end(&self) -> usize {
        self.inner.end
    }

    pub const fn overlaps(&self, other: &IoWindow) -> bool {
        self.inner.start < other.inner.end && other.inner.start < self.inner.end
    }
}

impl Debug for IoWindow {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("[{:#x},{:#x})", self.start, self.end))
    }
}

/// Interrupt line number on the SoC interrupt controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Irq(pub u32);

/// Flat GPIO pin number, `bank * 16 + offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GpioPin(pub u16);

impl GpioPin {
    pub const fn from_bank(bank: u16, offset: u16) -> GpioPin {
        GpioPin(GPIO_PER_BANK * bank + offset)
    }

    pub const fn bank(&self) -> u16 {
        self.0 / GPIO_PER_BANK
    }

    pub const fn offset(&self) -> u16 {
        self.0 % GPIO_PER_BANK
    }

    /// Whether no pin number appears twice in `pins`.
    pub const fn all_distinct(pins: &[GpioPin]) -> bool {
        let mut i = 0;
        while i < pins.len() {
            let mut j = i + 1;
            while j < pins.len() {
                if pins[i].0 == pins[j].0 {
                    return false;
                }
                j += 1;
            }
            i += 1;
        }
        true
    }
}

/// Whether no two windows in `windows` overlap.
pub const fn windows_disjoint(windows: &[&IoWindow]) -> bool {
    let mut i = 0;
    while i < windows.len() {
        let mut j = i + 1;
        while j < windows.len() {
            if windows[i].overlaps(windows[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}
