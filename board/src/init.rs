//! Board device bring-up.
//!
//! [bring_up] runs once per boot, before anything else is running, and attempts every entry of
//! [BOARD_DEVICES] exactly once, in order. A device the platform refuses is reported and
//! skipped; the remaining devices are still registered, so a board with one bad port still
//! boots with the other three.
use crate::{fiq::LEGOEV3_FIQ_DEVICE, ports::*, soc};
use alloc::vec::Vec;
use core::fmt::{Display, Formatter};
use log::{info, warn};
use platform::{
    bus::{PLATFORM_BUS, PlatformBus},
    device::PlatformDevice,
    error::RegisterError,
};

/// What bring-up needs from the platform.
pub trait BoardServices {
    /// Power-management bring-up. Fatal failures are its own business.
    fn pm_init(&self);
    /// Platform data quirks. Same contract as [BoardServices::pm_init].
    fn quirks_init(&self);
    /// Hand `dev` to the registration service.
    fn register(&self, dev: &'static PlatformDevice) -> Result<(), RegisterError>;
    /// Emit a diagnostic for a device that failed to register.
    fn report(&self, diag: &Diagnostic) {
        warn!("{}", diag);
    }
}

/// A board device and how diagnostics refer to it.
#[derive(Debug, Clone, Copy)]
pub struct BoardDevice {
    pub label: &'static str,
    pub device: &'static PlatformDevice,
}

/// Everything [bring_up] registers, in registration order.
pub static BOARD_DEVICES: [BoardDevice; 5] = [
    BoardDevice {
        label: "FIQ I2C backend",
        device: &LEGOEV3_FIQ_DEVICE,
    },
    BoardDevice {
        label: "Input port 1 I2C",
        device: &LEGOEV3_I2C3_DEVICE,
    },
    BoardDevice {
        label: "Input port 2 I2C",
        device: &LEGOEV3_I2C4_DEVICE,
    },
    BoardDevice {
        label: "Input port 3 I2C",
        device: &LEGOEV3_I2C5_DEVICE,
    },
    BoardDevice {
        label: "Input port 4 I2C",
        device: &LEGOEV3_I2C6_DEVICE,
    },
];

/// A registration failure, naming the device and the failure code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic {
    pub label: &'static str,
    pub error: RegisterError,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "legoev3_init_machine: {} registration failed: {}",
            self.label,
            self.error.code()
        )
    }
}

/// One registration attempt and its outcome.
#[derive(Debug, Clone, Copy)]
pub struct Attempt {
    pub device: BoardDevice,
    pub result: Result<(), RegisterError>,
}

/// What happened during [bring_up].
#[derive(Debug, Default)]
pub struct BringUpReport {
    pub attempts: Vec<Attempt>,
    pub diagnostics: Vec<Diagnostic>,
}

impl BringUpReport {
    pub fn registered(&self) -> usize {
        self.attempts.iter().filter(|a| a.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.attempts.len() - self.registered()
    }
}

/// Bring up the board's devices: power management, quirks, then every [BOARD_DEVICES] entry.
pub fn bring_up<S: BoardServices + ?Sized>(services: &S) -> BringUpReport {
    services.pm_init();
    services.quirks_init();

    let mut report = BringUpReport::default();
    for entry in BOARD_DEVICES.iter() {
        let result = services.register(entry.device);
        if let Err(error) = result {
            let diag = Diagnostic {
                label: entry.label,
                error,
            };
            services.report(&diag);
            report.diagnostics.push(diag);
        }
        report.attempts.push(Attempt {
            device: *entry,
            result,
        });
    }
    report
}

/// [BoardServices] backed by the SoC hooks and a [PlatformBus].
pub struct PlatformServices<'a> {
    bus: &'a PlatformBus,
}

impl<'a> PlatformServices<'a> {
    pub fn new(bus: &'a PlatformBus) -> PlatformServices<'a> {
        PlatformServices { bus }
    }
}

impl BoardServices for PlatformServices<'_> {
    fn pm_init(&self) {
        soc::davinci_pm_init();
    }

    fn quirks_init(&self) {
        soc::pdata_quirks_init();
    }

    fn register(&self, dev: &'static PlatformDevice) -> Result<(), RegisterError> {
        self.bus.register(dev).map(|_| ())
    }
}

/// Machine entry point: bring up the board against the system platform bus.
pub fn legoev3_init_machine() {
    let report = bring_up(&PlatformServices::new(&PLATFORM_BUS));
    info!(
        "EV3: {} of {} board devices registered.",
        report.registered(),
        report.attempts.len()
    );
}
