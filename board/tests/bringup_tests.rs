use std::cell::RefCell;
use std::collections::HashSet;
use std::sync::Mutex;

use ev3_board::fiq::{FiqPlatformData, LEGOEV3_FIQ_DATA, LEGOEV3_FIQ_DEVICE};
use ev3_board::init::{BOARD_DEVICES, BoardServices, Diagnostic, PlatformServices, bring_up};
use ev3_board::pins::claimed_pins;
use ev3_board::ports::{I2cPortData, PortId, port_device};
use ev3_board::machine;
use platform::bus::{PLATFORM_BUS, PlatformBus};
use platform::device::{DeviceId, PlatformDevice};
use platform::driver::PlatformDriver;
use platform::error::{ProbeError, RegisterError};
use platform::machine::MachineTable;
use platform::resource::GpioPin;

// ---------------------------------------------------------------------------
// Mock services
// ---------------------------------------------------------------------------

/// Records every call; registration of `BOARD_DEVICES[i]` fails when bit `i` of `fail_mask` is set.
struct MockServices {
    fail_mask: u8,
    calls: RefCell<Vec<String>>,
    reports: RefCell<Vec<Diagnostic>>,
}

impl MockServices {
    fn failing(fail_mask: u8) -> Self {
        Self {
            fail_mask,
            calls: RefCell::new(Vec::new()),
            reports: RefCell::new(Vec::new()),
        }
    }

    fn registrations(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| c.strip_prefix("register ").map(String::from))
            .collect()
    }
}

fn index_of(dev: &PlatformDevice) -> usize {
    BOARD_DEVICES
        .iter()
        .position(|d| std::ptr::eq(d.device, dev))
        .expect("unknown device")
}

/// Distinct failure code per device, so diagnostics can be traced back.
fn code_for(index: usize) -> RegisterError {
    RegisterError::Other(-100 - index as i32)
}

impl BoardServices for MockServices {
    fn pm_init(&self) {
        self.calls.borrow_mut().push("pm_init".into());
    }

    fn quirks_init(&self) {
        self.calls.borrow_mut().push("quirks_init".into());
    }

    fn register(&self, dev: &'static PlatformDevice) -> Result<(), RegisterError> {
        self.calls
            .borrow_mut()
            .push(format!("register {}", dev.dev_name()));
        let index = index_of(dev);
        if self.fail_mask & (1 << index) != 0 {
            Err(code_for(index))
        } else {
            Ok(())
        }
    }

    fn report(&self, diag: &Diagnostic) {
        self.reports.borrow_mut().push(*diag);
    }
}

const ORDER: [&str; 5] = [
    "legoev3-fiq",
    "i2c-legoev3.3",
    "i2c-legoev3.4",
    "i2c-legoev3.5",
    "i2c-legoev3.6",
];

// ---------------------------------------------------------------------------
// Sequencing
// ---------------------------------------------------------------------------

#[test]
fn all_registrations_succeed() {
    let svc = MockServices::failing(0);
    let report = bring_up(&svc);

    assert_eq!(
        *svc.calls.borrow(),
        [
            "pm_init",
            "quirks_init",
            "register legoev3-fiq",
            "register i2c-legoev3.3",
            "register i2c-legoev3.4",
            "register i2c-legoev3.5",
            "register i2c-legoev3.6",
        ]
    );
    assert_eq!(report.registered(), 5);
    assert_eq!(report.failed(), 0);
    assert!(report.diagnostics.is_empty());
    assert!(svc.reports.borrow().is_empty());
}

#[test]
fn port3_failure_does_not_stop_other_ports() {
    let svc = MockServices::failing(1 << 3);
    let report = bring_up(&svc);

    assert_eq!(svc.registrations(), ORDER);
    assert_eq!(report.registered(), 4);
    let reports = svc.reports.borrow();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].label, "Input port 3 I2C");
    assert_eq!(reports[0].error.code(), -103);
    assert!(report.attempts[3].result.is_err());
    for i in [0, 1, 2, 4] {
        assert!(report.attempts[i].result.is_ok());
    }
}

#[test]
fn fiq_failure_still_attempts_all_ports() {
    let svc = MockServices::failing(1);
    let report = bring_up(&svc);

    assert_eq!(svc.registrations(), ORDER);
    assert_eq!(report.registered(), 4);
    assert_eq!(
        *svc.reports.borrow(),
        [Diagnostic {
            label: "FIQ I2C backend",
            error: code_for(0),
        }]
    );
}

#[test]
fn every_failure_subset_attempts_all_devices() {
    for mask in 0u8..32 {
        let svc = MockServices::failing(mask);
        let report = bring_up(&svc);

        assert_eq!(svc.registrations(), ORDER, "mask {:05b}", mask);
        assert_eq!(report.attempts.len(), 5);
        assert_eq!(report.failed(), mask.count_ones() as usize);

        let expected: Vec<Diagnostic> = (0..5)
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| Diagnostic {
                label: BOARD_DEVICES[i].label,
                error: code_for(i),
            })
            .collect();
        assert_eq!(*svc.reports.borrow(), expected, "mask {:05b}", mask);
        assert_eq!(report.diagnostics, expected);
    }
}

#[test]
fn order_does_not_depend_on_earlier_failures() {
    let first = MockServices::failing(0b10110);
    bring_up(&first);
    let second = MockServices::failing(0);
    bring_up(&second);
    assert_eq!(first.registrations(), second.registrations());
}

#[test]
fn diagnostic_message_names_device_and_code() {
    let diag = Diagnostic {
        label: "Input port 2 I2C",
        error: RegisterError::Exists,
    };
    assert_eq!(
        diag.to_string(),
        "legoev3_init_machine: Input port 2 I2C registration failed: -17"
    );
}

// ---------------------------------------------------------------------------
// Descriptors
// ---------------------------------------------------------------------------

#[test]
fn pins_are_pairwise_disjoint() {
    let mut pins: Vec<GpioPin> = LEGOEV3_FIQ_DATA.pins().to_vec();
    for port in PortId::ALL {
        let data = port_device(port).platform_data::<I2cPortData>().unwrap();
        pins.extend(data.pins());
    }
    let unique: HashSet<GpioPin> = pins.iter().copied().collect();
    assert_eq!(pins.len(), 9);
    assert_eq!(unique.len(), 9);
    let claimed: HashSet<GpioPin> = claimed_pins().into_iter().collect();
    assert_eq!(unique, claimed);
}

#[test]
fn port_identities_are_unique() {
    let ids: Vec<PortId> = BOARD_DEVICES[1..]
        .iter()
        .map(|d| d.device.platform_data::<I2cPortData>().unwrap().port_id)
        .collect();
    assert_eq!(ids, PortId::ALL);
}

#[test]
fn descriptor_construction_is_idempotent() {
    assert_eq!(FiqPlatformData::board(), FiqPlatformData::board());
    for port in PortId::ALL {
        assert_eq!(I2cPortData::for_port(port), I2cPortData::for_port(port));
    }
}

// ---------------------------------------------------------------------------
// Against the platform bus
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct PortDriver {
    bound: Mutex<Vec<PortId>>,
}

impl PlatformDriver for PortDriver {
    fn get_name(&self) -> &'static str {
        "i2c-legoev3"
    }

    fn probe(&self, dev: &PlatformDevice) -> Result<(), ProbeError> {
        let data = dev
            .platform_data::<I2cPortData>()
            .ok_or(ProbeError::MissingPlatformData)?;
        self.bound.lock().unwrap().push(data.port_id);
        Ok(())
    }
}

#[test]
fn registers_into_bus_and_binds_port_driver() {
    static DRIVER: PortDriver = PortDriver {
        bound: Mutex::new(Vec::new()),
    };
    let bus = PlatformBus::new();
    bus.register_driver(&DRIVER);

    let report = bring_up(&PlatformServices::new(&bus));
    assert_eq!(report.registered(), 5);
    let names = bus.device_names();
    assert_eq!(names.iter().map(|n| &**n).collect::<Vec<_>>(), ORDER);
    assert_eq!(*DRIVER.bound.lock().unwrap(), PortId::ALL);

    let fiq = bus.find("legoev3-fiq").unwrap();
    assert!(fiq.platform_device().unwrap().carries(&LEGOEV3_FIQ_DATA));
    assert!(fiq.driver().is_none());
    assert!(bus.find("i2c-legoev3.5").unwrap().driver().is_some());
}

#[test]
fn identity_collision_skips_only_that_port() {
    #[derive(Debug)]
    struct Squatter;
    static SQUATTER: Squatter = Squatter;

    let bus = PlatformBus::new();
    bus.register(&PlatformDevice::new(
        "i2c-legoev3",
        DeviceId::Instance(5),
        &SQUATTER,
    ))
    .unwrap();

    let report = bring_up(&PlatformServices::new(&bus));
    assert_eq!(report.registered(), 4);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].label, "Input port 3 I2C");
    assert_eq!(report.diagnostics[0].error, RegisterError::Exists);
    // The earlier registration keeps the name.
    let dev = bus.find("i2c-legoev3.5").unwrap();
    assert!(dev.platform_device().unwrap().platform_data::<Squatter>().is_some());
    assert!(bus.find("i2c-legoev3.6").is_some());
}

#[test]
fn second_bring_up_on_same_bus_fails_every_device() {
    let bus = PlatformBus::new();
    let first = bring_up(&PlatformServices::new(&bus));
    let second = bring_up(&PlatformServices::new(&bus));
    assert_eq!(first.failed(), 0);
    assert_eq!(second.failed(), 5);
    assert!(
        second
            .diagnostics
            .iter()
            .all(|d| d.error == RegisterError::Exists)
    );
    assert_eq!(bus.len(), 5);
}

#[test]
fn machine_profile_boots_board() {
    let table = MachineTable::new();
    machine::register(&table);

    let desc = table.boot(&["lego,ev3", "ti,da850"]).unwrap();
    assert_eq!(desc.name, "LEGO MINDSTORMS EV3");
    assert_eq!(desc.dt_compat, ["lego,ev3"]);
    assert_eq!(PLATFORM_BUS.len(), 5);
    assert!(PLATFORM_BUS.find("legoev3-fiq").is_some());
    assert!(PLATFORM_BUS.find("i2c-legoev3.6").is_some());
    assert!(table.boot(&["lego,ev3"]).is_err());
    assert!(std::ptr::eq(LEGOEV3_FIQ_DEVICE.platform_data::<FiqPlatformData>().unwrap(), &LEGOEV3_FIQ_DATA));
}
