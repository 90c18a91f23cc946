//! The platform bus: the registration service boards hand their devices to.
//!
//! [PlatformBus::register] validates a [PlatformDevice], gives it a unique name, attaches it under
//! the bus root and binds a matching driver if one is registered. Devices are never removed.
use crate::{
    debug_ex,
    device::{Device, PlatformDevice},
    driver::{DriverTable, PlatformDriver},
    error::RegisterError,
    handle::{Handle, HandleRef},
};
use alloc::{boxed::Box, collections::btree_map::BTreeMap, vec::Vec};
use lazy_static::lazy_static;
use log::warn;
use spin::RwLock;

/// Longest accepted category name, in bytes.
pub const MAX_NAME_LEN: usize = 32;

#[derive(Debug)]
pub struct PlatformBus {
    root: Handle<Device>,
    by_name: RwLock<BTreeMap<Box<str>, HandleRef<Device>>>,
    drivers: DriverTable,
}

impl PlatformBus {
    pub fn new() -> PlatformBus {
        PlatformBus {
            root: Device::new_root("platform"),
            by_name: RwLock::new(BTreeMap::new()),
            drivers: DriverTable::new(),
        }
    }

    /// Register `pdev` and return a weak reference to its device node.
    ///
    /// Fails with [RegisterError::InvalidName] for a malformed category and with
    /// [RegisterError::Exists] when a device of the same name is already present. A driver that
    /// fails to probe leaves the device registered but unbound.
    pub fn register(&self, pdev: &PlatformDevice) -> Result<HandleRef<Device>, RegisterError> {
        let category = pdev.name();
        if category.is_empty() || category.len() > MAX_NAME_LEN || category.contains('/') {
            return Err(RegisterError::InvalidName);
        }
        let dev_name = pdev.dev_name();

        let device = {
            let mut names = self.by_name.write();
            if names.contains_key(dev_name.as_str()) {
                return Err(RegisterError::Exists);
            }
            let device = Device::new_child(&self.root, &dev_name, *pdev);
            names.insert(Box::from(dev_name.as_str()), device.create_ref());
            self.root.children.write().push(device.clone());
            device
        };
        debug_ex!("Registered platform device '{}'.", dev_name);

        self.probe_device(&device);
        Ok(device.create_ref())
    }

    /// Add `driver` and bind it to any unbound devices of its category.
    pub fn register_driver(&self, driver: &'static dyn PlatformDriver) {
        self.drivers.insert(driver);
        driver.on_registered();
        let pending: Vec<Handle<Device>> = self
            .root
            .children
            .read()
            .iter()
            .filter(|dev| {
                dev.driver().is_none()
                    && dev
                        .platform_device()
                        .is_some_and(|p| p.name() == driver.get_name())
            })
            .cloned()
            .collect();
        for dev in pending {
            self.try_bind(&dev, driver);
        }
    }

    fn probe_device(&self, dev: &Handle<Device>) {
        let Some(pdev) = dev.platform_device() else {
            return;
        };
        for driver in self.drivers.find_drivers(pdev.name()) {
            if self.try_bind(dev, driver) {
                break;
            }
        }
    }

    fn try_bind(&self, dev: &Handle<Device>, driver: &'static dyn PlatformDriver) -> bool {
        let Some(pdev) = dev.platform_device() else {
            return false;
        };
        match driver.probe(pdev) {
            Ok(()) => {
                debug_ex!("Bound '{}' to driver '{}'.", dev.name, driver.get_name());
                dev.bind(driver)
            }
            Err(err) => {
                warn!("{}: probe of {} failed: {}", driver.get_name(), dev.name, err);
                false
            }
        }
    }

    /// Look up a registered device by its unique name.
    pub fn find(&self, dev_name: &str) -> Option<Handle<Device>> {
        self.by_name.read().get(dev_name)?.get_handle()
    }

    /// Names of all registered devices, in registration order.
    pub fn device_names(&self) -> Vec<Box<str>> {
        self.root
            .children
            .read()
            .iter()
            .map(|dev| dev.name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.root.children.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PlatformBus {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static! {
    /// The bus that board code registers into.
    pub static ref PLATFORM_BUS: PlatformBus = PlatformBus::new();
}
