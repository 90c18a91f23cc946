//! Platform drivers and the registry that matches them to devices.
//!
//! A driver binds to every device whose category equals [PlatformDriver::get_name]. Drivers are
//! `&'static` and are never unregistered.
use crate::{debug_ex, device::PlatformDevice, error::ProbeError};
use alloc::{collections::btree_map::BTreeMap, vec, vec::Vec};
use core::fmt::Debug;
use spin::RwLock;

/// Trait implemented by drivers for board-described devices.
///
/// - [PlatformDriver::probe] receives the registration record; the driver reads its hardware
///   description through [PlatformDevice::platform_data]. Return `Ok(())` to bind.
/// - [PlatformDriver::on_registered] runs once when the driver is added to a bus.
pub trait PlatformDriver: Sync + Debug {
    fn get_name(&self) -> &'static str;
    fn probe(&self, dev: &PlatformDevice) -> Result<(), ProbeError>;
    fn on_registered(&self) {}
}

/// Category name to candidate drivers, in registration order.
#[derive(Debug, Default)]
pub struct DriverTable {
    map: RwLock<BTreeMap<&'static str, Vec<&'static dyn PlatformDriver>>>,
}

impl DriverTable {
    pub const fn new() -> DriverTable {
        DriverTable {
            map: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn insert(&self, driver: &'static dyn PlatformDriver) {
        debug_ex!("\tRegistered driver '{}'.", driver.get_name());
        self.map
            .write()
            .entry(driver.get_name())
            .or_default()
            .push(driver);
    }

    /// Drivers for `name`, copied out so no lock is held while probing.
    pub fn find_drivers(&self, name: &str) -> Vec<&'static dyn PlatformDriver> {
        match self.map.read().get(name) {
            Some(drivers) => drivers.clone(),
            None => vec![],
        }
    }
}
