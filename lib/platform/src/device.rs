//! Device records handed to the registration service, and the nodes the bus builds from them.
use crate::{driver::PlatformDriver, handle::{Handle, HandleRef}};
use alloc::{boxed::Box, format, string::String, vec, vec::Vec};
use core::{any::Any, fmt::Debug};
use spin::{Once, RwLock};

/// Instance number of a platform device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceId {
    /// The only device of its category; named by the category alone.
    None,
    /// One of several devices of the same category.
    Instance(u32),
}

impl DeviceId {
    /// Raw identity as the device model stores it, with `-1` for [DeviceId::None].
    pub const fn raw(&self) -> i32 {
        match self {
            DeviceId::None => -1,
            DeviceId::Instance(n) => *n as i32,
        }
    }
}

/// Board-supplied description of a device's hardware, read by the bound driver.
///
/// Implemented for every `'static` `Debug + Sync` type. Drivers recover the concrete type with
/// [PlatformDevice::platform_data].
pub trait PlatformData: Any + Debug + Sync {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + Debug + Sync> PlatformData for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A device registration record: category name, identity and a reference to the board's data.
///
/// The platform data is borrowed for `'static`; the bus keeps the reference for as long as the
/// device exists, which on a board is forever.
#[derive(Debug, Clone, Copy)]
pub struct PlatformDevice {
    name: &'static str,
    id: DeviceId,
    data: &'static dyn PlatformData,
}

impl PlatformDevice {
    pub const fn new(
        name: &'static str,
        id: DeviceId,
        data: &'static dyn PlatformData,
    ) -> PlatformDevice {
        PlatformDevice { name, id, data }
    }

    /// Device category; drivers bind by this name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn id(&self) -> DeviceId {
        self.id
    }

    /// Unique name within the bus: `name` or `name.id`.
    pub fn dev_name(&self) -> String {
        match self.id {
            DeviceId::None => String::from(self.name),
            DeviceId::Instance(n) => format!("{}.{}", self.name, n),
        }
    }

    pub fn platform_data<T: Any>(&self) -> Option<&'static T> {
        let data: &'static dyn PlatformData = self.data;
        data.as_any().downcast_ref::<T>()
    }

    /// Whether `self` carries exactly the data object at `data`.
    pub fn carries<T: Any>(&self, data: &'static T) -> bool {
        self.platform_data::<T>()
            .is_some_and(|own| core::ptr::eq(own, data))
    }
}

/// A node in the bus's device tree.
#[derive(Debug)]
pub struct Device {
    pub name: Box<str>,
    pub parent: Option<HandleRef<Device>>,
    pub children: RwLock<Vec<Handle<Device>>>,
    pdev: Option<PlatformDevice>,
    driver: Once<&'static dyn PlatformDriver>,
}

impl Device {
    pub(crate) fn new_root(name: &str) -> Handle<Device> {
        Handle::from(Device {
            name: Box::from(name),
            parent: None,
            children: RwLock::new(vec![]),
            pdev: None,
            driver: Once::new(),
        })
    }

    pub(crate) fn new_child(
        parent: &Handle<Device>,
        name: &str,
        pdev: PlatformDevice,
    ) -> Handle<Device> {
        Handle::from(Device {
            name: Box::from(name),
            parent: Some(parent.create_ref()),
            children: RwLock::new(vec![]),
            pdev: Some(pdev),
            driver: Once::new(),
        })
    }

    /// The registration record this node was built from; [None] for the bus root.
    pub fn platform_device(&self) -> Option<&PlatformDevice> {
        self.pdev.as_ref()
    }

    pub fn driver(&self) -> Option<&'static dyn PlatformDriver> {
        self.driver.get().copied()
    }

    /// Record `driver` as bound. Return `false` if a driver was already bound.
    pub(crate) fn bind(&self, driver: &'static dyn PlatformDriver) -> bool {
        let mut bound = false;
        self.driver.call_once(|| {
            bound = true;
            driver
        });
        bound
    }
}
