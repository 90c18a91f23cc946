//! Platform device management for board bring-up.
//!
//! Boards describe their hardware as static [device::PlatformDevice] records and hand them to the
//! [bus::PlatformBus]. Board profiles advertise themselves through a [machine::MachineDesc] in the
//! [machine::MACHINE_TABLE], which the boot front end matches against the running hardware.
#![cfg_attr(not(test), no_std)]
extern crate alloc;

#[macro_use]
pub mod console;
#[macro_use]
pub mod panic;
#[macro_use]
pub mod logging;

pub mod bus;
pub mod device;
pub mod driver;
pub mod error;
pub mod handle;
pub mod machine;
pub mod resource;
