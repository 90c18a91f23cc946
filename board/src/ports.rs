//! Sensor input ports and their software I2C adapters.
//!
//! Each input port has its own adapter, driven by the FIQ backend over two GPIO lines: pin 6 of
//! the connector carries SDA and a second GPIO carries SCL. The adapters get the fixed bus
//! numbers 3 to 6 so user space sees the same bus for a given port on every boot.
use crate::pins::*;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use platform::{
    device::{DeviceId, PlatformDevice},
    resource::GpioPin,
};

/// Device category the input port I2C driver binds to.
pub const I2C_LEGOEV3_NAME: &str = "i2c-legoev3";

/// Input port, as labelled on the brick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum PortId {
    In1 = 0,
    In2 = 1,
    In3 = 2,
    In4 = 3,
}

impl PortId {
    pub const ALL: [PortId; 4] = [PortId::In1, PortId::In2, PortId::In3, PortId::In4];

    /// Port number as printed on the brick, 1 to 4.
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// I2C bus number of the port's adapter.
    pub const fn bus_number(self) -> u32 {
        self as u32 + 3
    }
}

/// Platform data for one input port's I2C adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct I2cPortData {
    pub sda_pin: GpioPin,
    pub scl_pin: GpioPin,
    pub port_id: PortId,
}

impl I2cPortData {
    pub const fn for_port(port: PortId) -> I2cPortData {
        let (sda_pin, scl_pin) = match port {
            PortId::In1 => (EV3_IN1_PIN6_PIN, EV3_IN1_I2C_CLK_PIN),
            PortId::In2 => (EV3_IN2_PIN6_PIN, EV3_IN2_I2C_CLK_PIN),
            PortId::In3 => (EV3_IN3_PIN6_PIN, EV3_IN3_I2C_CLK_PIN),
            PortId::In4 => (EV3_IN4_PIN6_PIN, EV3_IN4_I2C_CLK_PIN),
        };
        I2cPortData {
            sda_pin,
            scl_pin,
            port_id: port,
        }
    }

    pub const fn pins(&self) -> [GpioPin; 2] {
        [self.sda_pin, self.scl_pin]
    }
}

// The driver keeps a reference to its port's record, so every port gets its own static.
pub static LEGOEV3_I2C3_DATA: I2cPortData = I2cPortData::for_port(PortId::In1);
pub static LEGOEV3_I2C4_DATA: I2cPortData = I2cPortData::for_port(PortId::In2);
pub static LEGOEV3_I2C5_DATA: I2cPortData = I2cPortData::for_port(PortId::In3);
pub static LEGOEV3_I2C6_DATA: I2cPortData = I2cPortData::for_port(PortId::In4);

pub static LEGOEV3_I2C3_DEVICE: PlatformDevice = PlatformDevice::new(
    I2C_LEGOEV3_NAME,
    DeviceId::Instance(PortId::In1.bus_number()),
    &LEGOEV3_I2C3_DATA,
);
pub static LEGOEV3_I2C4_DEVICE: PlatformDevice = PlatformDevice::new(
    I2C_LEGOEV3_NAME,
    DeviceId::Instance(PortId::In2.bus_number()),
    &LEGOEV3_I2C4_DATA,
);
pub static LEGOEV3_I2C5_DEVICE: PlatformDevice = PlatformDevice::new(
    I2C_LEGOEV3_NAME,
    DeviceId::Instance(PortId::In3.bus_number()),
    &LEGOEV3_I2C5_DATA,
);
pub static LEGOEV3_I2C6_DEVICE: PlatformDevice = PlatformDevice::new(
    I2C_LEGOEV3_NAME,
    DeviceId::Instance(PortId::In4.bus_number()),
    &LEGOEV3_I2C6_DATA,
);

/// Adapter device for `port`.
pub fn port_device(port: PortId) -> &'static PlatformDevice {
    match port {
        PortId::In1 => &LEGOEV3_I2C3_DEVICE,
        PortId::In2 => &LEGOEV3_I2C4_DEVICE,
        PortId::In3 => &LEGOEV3_I2C5_DEVICE,
        PortId::In4 => &LEGOEV3_I2C6_DEVICE,
    }
}
