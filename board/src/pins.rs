//! GPIO pin map.
//!
//! No two devices may claim the same pin. The assertion at the bottom of this file checks every
//! assignment at build time; nothing re-checks it while booting.
use crate::{
    fiq::FiqPlatformData,
    ports::{I2cPortData, PortId},
};
use platform::resource::GpioPin;

/// FIQ status pin (TP4). The FIQ handler toggles it to tell the kernel that port state changed.
pub const EV3_FIQ_STAT_PIN: GpioPin = GpioPin::from_bank(2, 7);

pub const EV3_IN1_PIN6_PIN: GpioPin = GpioPin::from_bank(0, 15);
pub const EV3_IN1_I2C_CLK_PIN: GpioPin = GpioPin::from_bank(1, 0);
pub const EV3_IN2_PIN6_PIN: GpioPin = GpioPin::from_bank(0, 13);
pub const EV3_IN2_I2C_CLK_PIN: GpioPin = GpioPin::from_bank(8, 3);
pub const EV3_IN3_PIN6_PIN: GpioPin = GpioPin::from_bank(1, 14);
pub const EV3_IN3_I2C_CLK_PIN: GpioPin = GpioPin::from_bank(1, 12);
pub const EV3_IN4_PIN6_PIN: GpioPin = GpioPin::from_bank(1, 15);
pub const EV3_IN4_I2C_CLK_PIN: GpioPin = GpioPin::from_bank(1, 11);

/// Every pin claimed by a board device, gathered from the device descriptors.
pub const fn claimed_pins() -> [GpioPin; 9] {
    let fiq = FiqPlatformData::board().pins();
    let mut pins = [fiq[0]; 9];
    let mut n = fiq.len();
    let mut i = 0;
    while i < PortId::ALL.len() {
        let port = I2cPortData::for_port(PortId::ALL[i]).pins();
        pins[n] = port[0];
        pins[n + 1] = port[1];
        n += 2;
        i += 1;
    }
    pins
}

const _: () = assert!(
    GpioPin::all_distinct(&claimed_pins()),
    "two board devices claim the same GPIO pin"
);
