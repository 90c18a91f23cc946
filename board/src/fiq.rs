//! The FIQ backend shared by all input ports.
//!
//! One fast-interrupt handler services the software I2C lines of all four ports. It needs the
//! interrupt controller, GPIO and EHRPWM register windows, a timer and a PWM interrupt, and a
//! status pin it drives to signal the kernel.
use crate::{pins::EV3_FIQ_STAT_PIN, soc::*};
use platform::{
    device::{DeviceId, PlatformDevice},
    resource::{GpioPin, IoWindow, Irq, windows_disjoint},
};

/// Device category the FIQ backend driver binds to.
pub const LEGOEV3_FIQ_NAME: &str = "legoev3-fiq";

/// Platform data for the FIQ backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiqPlatformData {
    pub intc_mem: IoWindow,
    pub gpio_mem: IoWindow,
    pub ehrpwm_mem: IoWindow,
    pub timer_irq: Irq,
    pub ehrpwm_irq: Irq,
    pub status_gpio: GpioPin,
}

impl FiqPlatformData {
    /// The EV3's values.
    pub const fn board() -> FiqPlatformData {
        FiqPlatformData {
            intc_mem: IoWindow::new(DA8XX_CP_INTC_BASE, 0x608),
            gpio_mem: IoWindow::new(DA8XX_GPIO_BASE, 0xd8),
            ehrpwm_mem: IoWindow::new(DA8XX_EHRPWM0_BASE, 0x1fff),
            timer_irq: IRQ_DA8XX_TINT34_1,
            ehrpwm_irq: IRQ_DA8XX_EHRPWM0,
            status_gpio: EV3_FIQ_STAT_PIN,
        }
    }

    pub const fn pins(&self) -> [GpioPin; 1] {
        [self.status_gpio]
    }
}

const _: () = {
    let data = FiqPlatformData::board();
    assert!(
        windows_disjoint(&[&data.intc_mem, &data.gpio_mem, &data.ehrpwm_mem]),
        "FIQ register windows overlap"
    );
    assert!(data.timer_irq.0 != data.ehrpwm_irq.0, "FIQ interrupts collide");
};

pub static LEGOEV3_FIQ_DATA: FiqPlatformData = FiqPlatformData::board();

pub static LEGOEV3_FIQ_DEVICE: PlatformDevice =
    PlatformDevice::new(LEGOEV3_FIQ_NAME, DeviceId::None, &LEGOEV3_FIQ_DATA);
