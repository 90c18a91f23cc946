//! DA850 SoC constants and the SoC-level hooks the board profile calls into.
use platform::{debug_ex, resource::Irq};

/// ARM interrupt controller (cp_intc).
pub const DA8XX_CP_INTC_BASE: usize = 0xfffe_e000;
/// GPIO controller, all banks.
pub const DA8XX_GPIO_BASE: usize = 0x01e2_6000;
/// Enhanced high-resolution PWM, instance 0.
pub const DA8XX_EHRPWM0_BASE: usize = 0x01f0_0000;

/// Timer64P1, TINT34 output.
pub const IRQ_DA8XX_TINT34_1: Irq = Irq(24);
/// EHRPWM0 event interrupt.
pub const IRQ_DA8XX_EHRPWM0: Irq = Irq(63);

/// Static I/O mappings for the DA850.
pub fn da850_map_io() {
    debug_ex!("da850: static I/O mappings set up.");
}

/// Power-management bring-up.
pub fn davinci_pm_init() {
    debug_ex!("davinci: power management initialized.");
}

/// Platform data quirks for devices that are not yet fully described by the device tree.
pub fn pdata_quirks_init() {
    debug_ex!("davinci: platform data quirks applied.");
}

/// Late initcall work, after all board devices are registered.
pub fn davinci_init_late() {
    debug_ex!("davinci: late init done.");
}
