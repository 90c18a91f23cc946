//! Board support for the LEGO MINDSTORMS EV3 (TI DA850).
//!
//! Describes the board's fixed hardware layout as static data, and registers its devices with the
//! platform bus at boot:
//!
//! - the FIQ backend ([fiq]) that bit-bangs the input port I2C lines from a fast interrupt,
//! - one software I2C adapter per sensor input port ([ports]).
//!
//! [machine::register] adds the board profile to the machine table; the boot front end then calls
//! [init::legoev3_init_machine] through it.
#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod fiq;
pub mod init;
pub mod machine;
pub mod pins;
pub mod ports;
pub mod soc;
