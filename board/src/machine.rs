//! The EV3 machine profile.
use crate::{init::legoev3_init_machine, soc};
use platform::machine::{MachineDesc, MachineTable};

pub const LEGOEV3_DT_COMPAT: &[&str] = &["lego,ev3"];

pub static LEGOEV3_MACHINE: MachineDesc = MachineDesc {
    name: "LEGO MINDSTORMS EV3",
    dt_compat: LEGOEV3_DT_COMPAT,
    map_io: Some(soc::da850_map_io),
    init_machine: legoev3_init_machine,
    init_late: Some(soc::davinci_init_late),
};

/// Add the EV3 profile to `table`, normally [platform::machine::MACHINE_TABLE]. Call once.
pub fn register(table: &MachineTable) {
    table.register(&LEGOEV3_MACHINE);
}
