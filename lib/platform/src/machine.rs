//! Machine profiles and the table the boot front end selects from.
//!
//! Each board contributes one static [MachineDesc]. Early boot registers it into
//! [MACHINE_TABLE]; [MachineTable::boot] then picks the profile matching the hardware's root
//! compatible list and runs its hooks. Selection happens once per boot and is never undone.
use crate::error::MachineError;
use log::info;
use spin::Once;
use utils::vec::LockedVecStatic;

/// Static description of a board profile.
#[derive(Debug)]
pub struct MachineDesc {
    /// Human readable model name.
    pub name: &'static str,
    /// Compatible identifiers this profile answers to.
    pub dt_compat: &'static [&'static str],
    /// Static I/O mappings, run before [MachineDesc::init_machine].
    pub map_io: Option<fn()>,
    /// Board device bring-up.
    pub init_machine: fn(),
    /// Runs after [MachineDesc::init_machine] returns.
    pub init_late: Option<fn()>,
}

impl MachineDesc {
    pub fn is_compatible(&self, compat: &str) -> bool {
        self.dt_compat.iter().any(|c| *c == compat)
    }
}

pub struct MachineTable {
    machines: LockedVecStatic<&'static MachineDesc>,
    booted: Once<&'static MachineDesc>,
}

impl MachineTable {
    pub const fn new() -> MachineTable {
        MachineTable {
            machines: LockedVecStatic::new(),
            booted: Once::new(),
        }
    }

    pub fn register(&self, desc: &'static MachineDesc) {
        self.machines.push(desc);
    }

    /// Find the profile for hardware whose compatible list is `board_compat`, most specific
    /// entry first. Earlier entries win; ties go to the earlier registered profile.
    pub fn match_compatible(&self, board_compat: &[&str]) -> Option<&'static MachineDesc> {
        let machines = self.machines.snapshot();
        board_compat.iter().find_map(|compat| {
            machines
                .iter()
                .map(|desc| **desc)
                .find(|desc| desc.is_compatible(compat))
        })
    }

    /// Select the matching profile and run `map_io`, `init_machine` and `init_late` in order.
    pub fn boot(&self, board_compat: &[&str]) -> Result<&'static MachineDesc, MachineError> {
        if self.booted.get().is_some() {
            return Err(MachineError::AlreadyBooted);
        }
        let desc = self
            .match_compatible(board_compat)
            .ok_or(MachineError::NoMatch)?;
        let mut first = false;
        self.booted.call_once(|| {
            first = true;
            desc
        });
        if !first {
            return Err(MachineError::AlreadyBooted);
        }

        info!("Machine model: {}", desc.name);
        if let Some(map_io) = desc.map_io {
            map_io();
        }
        (desc.init_machine)();
        if let Some(init_late) = desc.init_late {
            init_late();
        }
        Ok(desc)
    }

    /// The profile selected by [MachineTable::boot], if any.
    pub fn selected(&self) -> Option<&'static MachineDesc> {
        self.booted.get().copied()
    }
}

impl Default for MachineTable {
    fn default() -> Self {
        Self::new()
    }
}

pub static MACHINE_TABLE: MachineTable = MachineTable::new();
