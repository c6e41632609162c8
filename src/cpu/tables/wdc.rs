/*!
wdc.rs - WDC 65C02 deltas on top of `cmos_shared`: WAI and STP.
*/

use super::{AddrMode, OpDescriptor, RawTable};
use crate::cpu::Cpu;

pub(super) fn table() -> RawTable {
    let mut t: RawTable = [None; 256];
    t[0xCB] = Some(OpDescriptor {
        mnemonic: "WAI",
        mode: AddrMode::Implied,
        exec: Cpu::wai,
    });
    t[0xDB] = Some(OpDescriptor {
        mnemonic: "STP",
        mode: AddrMode::Implied,
        exec: Cpu::stp,
    });
    t
}
