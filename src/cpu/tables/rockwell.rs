/*!
rockwell.rs - Rockwell R65C02 deltas on top of `cmos_shared`.

The Rockwell parts never implemented WAI/STP; those two opcodes
(0xCB, 0xDB) are simply left unclaimed here and fall through
`finalize_cmos` to the genuine 1-cycle NOP, matching real R65C02
silicon. There is nothing else Rockwell changes relative to the
shared CMOS table.
*/

use super::RawTable;

pub(super) fn table() -> RawTable {
    [None; 256]
}
