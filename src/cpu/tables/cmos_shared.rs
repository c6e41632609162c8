/*!
cmos_shared.rs - changes common to both CMOS parts (Rockwell and WDC).

Everything here overlays the base 6502 table: new `(zp)` addressing
slots for the eight indirect-capable ALU ops (each taking over a
opcode NMOS decodes as JAM), BIT's extra modes, TRB/TSB, STZ, the
accumulator INC/DEC, the bug-fixed indirect JMPs, PHX/PHY/PLX/PLY, BRA,
and the RMBn/SMBn/BBRn/BBSn families.
*/

use super::{AddrMode, OpDescriptor, RawTable};
use crate::cpu::semantics::{
    arithmetic, branches, c02, compare, control_flow, load_store, logical, misc, rmw,
};

macro_rules! set {
    ($table:ident, $op:expr, $mn:expr, $mode:expr, $f:expr) => {
        $table[$op as usize] = Some(OpDescriptor {
            mnemonic: $mn,
            mode: $mode,
            exec: $f,
        });
    };
}

pub(super) fn table() -> RawTable {
    use AddrMode::*;
    let mut t: RawTable = [None; 256];

    // New (zp) indirect addressing mode for the eight ALU/load/store ops.
    set!(t, 0x12, "ORA", IndirectZp, logical::ora_ind_zp);
    set!(t, 0x32, "AND", IndirectZp, logical::and_ind_zp);
    set!(t, 0x52, "EOR", IndirectZp, logical::eor_ind_zp);
    set!(t, 0x72, "ADC", IndirectZp, arithmetic::adc_ind_zp);
    set!(t, 0x92, "STA", IndirectZp, load_store::sta_ind_zp);
    set!(t, 0xB2, "LDA", IndirectZp, load_store::lda_ind_zp);
    set!(t, 0xD2, "CMP", IndirectZp, compare::cmp_ind_zp);
    set!(t, 0xF2, "SBC", IndirectZp, arithmetic::sbc_ind_zp);

    // BIT gains zp,x / abs,x / #imm.
    set!(t, 0x34, "BIT", ZeroPageX, logical::bit_zp_x);
    set!(t, 0x3C, "BIT", AbsoluteX, logical::bit_abs_x);
    set!(t, 0x89, "BIT", Immediate, logical::bit_imm);

    // TRB/TSB
    set!(t, 0x14, "TRB", ZeroPage, c02::trb_zp);
    set!(t, 0x1C, "TRB", Absolute, c02::trb_abs);
    set!(t, 0x04, "TSB", ZeroPage, c02::tsb_zp);
    set!(t, 0x0C, "TSB", Absolute, c02::tsb_abs);

    // STZ
    set!(t, 0x64, "STZ", ZeroPage, c02::stz_zp);
    set!(t, 0x74, "STZ", ZeroPageX, c02::stz_zp_x);
    set!(t, 0x9C, "STZ", Absolute, c02::stz_abs);
    set!(t, 0x9E, "STZ", AbsoluteX, c02::stz_abs_x);

    // Accumulator INC/DEC
    set!(t, 0x1A, "INC", Accumulator, rmw::inc_acc);
    set!(t, 0x3A, "DEC", Accumulator, rmw::dec_acc);

    // Clean indirect JMPs (the NMOS page-wrap bug is fixed on CMOS).
    set!(t, 0x6C, "JMP", Indirect, control_flow::jmp_ind);
    set!(t, 0x7C, "JMP", IndirectAbsX, control_flow::jmp_ind_abs_x);

    // Extra stack ops
    set!(t, 0xDA, "PHX", Implied, misc::phx);
    set!(t, 0xFA, "PLX", Implied, misc::plx);
    set!(t, 0x5A, "PHY", Implied, misc::phy);
    set!(t, 0x7A, "PLY", Implied, misc::ply);

    // Unconditional relative branch
    set!(t, 0x80, "BRA", Relative, branches::bra);

    // RMBn / SMBn / BBRn / BBSn
    const RMB_OPCODES: [u8; 8] = [0x07, 0x17, 0x27, 0x37, 0x47, 0x57, 0x67, 0x77];
    const SMB_OPCODES: [u8; 8] = [0x87, 0x97, 0xA7, 0xB7, 0xC7, 0xD7, 0xE7, 0xF7];
    const BBR_OPCODES: [u8; 8] = [0x0F, 0x1F, 0x2F, 0x3F, 0x4F, 0x5F, 0x6F, 0x7F];
    const BBS_OPCODES: [u8; 8] = [0x8F, 0x9F, 0xAF, 0xBF, 0xCF, 0xDF, 0xEF, 0xFF];

    for n in 0..8u8 {
        set!(t, RMB_OPCODES[n as usize], "RMB", ZeroPage, c02::rmb(n));
        set!(t, SMB_OPCODES[n as usize], "SMB", ZeroPage, c02::smb(n));
        set!(t, BBR_OPCODES[n as usize], "BBR", ZeroPageRelative, c02::bbr(n));
        set!(t, BBS_OPCODES[n as usize], "BBS", ZeroPageRelative, c02::bbs(n));
    }

    t
}
