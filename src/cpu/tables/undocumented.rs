/*!
undocumented.rs - the NMOS illegal-opcode overlay.

Every opcode the base table leaves unclaimed gets bound here, including
the duplicate NOP/SBC encodings and the JAM/HLT pool, so that
`finalize_nmos` never sees a gap: real NMOS silicon decodes all 256
opcode values to *something*.
*/

use super::{AddrMode, OpDescriptor, RawTable};
use crate::cpu::semantics::{arithmetic, illegal};

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

    // LAX
    set!(t, 0xA7, "LAX", ZeroPage, illegal::lax_zp);
    set!(t, 0xB7, "LAX", ZeroPageY, illegal::lax_zp_y);
    set!(t, 0xAF, "LAX", Absolute, illegal::lax_abs);
    set!(t, 0xBF, "LAX", AbsoluteY, illegal::lax_abs_y);
    set!(t, 0xA3, "LAX", IndexedIndirect, illegal::lax_ind_x);
    set!(t, 0xB3, "LAX", IndirectIndexed, illegal::lax_ind_y);

    // SAX
    set!(t, 0x87, "SAX", ZeroPage, illegal::sax_zp);
    set!(t, 0x97, "SAX", ZeroPageY, illegal::sax_zp_y);
    set!(t, 0x8F, "SAX", Absolute, illegal::sax_abs);
    set!(t, 0x83, "SAX", IndexedIndirect, illegal::sax_ind_x);

    // DCP
    set!(t, 0xC7, "DCP", ZeroPage, illegal::dcp_zp);
    set!(t, 0xD7, "DCP", ZeroPageX, illegal::dcp_zp_x);
    set!(t, 0xCF, "DCP", Absolute, illegal::dcp_abs);
    set!(t, 0xDF, "DCP", AbsoluteX, illegal::dcp_abs_x);
    set!(t, 0xDB, "DCP", AbsoluteY, illegal::dcp_abs_y);
    set!(t, 0xC3, "DCP", IndexedIndirect, illegal::dcp_ind_x);
    set!(t, 0xD3, "DCP", IndirectIndexed, illegal::dcp_ind_y);

    // ISC / ISB
    set!(t, 0xE7, "ISC", ZeroPage, illegal::isc_zp);
    set!(t, 0xF7, "ISC", ZeroPageX, illegal::isc_zp_x);
    set!(t, 0xEF, "ISC", Absolute, illegal::isc_abs);
    set!(t, 0xFF, "ISC", AbsoluteX, illegal::isc_abs_x);
    set!(t, 0xFB, "ISC", AbsoluteY, illegal::isc_abs_y);
    set!(t, 0xE3, "ISC", IndexedIndirect, illegal::isc_ind_x);
    set!(t, 0xF3, "ISC", IndirectIndexed, illegal::isc_ind_y);

    // SLO
    set!(t, 0x07, "SLO", ZeroPage, illegal::slo_zp);
    set!(t, 0x17, "SLO", ZeroPageX, illegal::slo_zp_x);
    set!(t, 0x0F, "SLO", Absolute, illegal::slo_abs);
    set!(t, 0x1F, "SLO", AbsoluteX, illegal::slo_abs_x);
    set!(t, 0x1B, "SLO", AbsoluteY, illegal::slo_abs_y);
    set!(t, 0x03, "SLO", IndexedIndirect, illegal::slo_ind_x);
    set!(t, 0x13, "SLO", IndirectIndexed, illegal::slo_ind_y);

    // SRE
    set!(t, 0x47, "SRE", ZeroPage, illegal::sre_zp);
    set!(t, 0x57, "SRE", ZeroPageX, illegal::sre_zp_x);
    set!(t, 0x4F, "SRE", Absolute, illegal::sre_abs);
    set!(t, 0x5F, "SRE", AbsoluteX, illegal::sre_abs_x);
    set!(t, 0x5B, "SRE", AbsoluteY, illegal::sre_abs_y);
    set!(t, 0x43, "SRE", IndexedIndirect, illegal::sre_ind_x);
    set!(t, 0x53, "SRE", IndirectIndexed, illegal::sre_ind_y);

    // RLA
    set!(t, 0x27, "RLA", ZeroPage, illegal::rla_zp);
    set!(t, 0x37, "RLA", ZeroPageX, illegal::rla_zp_x);
    set!(t, 0x2F, "RLA", Absolute, illegal::rla_abs);
    set!(t, 0x3F, "RLA", AbsoluteX, illegal::rla_abs_x);
    set!(t, 0x3B, "RLA", AbsoluteY, illegal::rla_abs_y);
    set!(t, 0x23, "RLA", IndexedIndirect, illegal::rla_ind_x);
    set!(t, 0x33, "RLA", IndirectIndexed, illegal::rla_ind_y);

    // RRA
    set!(t, 0x67, "RRA", ZeroPage, illegal::rra_zp);
    set!(t, 0x77, "RRA", ZeroPageX, illegal::rra_zp_x);
    set!(t, 0x6F, "RRA", Absolute, illegal::rra_abs);
    set!(t, 0x7F, "RRA", AbsoluteX, illegal::rra_abs_x);
    set!(t, 0x7B, "RRA", AbsoluteY, illegal::rra_abs_y);
    set!(t, 0x63, "RRA", IndexedIndirect, illegal::rra_ind_x);
    set!(t, 0x73, "RRA", IndirectIndexed, illegal::rra_ind_y);

    // Immediate-only combos
    set!(t, 0x0B, "ANC", Immediate, illegal::anc);
    set!(t, 0x2B, "ANC", Immediate, illegal::anc);
    set!(t, 0x4B, "ALR", Immediate, illegal::alr);
    set!(t, 0x6B, "ARR", Immediate, illegal::arr);
    set!(t, 0xCB, "SBX", Immediate, illegal::sbx);
    set!(t, 0xEB, "SBC", Immediate, arithmetic::sbc_imm);
    set!(t, 0x8B, "ANE", Immediate, illegal::ane);
    set!(t, 0xAB, "LXA", Immediate, illegal::lxa);

    // Unstable high-byte-coupled stores/loads
    set!(t, 0x9F, "SHA", AbsoluteY, illegal::sha_abs_y);
    set!(t, 0x93, "SHA", IndirectIndexed, illegal::sha_ind_y);
    set!(t, 0x9E, "SHX", AbsoluteY, illegal::shx);
    set!(t, 0x9C, "SHY", AbsoluteX, illegal::shy);
    set!(t, 0x9B, "TAS", AbsoluteY, illegal::tas);
    set!(t, 0xBB, "LAS", AbsoluteY, illegal::las);

    // Multi-byte and single-byte NOP duplicates
    set!(t, 0x80, "NOP", Immediate, illegal::nop_imm);
    set!(t, 0x82, "NOP", Immediate, illegal::nop_imm);
    set!(t, 0x89, "NOP", Immediate, illegal::nop_imm);
    set!(t, 0xC2, "NOP", Immediate, illegal::nop_imm);
    set!(t, 0xE2, "NOP", Immediate, illegal::nop_imm);

    set!(t, 0x04, "NOP", ZeroPage, illegal::nop_zp);
    set!(t, 0x44, "NOP", ZeroPage, illegal::nop_zp);
    set!(t, 0x64, "NOP", ZeroPage, illegal::nop_zp);

    set!(t, 0x14, "NOP", ZeroPageX, illegal::nop_zp_x);
    set!(t, 0x34, "NOP", ZeroPageX, illegal::nop_zp_x);
    set!(t, 0x54, "NOP", ZeroPageX, illegal::nop_zp_x);
    set!(t, 0x74, "NOP", ZeroPageX, illegal::nop_zp_x);
    set!(t, 0xD4, "NOP", ZeroPageX, illegal::nop_zp_x);
    set!(t, 0xF4, "NOP", ZeroPageX, illegal::nop_zp_x);

    set!(t, 0x0C, "NOP", Absolute, illegal::nop_abs);

    set!(t, 0x1C, "NOP", AbsoluteX, illegal::nop_abs_x);
    set!(t, 0x3C, "NOP", AbsoluteX, illegal::nop_abs_x);
    set!(t, 0x5C, "NOP", AbsoluteX, illegal::nop_abs_x);
    set!(t, 0x7C, "NOP", AbsoluteX, illegal::nop_abs_x);
    set!(t, 0xDC, "NOP", AbsoluteX, illegal::nop_abs_x);
    set!(t, 0xFC, "NOP", AbsoluteX, illegal::nop_abs_x);

    set!(t, 0x1A, "NOP", Implied, crate::cpu::semantics::control_flow::nop);
    set!(t, 0x3A, "NOP", Implied, crate::cpu::semantics::control_flow::nop);
    set!(t, 0x5A, "NOP", Implied, crate::cpu::semantics::control_flow::nop);
    set!(t, 0x7A, "NOP", Implied, crate::cpu::semantics::control_flow::nop);
    set!(t, 0xDA, "NOP", Implied, crate::cpu::semantics::control_flow::nop);
    set!(t, 0xFA, "NOP", Implied, crate::cpu::semantics::control_flow::nop);

    // JAM / HLT / KIL pool
    for opcode in [
        0x02u8, 0x12, 0x22, 0x32, 0x42, 0x52, 0x62, 0x72, 0x92, 0xB2, 0xD2, 0xF2,
    ] {
        set!(t, opcode, "JAM", Implied, illegal::jam);
    }

    t
}
