/*!
base.rs - the 151 documented 6502 opcodes common to every flavor.

Shared by NMOS and both CMOS parts; CMOS-specific changes to existing
mnemonics (new addressing modes for ORA/AND/EOR/ADC/SBC/LDA/STA/CMP,
the clean indirect JMP, etc.) live in `cmos_shared` and overlay this
table rather than being edited in here.
*/

use super::{AddrMode, OpDescriptor, RawTable};
use crate::cpu::semantics::*;

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

    // Loads
    set!(t, 0xA9, "LDA", Immediate, load_store::lda_imm);
    set!(t, 0xA5, "LDA", ZeroPage, load_store::lda_zp);
    set!(t, 0xB5, "LDA", ZeroPageX, load_store::lda_zp_x);
    set!(t, 0xAD, "LDA", Absolute, load_store::lda_abs);
    set!(t, 0xBD, "LDA", AbsoluteX, load_store::lda_abs_x);
    set!(t, 0xB9, "LDA", AbsoluteY, load_store::lda_abs_y);
    set!(t, 0xA1, "LDA", IndexedIndirect, load_store::lda_ind_x);
    set!(t, 0xB1, "LDA", IndirectIndexed, load_store::lda_ind_y);

    set!(t, 0xA2, "LDX", Immediate, load_store::ldx_imm);
    set!(t, 0xA6, "LDX", ZeroPage, load_store::ldx_zp);
    set!(t, 0xB6, "LDX", ZeroPageY, load_store::ldx_zp_y);
    set!(t, 0xAE, "LDX", Absolute, load_store::ldx_abs);
    set!(t, 0xBE, "LDX", AbsoluteY, load_store::ldx_abs_y);

    set!(t, 0xA0, "LDY", Immediate, load_store::ldy_imm);
    set!(t, 0xA4, "LDY", ZeroPage, load_store::ldy_zp);
    set!(t, 0xB4, "LDY", ZeroPageX, load_store::ldy_zp_x);
    set!(t, 0xAC, "LDY", Absolute, load_store::ldy_abs);
    set!(t, 0xBC, "LDY", AbsoluteX, load_store::ldy_abs_x);

    // Stores
    set!(t, 0x85, "STA", ZeroPage, load_store::sta_zp);
    set!(t, 0x95, "STA", ZeroPageX, load_store::sta_zp_x);
    set!(t, 0x8D, "STA", Absolute, load_store::sta_abs);
    set!(t, 0x9D, "STA", AbsoluteX, load_store::sta_abs_x);
    set!(t, 0x99, "STA", AbsoluteY, load_store::sta_abs_y);
    set!(t, 0x81, "STA", IndexedIndirect, load_store::sta_ind_x);
    set!(t, 0x91, "STA", IndirectIndexed, load_store::sta_ind_y);

    set!(t, 0x86, "STX", ZeroPage, load_store::stx_zp);
    set!(t, 0x96, "STX", ZeroPageY, load_store::stx_zp_y);
    set!(t, 0x8E, "STX", Absolute, load_store::stx_abs);

    set!(t, 0x84, "STY", ZeroPage, load_store::sty_zp);
    set!(t, 0x94, "STY", ZeroPageX, load_store::sty_zp_x);
    set!(t, 0x8C, "STY", Absolute, load_store::sty_abs);

    // Arithmetic
    set!(t, 0x69, "ADC", Immediate, arithmetic::adc_imm);
    set!(t, 0x65, "ADC", ZeroPage, arithmetic::adc_zp);
    set!(t, 0x75, "ADC", ZeroPageX, arithmetic::adc_zp_x);
    set!(t, 0x6D, "ADC", Absolute, arithmetic::adc_abs);
    set!(t, 0x7D, "ADC", AbsoluteX, arithmetic::adc_abs_x);
    set!(t, 0x79, "ADC", AbsoluteY, arithmetic::adc_abs_y);
    set!(t, 0x61, "ADC", IndexedIndirect, arithmetic::adc_ind_x);
    set!(t, 0x71, "ADC", IndirectIndexed, arithmetic::adc_ind_y);

    set!(t, 0xE9, "SBC", Immediate, arithmetic::sbc_imm);
    set!(t, 0xE5, "SBC", ZeroPage, arithmetic::sbc_zp);
    set!(t, 0xF5, "SBC", ZeroPageX, arithmetic::sbc_zp_x);
    set!(t, 0xED, "SBC", Absolute, arithmetic::sbc_abs);
    set!(t, 0xFD, "SBC", AbsoluteX, arithmetic::sbc_abs_x);
    set!(t, 0xF9, "SBC", AbsoluteY, arithmetic::sbc_abs_y);
    set!(t, 0xE1, "SBC", IndexedIndirect, arithmetic::sbc_ind_x);
    set!(t, 0xF1, "SBC", IndirectIndexed, arithmetic::sbc_ind_y);

    // Logical
    set!(t, 0x29, "AND", Immediate, logical::and_imm);
    set!(t, 0x25, "AND", ZeroPage, logical::and_zp);
    set!(t, 0x35, "AND", ZeroPageX, logical::and_zp_x);
    set!(t, 0x2D, "AND", Absolute, logical::and_abs);
    set!(t, 0x3D, "AND", AbsoluteX, logical::and_abs_x);
    set!(t, 0x39, "AND", AbsoluteY, logical::and_abs_y);
    set!(t, 0x21, "AND", IndexedIndirect, logical::and_ind_x);
    set!(t, 0x31, "AND", IndirectIndexed, logical::and_ind_y);

    set!(t, 0x09, "ORA", Immediate, logical::ora_imm);
    set!(t, 0x05, "ORA", ZeroPage, logical::ora_zp);
    set!(t, 0x15, "ORA", ZeroPageX, logical::ora_zp_x);
    set!(t, 0x0D, "ORA", Absolute, logical::ora_abs);
    set!(t, 0x1D, "ORA", AbsoluteX, logical::ora_abs_x);
    set!(t, 0x19, "ORA", AbsoluteY, logical::ora_abs_y);
    set!(t, 0x01, "ORA", IndexedIndirect, logical::ora_ind_x);
    set!(t, 0x11, "ORA", IndirectIndexed, logical::ora_ind_y);

    set!(t, 0x49, "EOR", Immediate, logical::eor_imm);
    set!(t, 0x45, "EOR", ZeroPage, logical::eor_zp);
    set!(t, 0x55, "EOR", ZeroPageX, logical::eor_zp_x);
    set!(t, 0x4D, "EOR", Absolute, logical::eor_abs);
    set!(t, 0x5D, "EOR", AbsoluteX, logical::eor_abs_x);
    set!(t, 0x59, "EOR", AbsoluteY, logical::eor_abs_y);
    set!(t, 0x41, "EOR", IndexedIndirect, logical::eor_ind_x);
    set!(t, 0x51, "EOR", IndirectIndexed, logical::eor_ind_y);

    set!(t, 0x24, "BIT", ZeroPage, logical::bit_zp);
    set!(t, 0x2C, "BIT", Absolute, logical::bit_abs);

    // Compare
    set!(t, 0xC9, "CMP", Immediate, compare::cmp_imm);
    set!(t, 0xC5, "CMP", ZeroPage, compare::cmp_zp);
    set!(t, 0xD5, "CMP", ZeroPageX, compare::cmp_zp_x);
    set!(t, 0xCD, "CMP", Absolute, compare::cmp_abs);
    set!(t, 0xDD, "CMP", AbsoluteX, compare::cmp_abs_x);
    set!(t, 0xD9, "CMP", AbsoluteY, compare::cmp_abs_y);
    set!(t, 0xC1, "CMP", IndexedIndirect, compare::cmp_ind_x);
    set!(t, 0xD1, "CMP", IndirectIndexed, compare::cmp_ind_y);

    set!(t, 0xE0, "CPX", Immediate, compare::cpx_imm);
    set!(t, 0xE4, "CPX", ZeroPage, compare::cpx_zp);
    set!(t, 0xEC, "CPX", Absolute, compare::cpx_abs);

    set!(t, 0xC0, "CPY", Immediate, compare::cpy_imm);
    set!(t, 0xC4, "CPY", ZeroPage, compare::cpy_zp);
    set!(t, 0xCC, "CPY", Absolute, compare::cpy_abs);

    // Shifts / RMW
    set!(t, 0x0A, "ASL", Accumulator, rmw::asl_acc);
    set!(t, 0x06, "ASL", ZeroPage, rmw::asl_zp);
    set!(t, 0x16, "ASL", ZeroPageX, rmw::asl_zp_x);
    set!(t, 0x0E, "ASL", Absolute, rmw::asl_abs);
    set!(t, 0x1E, "ASL", AbsoluteX, rmw::asl_abs_x);

    set!(t, 0x4A, "LSR", Accumulator, rmw::lsr_acc);
    set!(t, 0x46, "LSR", ZeroPage, rmw::lsr_zp);
    set!(t, 0x56, "LSR", ZeroPageX, rmw::lsr_zp_x);
    set!(t, 0x4E, "LSR", Absolute, rmw::lsr_abs);
    set!(t, 0x5E, "LSR", AbsoluteX, rmw::lsr_abs_x);

    set!(t, 0x2A, "ROL", Accumulator, rmw::rol_acc);
    set!(t, 0x26, "ROL", ZeroPage, rmw::rol_zp);
    set!(t, 0x36, "ROL", ZeroPageX, rmw::rol_zp_x);
    set!(t, 0x2E, "ROL", Absolute, rmw::rol_abs);
    set!(t, 0x3E, "ROL", AbsoluteX, rmw::rol_abs_x);

    set!(t, 0x6A, "ROR", Accumulator, rmw::ror_acc);
    set!(t, 0x66, "ROR", ZeroPage, rmw::ror_zp);
    set!(t, 0x76, "ROR", ZeroPageX, rmw::ror_zp_x);
    set!(t, 0x6E, "ROR", Absolute, rmw::ror_abs);
    set!(t, 0x7E, "ROR", AbsoluteX, rmw::ror_abs_x);

    set!(t, 0xE6, "INC", ZeroPage, rmw::inc_zp);
    set!(t, 0xF6, "INC", ZeroPageX, rmw::inc_zp_x);
    set!(t, 0xEE, "INC", Absolute, rmw::inc_abs);
    set!(t, 0xFE, "INC", AbsoluteX, rmw::inc_abs_x);

    set!(t, 0xC6, "DEC", ZeroPage, rmw::dec_zp);
    set!(t, 0xD6, "DEC", ZeroPageX, rmw::dec_zp_x);
    set!(t, 0xCE, "DEC", Absolute, rmw::dec_abs);
    set!(t, 0xDE, "DEC", AbsoluteX, rmw::dec_abs_x);

    set!(t, 0xE8, "INX", Implied, misc::inx);
    set!(t, 0xC8, "INY", Implied, misc::iny);
    set!(t, 0xCA, "DEX", Implied, misc::dex);
    set!(t, 0x88, "DEY", Implied, misc::dey);

    // Branches
    set!(t, 0x90, "BCC", Relative, branches::bcc);
    set!(t, 0xB0, "BCS", Relative, branches::bcs);
    set!(t, 0xF0, "BEQ", Relative, branches::beq);
    set!(t, 0xD0, "BNE", Relative, branches::bne);
    set!(t, 0x30, "BMI", Relative, branches::bmi);
    set!(t, 0x10, "BPL", Relative, branches::bpl);
    set!(t, 0x50, "BVC", Relative, branches::bvc);
    set!(t, 0x70, "BVS", Relative, branches::bvs);

    // Control flow
    set!(t, 0x4C, "JMP", Absolute, control_flow::jmp_abs);
    set!(t, 0x6C, "JMP", Indirect, control_flow::jmp_ind);
    set!(t, 0x20, "JSR", Absolute, control_flow::jsr);
    set!(t, 0x60, "RTS", Implied, control_flow::rts);
    set!(t, 0x40, "RTI", Implied, control_flow::rti);
    set!(t, 0x00, "BRK", Implied, control_flow::brk);
    set!(t, 0xEA, "NOP", Implied, control_flow::nop);

    // Transfers / stack / flags
    set!(t, 0xAA, "TAX", Implied, misc::tax);
    set!(t, 0xA8, "TAY", Implied, misc::tay);
    set!(t, 0x8A, "TXA", Implied, misc::txa);
    set!(t, 0x98, "TYA", Implied, misc::tya);
    set!(t, 0xBA, "TSX", Implied, misc::tsx);
    set!(t, 0x9A, "TXS", Implied, misc::txs);

    set!(t, 0x48, "PHA", Implied, misc::pha);
    set!(t, 0x68, "PLA", Implied, misc::pla);
    set!(t, 0x08, "PHP", Implied, misc::php);
    set!(t, 0x28, "PLP", Implied, misc::plp);

    set!(t, 0x18, "CLC", Implied, misc::clc);
    set!(t, 0x38, "SEC", Implied, misc::sec);
    set!(t, 0x58, "CLI", Implied, misc::cli);
    set!(t, 0x78, "SEI", Implied, misc::sei);
    set!(t, 0xD8, "CLD", Implied, misc::cld);
    set!(t, 0xF8, "SED", Implied, misc::sed);
    set!(t, 0xB8, "CLV", Implied, misc::clv);

    t
}
