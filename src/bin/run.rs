/*!
run - a developer harness: load a raw binary image into flat RAM,
reset a CPU, and step it while printing the observable state after
every instruction.

Usage: run <path-to-binary> [flavor] [cycle-budget]

`flavor` is one of `nmos`, `rockwell`, `wdc` (default `nmos`). The
image is loaded at address 0x0000; the reset vector at 0xFFFC/0xFFFD
still determines the actual entry point, so a typical test image
places its vector table at the top of the 64KiB space it occupies.
*/

use mos6502_core::{Cpu, Flavor, PageHandler};
use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

struct FlatRam {
    data: [u8; 65536],
}

impl PageHandler for FlatRam {
    fn start(&self) -> u8 {
        0x00
    }
    fn end(&self) -> u8 {
        0xFF
    }
    fn read(&mut self, page: u8, offset: u8) -> u8 {
        self.data[((page as usize) << 8) | offset as usize]
    }
    fn write(&mut self, page: u8, offset: u8, value: u8) {
        self.data[((page as usize) << 8) | offset as usize] = value;
    }
}

fn parse_flavor(s: &str) -> Flavor {
    match s {
        "rockwell" => Flavor::Rockwell65C02,
        "wdc" => Flavor::Wdc65C02,
        _ => Flavor::Nmos6502,
    }
}

fn main() {
    let mut args = std::env::args().skip(1);
    let path = match args.next() {
        Some(p) => p,
        None => {
            eprintln!("usage: run <path-to-binary> [nmos|rockwell|wdc] [cycle-budget]");
            std::process::exit(1);
        }
    };
    let flavor = args.next().map(|s| parse_flavor(&s)).unwrap_or(Flavor::Nmos6502);
    let budget: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(1_000_000);

    let image = fs::read(&path).unwrap_or_else(|e| {
        eprintln!("failed to read {path}: {e}");
        std::process::exit(1);
    });

    let mut cpu = Cpu::new(flavor).unwrap_or_else(|e| {
        eprintln!("failed to build cpu: {e}");
        std::process::exit(1);
    });

    let mut ram = FlatRam { data: [0; 65536] };
    ram.data[..image.len().min(65536)].copy_from_slice(&image[..image.len().min(65536)]);
    let handler: Rc<RefCell<dyn PageHandler>> = Rc::new(RefCell::new(ram));
    cpu.add_page_handler(handler, 0x00, 0xFF);

    cpu.reset();

    println!("flavor={flavor:?} entry=${:04X}", cpu.pc());

    cpu.step_cycles_debug(budget, |c| {
        let s = c.get_state();
        println!(
            "a={:02X} x={:02X} y={:02X} p={:02X} pc={:04X} sp={:02X} cycles={}",
            s.a, s.x, s.y, s.p, s.pc, s.sp, s.cycles
        );
        c.stop()
    });

    if cpu.stop() {
        println!("halted via STP after {} cycles", cpu.cycles());
    } else {
        println!("budget exhausted after {} cycles", cpu.cycles());
    }
}
