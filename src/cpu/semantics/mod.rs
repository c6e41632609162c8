/*!
semantics - one function per mnemonic family, wired into the opcode
tables in `cpu::tables`.

Each function takes `&mut Cpu` and is the exact value stored as an
`OpDescriptor::exec` fn pointer; addressing-mode resolution happens
inside the function body via the primitives in `cpu::addressing`, so
every function already accounts for its own operand fetch and phantom
cycles before touching architectural state.
*/

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod c02;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod illegal;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod misc;
pub(crate) mod rmw;
