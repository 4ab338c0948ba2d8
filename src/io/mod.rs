//! Mesh file export and import.
//!
//! Everything here works on in-memory buffers or caller-supplied writers;
//! opening and creating files is left to the caller.

pub mod stl;
