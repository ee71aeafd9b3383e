//! CSR (Compressed Sparse Row) format over non-empty rows

mod conversion;
mod core;
mod elementwise;
mod matmul;

pub use self::core::CsrMatrix;
pub(crate) use self::core::CsrBuilder;
