pub mod ntt_arith;
pub mod ntt_butterfly;
pub mod ntt_engine;
pub mod ntt_error;
pub mod ntt_fifo;
pub mod ntt_oracle;
pub mod ntt_params;
pub mod ntt_ram;
pub mod ntt_stress;
pub mod ntt_twiddle;

pub use ntt_engine::{fwdntt, invntt, mul};
pub use ntt_error::NttError;
pub use ntt_ram::{BankedRam, Mapping, Poly};
