pub mod analysis;
pub mod indicators;
pub mod info;
pub mod series;

pub use analysis::*;
pub use indicators::*;
pub use info::*;
pub use series::*;
