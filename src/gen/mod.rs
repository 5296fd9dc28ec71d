pub mod msweyl;
pub mod pink_noise;

pub use self::msweyl::*;
pub use self::pink_noise::*;
