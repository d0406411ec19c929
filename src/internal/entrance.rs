pub mod impl_traits;
pub mod remote;
pub mod traits;
