pub mod formats;
pub mod inspect;
pub mod unpack;
