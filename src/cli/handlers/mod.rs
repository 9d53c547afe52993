pub mod check;
pub mod compare;
pub mod config;
pub mod decode;
pub mod encode;
pub mod normalize;
