/// MD5 hash implementation module.
pub mod md5;

pub use md5::Md5Hasher;
