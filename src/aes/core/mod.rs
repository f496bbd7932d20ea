pub(crate) mod constants;
mod core_util;
mod decryption;
mod encryption;
pub(crate) mod field;

pub(crate) use decryption::decrypt_block;
pub(crate) use encryption::encrypt_block;
