pub mod key_hash;
