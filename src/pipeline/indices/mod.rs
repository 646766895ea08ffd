//! Derived indices per panel. Each index declares its inputs, a presence
//! guard and fixed bands; when a guard fails the key is simply absent.

pub mod cbc;
pub mod kft;
pub mod lft;
pub mod lipid;
pub mod oncology;
pub mod sugar;
