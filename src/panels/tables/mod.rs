pub mod cbc;
pub mod kft;
pub mod lft;
pub mod lipid;
pub mod oncology;
pub mod rheumatology;
pub mod sugar;
pub mod tft;
pub mod urine;
