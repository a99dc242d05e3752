pub mod a001_perk;
