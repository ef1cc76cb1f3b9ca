pub mod pick_random;
pub mod recommend;
