pub mod cart;
pub mod community;
pub mod dispatch;
pub mod init;
pub mod product;
pub mod progress;
pub mod quiz;
pub mod review;
pub mod routine;
pub mod seed;
pub mod shared;
