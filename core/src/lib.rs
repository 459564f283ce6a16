#![no_std]

pub mod bitmap;
pub mod res;
