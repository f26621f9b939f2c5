#![no_std]
pub mod alerts;
pub mod bsp;
pub mod cells;
pub mod control;
pub mod divider;
pub mod sampling;
pub mod soc;
