//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in lavare-core for common washing machine hardware:
//!
//! - Water pump (inlet and drain solenoid valves)
//! - Drum engine (wash and spin relays)
//! - Dirt detection (optical reflectance sensor)
//!
//! Drivers block on an `embedded_hal::delay::DelayNs` for the duration
//! of each operation.

#![no_std]
#![deny(unsafe_code)]

pub mod engine;
pub mod pump;
pub mod sensor;

#[cfg(test)]
mod mock;
