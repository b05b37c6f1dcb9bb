//! Host services around the wheel session: durable gate storage and the
//! timed result reveal.

pub mod persistence;
pub mod reveal;
