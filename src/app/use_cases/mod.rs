//! Use-Cases der Application-Layer-Orchestrierung.

pub mod backend_reply;
pub mod camera;
pub mod gesture;
pub mod localize;
pub mod measurements;
pub mod mode;
pub mod pick;
pub mod positions;
pub mod zones;
