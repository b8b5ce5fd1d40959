//! Wire types shared between the AgroMarEC web client and its REST API.

pub mod domain;
pub mod system;
