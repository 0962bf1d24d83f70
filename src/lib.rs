//! Interswitch WebPay offsite-redirect gateway for an e-commerce
//! checkout flow.
//!
//! The [`webpay`] module is the core: signed redirect payloads out,
//! signed server-side verification on return. The [`api`] module is a
//! thin axum shim showing how a host platform wires the core in.

pub mod api;
pub mod config;
pub mod webpay;
