//! ClubSphere - Club Membership Platform Backend
//!
//! This crate implements the REST backend for club listings, memberships,
//! events, event registrations, and paid-membership checkout.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
