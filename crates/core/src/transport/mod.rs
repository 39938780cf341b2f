//! Transport abstractions for the NEST gateway

pub mod client;

pub use client::SpeechClient;
