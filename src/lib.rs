//! A feedforward neural network with one hidden layer, trained by online
//! stochastic backpropagation.

#![deny(unsafe_code, rust_2018_idioms, rust_2021_compatibility)]
#![warn(missing_docs)]

pub mod dataset;
pub mod network;
