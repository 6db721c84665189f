//! Main module for texcount library functionality

pub mod ast;
pub mod counting;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod testing;
pub mod token;
