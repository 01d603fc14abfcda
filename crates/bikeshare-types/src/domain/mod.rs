pub mod city;
pub mod trip;

pub use city::*;
pub use trip::*;
