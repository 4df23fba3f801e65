pub mod buffer;
pub mod consts;
pub mod error;
pub mod extension;
pub mod host;
pub mod identity;
pub mod io;
pub mod navigator;
pub mod replay;
pub mod scan;
