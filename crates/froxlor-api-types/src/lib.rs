//! Wire types exchanged between the Froxlor shell and the panel API.
//!
//! The shell and the API agree on a single-line JSON (JSONL) exchange: the
//! client writes one [`ApiRequest`] per line and reads back one
//! [`ApiResponse`] per line. The parameter model mirrors the shell's
//! `name=value` grammar: values are either scalars or a single level of
//! nested assignments.

pub mod params;
pub mod request;
pub mod response;

pub use params::{ParamMap, ParamValue};
pub use request::{ApiRequest, WireError};
pub use response::{ApiResponse, ResponseHeader, SUCCESS_CODE};
