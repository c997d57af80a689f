//! Bearer token storage. Login itself belongs to the host page.

pub mod storage;
