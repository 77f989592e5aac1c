// Camera domain: live frame access.

pub mod dummy;
pub mod frame;
pub mod source;
