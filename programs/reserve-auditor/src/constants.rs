pub const ROLE_DEFAULT_ADMIN: u8 = 0x01;
pub const ROLE_AUDITOR: u8 = 0x02;

pub const VALID_ROLE_MASK: u8 = 0x03;

pub const RECORD_ROLES: u8 = ROLE_DEFAULT_ADMIN | ROLE_AUDITOR;
pub const LINK_ROLES: u8 = ROLE_DEFAULT_ADMIN;

pub const AUDITOR_SEED: &[u8] = b"auditor";
pub const AUDITOR_ROLE_SEED: &[u8] = b"auditor-role";
