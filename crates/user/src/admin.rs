use sha3::{Digest, Sha3_256};
use strum::{AsRefStr, Display, EnumString};

#[derive(EnumString, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
}

/// Shared-secret gate for the admin console.
///
/// Only digests of the configured credentials are kept. Supplied values are
/// digested the same way and compared without short-circuiting, so timing
/// does not reveal how much of a guess matched.
#[derive(Clone)]
pub struct AdminGate {
    username: [u8; 32],
    password: [u8; 32],
}

impl AdminGate {
    pub fn new(username: impl AsRef<str>, password: impl AsRef<str>) -> Self {
        Self {
            username: digest(username.as_ref()),
            password: digest(password.as_ref()),
        }
    }

    pub fn login(&self, username: &str, password: &str) -> ecoclean_shared::Result<Role> {
        let username_ok = constant_time_eq(&self.username, &digest(username));
        let password_ok = constant_time_eq(&self.password, &digest(password));

        if !(username_ok & password_ok) {
            tracing::warn!("rejected admin login");
            ecoclean_shared::unauthorized!("Invalid admin credentials");
        }

        Ok(Role::Admin)
    }
}

fn digest(value: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha3_256::digest(value.as_bytes()));
    out
}

fn constant_time_eq(a: &[u8; 32], b: &[u8; 32]) -> bool {
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
